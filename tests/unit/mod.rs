mod change_log;
mod epic;
mod product_idea;
mod task;
mod user;
