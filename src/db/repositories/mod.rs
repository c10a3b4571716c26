pub mod change_logs;
pub mod epics;
pub mod product_ideas;
pub mod tasks;
pub mod users;
