pub mod change_logs;
pub mod epics;
pub mod product_ideas;
pub mod tasks;
pub mod users;

use crate::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users", get(users::get_users))
        .route("/users", post(users::create_user))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id", put(users::update_user))
        .route("/users/:user_id/type", put(users::update_user_type))
        .route("/users/:user_id/tasks", get(users::get_user_tasks))
        .route("/epics", get(epics::get_epics))
        .route("/epics", post(epics::create_epic))
        .route("/epics/with-tasks", get(epics::get_epics_with_tasks))
        .route("/epics/:epic_id", get(epics::get_epic))
        .route("/epics/:epic_id", put(epics::update_epic))
        .route("/epics/:epic_id", delete(epics::delete_epic))
        .route("/epics/:epic_id/status", put(epics::update_epic_status))
        .route("/epics/:epic_id/tasks", get(epics::get_epic_tasks))
        .route(
            "/epics/:epic_id/product-ideas",
            get(epics::get_epic_product_ideas),
        )
        .route("/tasks", get(tasks::get_tasks))
        .route("/tasks", post(tasks::create_task))
        .route("/tasks/:task_id", get(tasks::get_task))
        .route("/tasks/:task_id", put(tasks::update_task))
        .route("/tasks/:task_id", delete(tasks::delete_task))
        .route("/tasks/:task_id/status", put(tasks::update_task_status))
        .route("/tasks/epic/:epic_id", get(tasks::get_tasks_by_epic))
        .route(
            "/tasks/assignee/:user_id",
            get(tasks::get_tasks_by_assignee),
        )
        .route("/product-ideas", get(product_ideas::get_product_ideas))
        .route("/product-ideas", post(product_ideas::create_product_idea))
        .route(
            "/product-ideas/with-epics",
            get(product_ideas::get_product_ideas_with_epics),
        )
        .route(
            "/product-ideas/:idea_id",
            get(product_ideas::get_product_idea),
        )
        .route(
            "/product-ideas/:idea_id",
            put(product_ideas::update_product_idea),
        )
        .route(
            "/product-ideas/:idea_id",
            delete(product_ideas::delete_product_idea),
        )
        .route(
            "/product-ideas/:idea_id/status",
            put(product_ideas::update_product_idea_status),
        )
        .route(
            "/product-ideas/:idea_id/epics",
            get(product_ideas::get_product_idea_epics),
        )
        .route(
            "/product-ideas/:idea_id/epics/:epic_id",
            post(product_ideas::link_product_idea_to_epic),
        )
        .route(
            "/product-ideas/:idea_id/epics/:epic_id",
            delete(product_ideas::unlink_product_idea_from_epic),
        )
        .route("/change-logs", get(change_logs::get_change_logs))
        .route("/change-logs", post(change_logs::create_change_log))
        .route(
            "/change-logs/:entity_type/:entity_id",
            get(change_logs::get_entity_change_logs),
        )
        .with_state(state)
}
