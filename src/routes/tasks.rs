use crate::AppState;
use crate::db::models::*;
use crate::error::AppResult;
use crate::services::TasksService;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn get_tasks(State(state): State<Arc<AppState>>) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let tasks = TasksService::list(&mut conn)?;

    let meta = ResponseMeta {
        request_id: None,
        total_count: Some(tasks.len() as i64),
        execution_time_ms: None,
    };

    let response = ApiResponse::success_with_meta(tasks, "Tasks retrieved successfully", meta);
    Ok((StatusCode::OK, Json(response)))
}

pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTaskRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let task = TasksService::create(&mut conn, &payload)?;

    let response = ApiResponse::created(task, "Task created successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let task = TasksService::get(&mut conn, task_id)?;

    let response = ApiResponse::success(task, "Task retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<Uuid>,
    Json(payload): Json<UpdateTaskRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let task = TasksService::update(&mut conn, task_id, &payload)?;

    let response = ApiResponse::success(task, "Task updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    TasksService::delete(&mut conn, task_id)?;

    let response = ApiResponse::<()>::ok("Task deleted successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn update_task_status(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<Uuid>,
    Json(payload): Json<TaskStatusUpdateRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let task = TasksService::update_status(&mut conn, task_id, &payload)?;

    let response = ApiResponse::success(task, "Task status updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_tasks_by_epic(
    State(state): State<Arc<AppState>>,
    Path(epic_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let tasks = TasksService::list_by_epic(&mut conn, epic_id)?;

    let meta = ResponseMeta {
        request_id: None,
        total_count: Some(tasks.len() as i64),
        execution_time_ms: None,
    };

    let response = ApiResponse::success_with_meta(tasks, "Tasks retrieved successfully", meta);
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_tasks_by_assignee(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let tasks = TasksService::list_by_assignee(&mut conn, user_id)?;

    let meta = ResponseMeta {
        request_id: None,
        total_count: Some(tasks.len() as i64),
        execution_time_ms: None,
    };

    let response = ApiResponse::success_with_meta(tasks, "Tasks retrieved successfully", meta);
    Ok((StatusCode::OK, Json(response)))
}
