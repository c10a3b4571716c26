use crate::AppState;
use crate::db::models::*;
use crate::error::AppResult;
use crate::services::UsersService;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn get_users(State(state): State<Arc<AppState>>) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let users = UsersService::list(&mut conn)?;

    let meta = ResponseMeta {
        request_id: None,
        total_count: Some(users.len() as i64),
        execution_time_ms: None,
    };

    let response = ApiResponse::success_with_meta(users, "Users retrieved successfully", meta);
    Ok((StatusCode::OK, Json(response)))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let user = UsersService::create(&mut conn, &payload)?;

    let response = ApiResponse::created(user, "User created successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let user = UsersService::get(&mut conn, user_id)?;

    let response = ApiResponse::success(user, "User retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let user = UsersService::update(&mut conn, user_id, &payload)?;

    let response = ApiResponse::success(user, "User updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn update_user_type(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<UpdateUserTypeRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let user = UsersService::update_type(&mut conn, user_id, &payload)?;

    let response = ApiResponse::success(user, "User type updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_user_tasks(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let tasks = UsersService::tasks(&mut conn, user_id)?;

    let meta = ResponseMeta {
        request_id: None,
        total_count: Some(tasks.len() as i64),
        execution_time_ms: None,
    };

    let response = ApiResponse::success_with_meta(tasks, "User tasks retrieved successfully", meta);
    Ok((StatusCode::OK, Json(response)))
}
