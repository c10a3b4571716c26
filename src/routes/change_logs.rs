use crate::AppState;
use crate::db::models::*;
use crate::error::AppResult;
use crate::services::ChangeLogsService;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn get_change_logs(State(state): State<Arc<AppState>>) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let entries = ChangeLogsService::list(&mut conn)?;

    let meta = ResponseMeta {
        request_id: None,
        total_count: Some(entries.len() as i64),
        execution_time_ms: None,
    };

    let response =
        ApiResponse::success_with_meta(entries, "Change logs retrieved successfully", meta);
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_entity_change_logs(
    State(state): State<Arc<AppState>>,
    Path((entity_type, entity_id)): Path<(String, Uuid)>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let entries = ChangeLogsService::list_by_entity(&mut conn, &entity_type, entity_id)?;

    let meta = ResponseMeta {
        request_id: None,
        total_count: Some(entries.len() as i64),
        execution_time_ms: None,
    };

    let response =
        ApiResponse::success_with_meta(entries, "Entity change logs retrieved successfully", meta);
    Ok((StatusCode::OK, Json(response)))
}

pub async fn create_change_log(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateChangeLogRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let entry = ChangeLogsService::create(&mut conn, &payload)?;

    let response = ApiResponse::created(entry, "Change log entry created successfully");
    Ok((StatusCode::CREATED, Json(response)))
}
