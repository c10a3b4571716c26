use crate::AppState;
use crate::db::models::*;
use crate::error::AppResult;
use crate::services::EpicsService;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn get_epics(State(state): State<Arc<AppState>>) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let epics = EpicsService::list(&mut conn)?;

    let meta = ResponseMeta {
        request_id: None,
        total_count: Some(epics.len() as i64),
        execution_time_ms: None,
    };

    let response = ApiResponse::success_with_meta(epics, "Epics retrieved successfully", meta);
    Ok((StatusCode::OK, Json(response)))
}

pub async fn create_epic(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateEpicRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let epic = EpicsService::create(&mut conn, &payload)?;

    let response = ApiResponse::created(epic, "Epic created successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_epic(
    State(state): State<Arc<AppState>>,
    Path(epic_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let epic = EpicsService::get(&mut conn, epic_id)?;

    let response = ApiResponse::success(epic, "Epic retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn update_epic(
    State(state): State<Arc<AppState>>,
    Path(epic_id): Path<Uuid>,
    Json(payload): Json<UpdateEpicRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let epic = EpicsService::update(&mut conn, epic_id, &payload)?;

    let response = ApiResponse::success(epic, "Epic updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn delete_epic(
    State(state): State<Arc<AppState>>,
    Path(epic_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    EpicsService::delete(&mut conn, epic_id)?;

    let response = ApiResponse::<()>::ok("Epic deleted successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn update_epic_status(
    State(state): State<Arc<AppState>>,
    Path(epic_id): Path<Uuid>,
    Json(payload): Json<EpicStatusUpdateRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let epic = EpicsService::update_status(&mut conn, epic_id, &payload)?;

    let response = ApiResponse::success(epic, "Epic status updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_epic_tasks(
    State(state): State<Arc<AppState>>,
    Path(epic_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let tasks = EpicsService::tasks(&mut conn, epic_id)?;

    let meta = ResponseMeta {
        request_id: None,
        total_count: Some(tasks.len() as i64),
        execution_time_ms: None,
    };

    let response = ApiResponse::success_with_meta(tasks, "Epic tasks retrieved successfully", meta);
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_epics_with_tasks(
    State(state): State<Arc<AppState>>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let epics = EpicsService::list_with_tasks(&mut conn)?;

    let meta = ResponseMeta {
        request_id: None,
        total_count: Some(epics.len() as i64),
        execution_time_ms: None,
    };

    let response =
        ApiResponse::success_with_meta(epics, "Epics with tasks retrieved successfully", meta);
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_epic_product_ideas(
    State(state): State<Arc<AppState>>,
    Path(epic_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let ideas = EpicsService::product_ideas(&mut conn, epic_id)?;

    let meta = ResponseMeta {
        request_id: None,
        total_count: Some(ideas.len() as i64),
        execution_time_ms: None,
    };

    let response =
        ApiResponse::success_with_meta(ideas, "Epic product ideas retrieved successfully", meta);
    Ok((StatusCode::OK, Json(response)))
}
