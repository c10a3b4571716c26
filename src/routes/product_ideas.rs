use crate::AppState;
use crate::db::models::*;
use crate::error::AppResult;
use crate::services::ProductIdeasService;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn get_product_ideas(
    State(state): State<Arc<AppState>>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let ideas = ProductIdeasService::list(&mut conn)?;

    let meta = ResponseMeta {
        request_id: None,
        total_count: Some(ideas.len() as i64),
        execution_time_ms: None,
    };

    let response =
        ApiResponse::success_with_meta(ideas, "Product ideas retrieved successfully", meta);
    Ok((StatusCode::OK, Json(response)))
}

pub async fn create_product_idea(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateProductIdeaRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let idea = ProductIdeasService::create(&mut conn, &payload)?;

    let response = ApiResponse::created(idea, "Product idea created successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_product_idea(
    State(state): State<Arc<AppState>>,
    Path(idea_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let idea = ProductIdeasService::get(&mut conn, idea_id)?;

    let response = ApiResponse::success(idea, "Product idea retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn update_product_idea(
    State(state): State<Arc<AppState>>,
    Path(idea_id): Path<Uuid>,
    Json(payload): Json<UpdateProductIdeaRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let idea = ProductIdeasService::update(&mut conn, idea_id, &payload)?;

    let response = ApiResponse::success(idea, "Product idea updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn delete_product_idea(
    State(state): State<Arc<AppState>>,
    Path(idea_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    ProductIdeasService::delete(&mut conn, idea_id)?;

    let response = ApiResponse::<()>::ok("Product idea deleted successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn update_product_idea_status(
    State(state): State<Arc<AppState>>,
    Path(idea_id): Path<Uuid>,
    Json(payload): Json<ProductIdeaStatusUpdateRequest>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let idea = ProductIdeasService::update_status(&mut conn, idea_id, &payload)?;

    let response = ApiResponse::success(idea, "Product idea status updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_product_idea_epics(
    State(state): State<Arc<AppState>>,
    Path(idea_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let epics = ProductIdeasService::epics(&mut conn, idea_id)?;

    let meta = ResponseMeta {
        request_id: None,
        total_count: Some(epics.len() as i64),
        execution_time_ms: None,
    };

    let response =
        ApiResponse::success_with_meta(epics, "Linked epics retrieved successfully", meta);
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_product_ideas_with_epics(
    State(state): State<Arc<AppState>>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    let ideas = ProductIdeasService::list_with_epics(&mut conn)?;

    let meta = ResponseMeta {
        request_id: None,
        total_count: Some(ideas.len() as i64),
        execution_time_ms: None,
    };

    let response = ApiResponse::success_with_meta(
        ideas,
        "Product ideas with epics retrieved successfully",
        meta,
    );
    Ok((StatusCode::OK, Json(response)))
}

pub async fn link_product_idea_to_epic(
    State(state): State<Arc<AppState>>,
    Path((idea_id, epic_id)): Path<(Uuid, Uuid)>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    ProductIdeasService::link_epic(&mut conn, idea_id, epic_id)?;

    let response = ApiResponse::<()>::ok("Product idea linked to epic");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn unlink_product_idea_from_epic(
    State(state): State<Arc<AppState>>,
    Path((idea_id, epic_id)): Path<(Uuid, Uuid)>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.db.get()?;
    ProductIdeasService::unlink_epic(&mut conn, idea_id, epic_id)?;

    let response = ApiResponse::<()>::ok("Product idea unlinked from epic");
    Ok((StatusCode::OK, Json(response)))
}
