use crate::db::enums::{ProductIdeaStatus, TaskPriority};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Product idea models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::product_ideas)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductIdea {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub estimation: i32,
    pub priority: TaskPriority,
    pub status: ProductIdeaStatus,
    pub owner_id: Uuid,
    pub created_by: Uuid,
    pub team_members: Vec<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_ideas)]
pub struct NewProductIdea {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub estimation: i32,
    pub priority: TaskPriority,
    pub status: ProductIdeaStatus,
    pub owner_id: Uuid,
    pub created_by: Uuid,
    pub team_members: Vec<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = crate::schema::product_ideas)]
pub struct UpdateProductIdea {
    pub title: Option<String>,
    pub description: Option<String>,
    pub estimation: Option<i32>,
    pub priority: Option<TaskPriority>,
    pub status: Option<ProductIdeaStatus>,
    pub owner_id: Option<Uuid>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

// Idea <-> epic link models (many-to-many relationship)
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::product_idea_epic_links)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductIdeaEpicLink {
    pub product_idea_id: Uuid,
    pub epic_id: Uuid,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_idea_epic_links)]
pub struct NewProductIdeaEpicLink {
    pub product_idea_id: Uuid,
    pub epic_id: Uuid,
}

// Product idea API DTOs
#[derive(Deserialize)]
pub struct CreateProductIdeaRequest {
    pub title: String,
    pub description: String,
    pub estimation: i32,
    pub priority: TaskPriority,
    pub created_by: Uuid,
    pub owner_id: Option<Uuid>,
    pub team_members: Option<Vec<Uuid>>,
}

#[derive(Deserialize)]
pub struct UpdateProductIdeaRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub estimation: Option<i32>,
    pub priority: Option<TaskPriority>,
    pub owner_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct ProductIdeaStatusUpdateRequest {
    pub status: ProductIdeaStatus,
}

/// Read-time projection of an idea with its linked epics and progress
/// across every task of those epics.
#[derive(Serialize)]
pub struct ProductIdeaWithEpics {
    #[serde(flatten)]
    pub product_idea: ProductIdea,
    pub epics: Vec<super::epic::Epic>,
    pub implementation_status: i32,
    pub completed_tasks_count: i64,
    pub total_tasks_count: i64,
}
