use crate::db::enums::{CapabilityCategory, EpicStatus};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Epic models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::epics)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Epic {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub estimation: i32,
    pub capability_category: CapabilityCategory,
    pub status: EpicStatus,
    pub created_by: Uuid,
    pub owner_id: Uuid,
    pub team_members: Vec<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::epics)]
pub struct NewEpic {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub estimation: i32,
    pub capability_category: CapabilityCategory,
    pub status: EpicStatus,
    pub created_by: Uuid,
    pub owner_id: Uuid,
    pub team_members: Vec<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = crate::schema::epics)]
pub struct UpdateEpic {
    pub title: Option<String>,
    pub description: Option<String>,
    pub estimation: Option<i32>,
    pub capability_category: Option<CapabilityCategory>,
    pub status: Option<EpicStatus>,
    pub owner_id: Option<Uuid>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

// Epic API DTOs
#[derive(Deserialize)]
pub struct CreateEpicRequest {
    pub title: String,
    pub description: String,
    pub estimation: i32,
    pub capability_category: CapabilityCategory,
    pub created_by: Uuid,
    pub owner_id: Option<Uuid>,
    pub team_members: Option<Vec<Uuid>>,
}

#[derive(Deserialize)]
pub struct UpdateEpicRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub estimation: Option<i32>,
    pub capability_category: Option<CapabilityCategory>,
    pub owner_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct EpicStatusUpdateRequest {
    pub status: EpicStatus,
}

/// Read-time projection of an epic together with its tasks and progress.
#[derive(Serialize)]
pub struct EpicWithTasks {
    #[serde(flatten)]
    pub epic: Epic,
    pub tasks: Vec<super::task::Task>,
    pub completion_percentage: i32,
    pub total_estimation: i32,
    pub completed_tasks_count: i64,
    pub total_tasks_count: i64,
}
