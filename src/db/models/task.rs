use crate::db::enums::{TaskPriority, TaskStatus, UserType};
use diesel::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

// Task models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Task {
    pub id: Uuid,
    pub epic_id: Option<Uuid>,
    pub assignee_id: Option<Uuid>,
    pub assignee_type: Option<UserType>,
    pub title: String,
    pub description: String,
    pub estimation: i32,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub is_product_idea: bool,
    pub assigned_date: Option<chrono::DateTime<chrono::Utc>>,
    pub completion_date: Option<chrono::DateTime<chrono::Utc>>,
    pub owner_id: Uuid,
    pub created_by: Uuid,
    pub team_members: Vec<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::tasks)]
pub struct NewTask {
    pub id: Uuid,
    pub epic_id: Option<Uuid>,
    pub assignee_id: Option<Uuid>,
    pub assignee_type: Option<UserType>,
    pub title: String,
    pub description: String,
    pub estimation: i32,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub is_product_idea: bool,
    pub owner_id: Uuid,
    pub created_by: Uuid,
    pub team_members: Vec<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = crate::schema::tasks)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub epic_id: Option<Option<Uuid>>,
    pub assignee_id: Option<Option<Uuid>>,
    pub assignee_type: Option<Option<UserType>>,
    pub estimation: Option<i32>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub assigned_date: Option<Option<chrono::DateTime<chrono::Utc>>>,
    pub completion_date: Option<Option<chrono::DateTime<chrono::Utc>>>,
    pub owner_id: Option<Uuid>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Distinguishes an absent field from an explicit `null`: absent stays
/// `None`, `null` becomes `Some(None)`, a value becomes `Some(Some(v))`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

// Task API DTOs
#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    pub epic_id: Option<Uuid>,
    pub assignee_id: Option<Uuid>,
    pub assignee_type: Option<UserType>,
    pub estimation: i32,
    pub priority: TaskPriority,
    #[serde(default)]
    pub is_product_idea: bool,
    pub created_by: Uuid,
    pub owner_id: Option<Uuid>,
    pub team_members: Option<Vec<Uuid>>,
}

#[derive(Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub epic_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub assignee_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub assignee_type: Option<Option<UserType>>,
    pub estimation: Option<i32>,
    pub priority: Option<TaskPriority>,
    pub assigned_date: Option<chrono::DateTime<chrono::Utc>>,
    pub completion_date: Option<chrono::DateTime<chrono::Utc>>,
    pub owner_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct TaskStatusUpdateRequest {
    pub status: TaskStatus,
}
