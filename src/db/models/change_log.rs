use crate::db::enums::{ChangeOperation, EntityType};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Change log models. Entries are append-only: there is no changeset
// struct and no update or delete path for this table.
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::change_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ChangeLogEntry {
    pub id: Uuid,
    pub entity_type: EntityType,
    pub entity_id: Uuid,
    pub operation: ChangeOperation,
    pub user_id: Uuid,
    pub changes: serde_json::Value,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::change_logs)]
pub struct NewChangeLogEntry {
    pub id: Uuid,
    pub entity_type: EntityType,
    pub entity_id: Uuid,
    pub operation: ChangeOperation,
    pub user_id: Uuid,
    pub changes: serde_json::Value,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// Change log API DTO
#[derive(Deserialize)]
pub struct CreateChangeLogRequest {
    pub entity_type: EntityType,
    pub entity_id: Uuid,
    pub operation: ChangeOperation,
    pub user_id: Uuid,
    #[serde(default = "default_changes")]
    pub changes: serde_json::Value,
}

fn default_changes() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}
