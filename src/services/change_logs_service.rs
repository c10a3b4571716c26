use chrono::Utc;
use diesel::prelude::*;
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    db::enums::{ChangeOperation, EntityType},
    db::models::change_log::{ChangeLogEntry, CreateChangeLogRequest, NewChangeLogEntry},
    db::repositories::change_logs::ChangeLogRepo,
    db::repositories::users::UserRepo,
    error::AppError,
    validation::change_log::validate_create_change_log,
};

// Fields excluded from change tracking on every entity.
const UNTRACKED_FIELDS: [&str; 3] = ["id", "created_at", "updated_at"];

pub struct ChangeLogsService;

impl ChangeLogsService {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<ChangeLogEntry>, AppError> {
        ChangeLogRepo::list(conn).map_err(Into::into)
    }

    pub fn list_by_entity(
        conn: &mut PgConnection,
        entity_type: &str,
        entity_id: Uuid,
    ) -> Result<Vec<ChangeLogEntry>, AppError> {
        let entity_type = EntityType::parse(entity_type)
            .ok_or_else(|| AppError::validation(format!("Unknown entity type: {}", entity_type)))?;
        ChangeLogRepo::list_by_entity(conn, &entity_type, entity_id).map_err(Into::into)
    }

    /// External append via POST /api/change-logs.
    pub fn create(
        conn: &mut PgConnection,
        req: &CreateChangeLogRequest,
    ) -> Result<ChangeLogEntry, AppError> {
        validate_create_change_log(req)?;

        if !UserRepo::exists(conn, req.user_id)? {
            return Err(AppError::validation("Unknown user for user_id"));
        }

        Self::record(
            conn,
            req.entity_type.clone(),
            req.entity_id,
            req.operation.clone(),
            req.user_id,
            req.changes.clone(),
        )
    }

    /// Internal append used by the entity services, always inside the
    /// transaction of the mutation it describes.
    pub fn record(
        conn: &mut PgConnection,
        entity_type: EntityType,
        entity_id: Uuid,
        operation: ChangeOperation,
        user_id: Uuid,
        changes: Value,
    ) -> Result<ChangeLogEntry, AppError> {
        let new_entry = NewChangeLogEntry {
            id: Uuid::new_v4(),
            entity_type,
            entity_id,
            operation,
            user_id,
            changes,
            created_at: Utc::now(),
        };

        ChangeLogRepo::insert(conn, &new_entry).map_err(Into::into)
    }
}

/// Serializes an entity into the field map recorded for `create` entries,
/// with untracked fields removed.
pub fn entity_snapshot<T: Serialize>(entity: &T) -> Result<Value, AppError> {
    let value = serde_json::to_value(entity)
        .map_err(|e| AppError::internal(format!("Failed to serialize entity: {}", e)))?;

    match value {
        Value::Object(mut map) => {
            for field in UNTRACKED_FIELDS {
                map.remove(field);
            }
            Ok(Value::Object(map))
        }
        other => Ok(other),
    }
}

/// Field-level diff between two serialized entities, recorded for `update`
/// entries as `{field: {"old": .., "new": ..}}`.
pub fn diff_changes<T: Serialize>(old: &T, new: &T) -> Result<Value, AppError> {
    let old = serde_json::to_value(old)
        .map_err(|e| AppError::internal(format!("Failed to serialize entity: {}", e)))?;
    let new = serde_json::to_value(new)
        .map_err(|e| AppError::internal(format!("Failed to serialize entity: {}", e)))?;

    let (Value::Object(old), Value::Object(new)) = (old, new) else {
        return Ok(Value::Object(Map::new()));
    };

    let mut changes = Map::new();
    for (field, new_value) in &new {
        if UNTRACKED_FIELDS.contains(&field.as_str()) {
            continue;
        }
        let old_value = old.get(field).cloned().unwrap_or(Value::Null);
        if old_value != *new_value {
            let mut entry = Map::new();
            entry.insert("old".to_string(), old_value);
            entry.insert("new".to_string(), new_value.clone());
            changes.insert(field.clone(), Value::Object(entry));
        }
    }

    Ok(Value::Object(changes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Row {
        id: &'static str,
        title: &'static str,
        estimation: i32,
        updated_at: &'static str,
    }

    #[test]
    fn test_diff_skips_untracked_fields() {
        let old = Row {
            id: "a",
            title: "Old title",
            estimation: 3,
            updated_at: "2024-01-01",
        };
        let new = Row {
            id: "b",
            title: "New title",
            estimation: 3,
            updated_at: "2024-02-01",
        };

        let diff = diff_changes(&old, &new).unwrap();
        assert_eq!(
            diff,
            json!({"title": {"old": "Old title", "new": "New title"}})
        );
    }

    #[test]
    fn test_diff_of_identical_rows_is_empty() {
        let row = Row {
            id: "a",
            title: "Same",
            estimation: 5,
            updated_at: "2024-01-01",
        };
        let diff = diff_changes(&row, &row).unwrap();
        assert_eq!(diff, json!({}));
    }

    #[test]
    fn test_snapshot_drops_server_fields() {
        let row = Row {
            id: "a",
            title: "Snapshot",
            estimation: 8,
            updated_at: "2024-01-01",
        };
        let snapshot = entity_snapshot(&row).unwrap();
        assert_eq!(snapshot, json!({"title": "Snapshot", "estimation": 8}));
    }
}
