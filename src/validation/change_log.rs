use crate::db::models::change_log::CreateChangeLogRequest;
use crate::error::AppError;

/// The `changes` payload is free-form but must at least be a mapping or a
/// list of field changes, matching what the tracked mutations write.
pub fn validate_create_change_log(req: &CreateChangeLogRequest) -> Result<(), AppError> {
    match &req.changes {
        serde_json::Value::Object(_) | serde_json::Value::Array(_) => Ok(()),
        _ => Err(AppError::validation(
            "Change log changes must be an object or an array",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::enums::{ChangeOperation, EntityType};
    use serde_json::json;
    use uuid::Uuid;

    fn req(changes: serde_json::Value) -> CreateChangeLogRequest {
        CreateChangeLogRequest {
            entity_type: EntityType::Epic,
            entity_id: Uuid::new_v4(),
            operation: ChangeOperation::Update,
            user_id: Uuid::new_v4(),
            changes,
        }
    }

    #[test]
    fn test_create_change_log_validation() {
        assert!(validate_create_change_log(&req(json!({"title": {"old": "a", "new": "b"}}))).is_ok());
        assert!(validate_create_change_log(&req(json!([{"field": "title"}]))).is_ok());
        assert!(validate_create_change_log(&req(json!("renamed"))).is_err());
        assert!(validate_create_change_log(&req(json!(42))).is_err());
    }
}
