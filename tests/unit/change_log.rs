// Validation-only tests for change log entries

use serde_json::json;
use uuid::Uuid;

#[test]
fn validate_change_log_payload_shape() {
    use devflow_backend::db::models::CreateChangeLogRequest;
    use devflow_backend::validation::change_log::validate_create_change_log;

    let object_changes: CreateChangeLogRequest = serde_json::from_value(json!({
        "entity_type": "epic",
        "entity_id": Uuid::new_v4(),
        "operation": "update",
        "user_id": Uuid::new_v4(),
        "changes": {"title": {"old": "a", "new": "b"}}
    }))
    .unwrap();
    assert!(validate_create_change_log(&object_changes).is_ok());

    let scalar_changes: CreateChangeLogRequest = serde_json::from_value(json!({
        "entity_type": "epic",
        "entity_id": Uuid::new_v4(),
        "operation": "update",
        "user_id": Uuid::new_v4(),
        "changes": "renamed"
    }))
    .unwrap();
    assert!(validate_create_change_log(&scalar_changes).is_err());
}

#[test]
fn change_log_enums_reject_unknown_values() {
    use devflow_backend::db::models::CreateChangeLogRequest;

    let bad_entity = serde_json::from_value::<CreateChangeLogRequest>(json!({
        "entity_type": "comment",
        "entity_id": Uuid::new_v4(),
        "operation": "create",
        "user_id": Uuid::new_v4()
    }));
    assert!(bad_entity.is_err());

    let bad_operation = serde_json::from_value::<CreateChangeLogRequest>(json!({
        "entity_type": "task",
        "entity_id": Uuid::new_v4(),
        "operation": "archive",
        "user_id": Uuid::new_v4()
    }));
    assert!(bad_operation.is_err());
}
