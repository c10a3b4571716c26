// Validation-only tests for epics

use serde_json::json;
use uuid::Uuid;

#[test]
fn validate_epic_create_and_update() {
    use devflow_backend::db::models::{CreateEpicRequest, UpdateEpicRequest};
    use devflow_backend::validation::epic::{validate_create_epic, validate_update_epic};

    let creator = Uuid::new_v4();
    let valid: CreateEpicRequest = serde_json::from_value(json!({
        "title": "Authentication System",
        "description": "Implement biometric authentication",
        "estimation": 14,
        "capability_category": "security",
        "created_by": creator
    }))
    .unwrap();
    assert!(validate_create_epic(&valid).is_ok());

    let no_title: CreateEpicRequest = serde_json::from_value(json!({
        "title": "",
        "description": "x",
        "estimation": 14,
        "capability_category": "security",
        "created_by": creator
    }))
    .unwrap();
    assert!(validate_create_epic(&no_title).is_err());

    let negative: CreateEpicRequest = serde_json::from_value(json!({
        "title": "Ok",
        "description": "x",
        "estimation": -3,
        "capability_category": "data",
        "created_by": creator
    }))
    .unwrap();
    assert!(validate_create_epic(&negative).is_err());

    let empty_update: UpdateEpicRequest = serde_json::from_value(json!({})).unwrap();
    assert!(validate_update_epic(&empty_update).is_err());

    let estimation_update: UpdateEpicRequest =
        serde_json::from_value(json!({"estimation": 21})).unwrap();
    assert!(validate_update_epic(&estimation_update).is_ok());
}

#[test]
fn epic_status_rejects_unknown_values() {
    use devflow_backend::db::models::EpicStatusUpdateRequest;

    assert!(
        serde_json::from_value::<EpicStatusUpdateRequest>(json!({"status": "in_progress"})).is_ok()
    );
    assert!(
        serde_json::from_value::<EpicStatusUpdateRequest>(json!({"status": "archived"})).is_err()
    );
}
