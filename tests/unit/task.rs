// Validation-only tests for tasks

use serde_json::json;
use uuid::Uuid;

#[test]
fn validate_task_create_and_update() {
    use devflow_backend::db::models::{CreateTaskRequest, UpdateTaskRequest};
    use devflow_backend::validation::task::{validate_create_task, validate_update_task};

    let creator = Uuid::new_v4();
    let valid: CreateTaskRequest = serde_json::from_value(json!({
        "title": "Build login form",
        "description": "Wire it to the new endpoint",
        "estimation": 3,
        "priority": "medium",
        "created_by": creator
    }))
    .unwrap();
    assert!(validate_create_task(&valid).is_ok());

    let no_title: CreateTaskRequest = serde_json::from_value(json!({
        "title": "  ",
        "description": "x",
        "estimation": 3,
        "priority": "low",
        "created_by": creator
    }))
    .unwrap();
    assert!(validate_create_task(&no_title).is_err());

    let empty_update: UpdateTaskRequest = serde_json::from_value(json!({})).unwrap();
    assert!(validate_update_task(&empty_update).is_err());
}

#[test]
fn task_update_distinguishes_null_from_absent() {
    use devflow_backend::db::models::UpdateTaskRequest;

    let absent: UpdateTaskRequest = serde_json::from_value(json!({"title": "Rename"})).unwrap();
    assert_eq!(absent.epic_id, None);
    assert_eq!(absent.assignee_id, None);

    let cleared: UpdateTaskRequest =
        serde_json::from_value(json!({"epic_id": null, "assignee_id": null})).unwrap();
    assert_eq!(cleared.epic_id, Some(None));
    assert_eq!(cleared.assignee_id, Some(None));

    let epic = Uuid::new_v4();
    let set: UpdateTaskRequest = serde_json::from_value(json!({"epic_id": epic})).unwrap();
    assert_eq!(set.epic_id, Some(Some(epic)));
}

#[test]
fn task_status_and_priority_reject_unknown_values() {
    use devflow_backend::db::models::{CreateTaskRequest, TaskStatusUpdateRequest};

    assert!(
        serde_json::from_value::<TaskStatusUpdateRequest>(json!({"status": "review"})).is_ok()
    );
    assert!(
        serde_json::from_value::<TaskStatusUpdateRequest>(json!({"status": "archived"})).is_err()
    );

    let bad_priority = serde_json::from_value::<CreateTaskRequest>(json!({
        "title": "T",
        "description": "",
        "estimation": 1,
        "priority": "urgent",
        "created_by": Uuid::new_v4()
    }));
    assert!(bad_priority.is_err());
}
