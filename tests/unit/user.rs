// Validation-only tests for users

use serde_json::json;

#[test]
fn validate_user_create_and_update() {
    use devflow_backend::db::models::{CreateUserRequest, UpdateUserRequest};
    use devflow_backend::validation::user::{validate_create_user, validate_update_user};

    let valid: CreateUserRequest = serde_json::from_value(json!({
        "name": "Alex Smith",
        "email": "alex@example.com",
        "role": "admin",
        "user_type": "developer"
    }))
    .unwrap();
    assert!(validate_create_user(&valid).is_ok());

    let no_name: CreateUserRequest = serde_json::from_value(json!({
        "name": "",
        "email": "alex@example.com",
        "role": "admin",
        "user_type": "developer"
    }))
    .unwrap();
    assert!(validate_create_user(&no_name).is_err());

    let empty_update: UpdateUserRequest = serde_json::from_value(json!({})).unwrap();
    assert!(validate_update_user(&empty_update).is_err());

    let name_update: UpdateUserRequest =
        serde_json::from_value(json!({"name": "New Name"})).unwrap();
    assert!(validate_update_user(&name_update).is_ok());
}

#[test]
fn user_enums_reject_unknown_values() {
    use devflow_backend::db::models::CreateUserRequest;

    let bad_role = serde_json::from_value::<CreateUserRequest>(json!({
        "name": "Alex",
        "email": "alex@example.com",
        "role": "superuser",
        "user_type": "developer"
    }));
    assert!(bad_role.is_err());

    let bad_type = serde_json::from_value::<CreateUserRequest>(json!({
        "name": "Alex",
        "email": "alex@example.com",
        "role": "member",
        "user_type": "designer"
    }));
    assert!(bad_type.is_err());
}
