// Validation-only tests for product ideas

use serde_json::json;
use uuid::Uuid;

#[test]
fn validate_product_idea_create_and_update() {
    use devflow_backend::db::models::{CreateProductIdeaRequest, UpdateProductIdeaRequest};
    use devflow_backend::validation::product_idea::{
        validate_create_product_idea, validate_update_product_idea,
    };

    let creator = Uuid::new_v4();
    let valid: CreateProductIdeaRequest = serde_json::from_value(json!({
        "title": "Mobile App Redesign",
        "description": "Redesign for better UX",
        "estimation": 45,
        "priority": "high",
        "created_by": creator
    }))
    .unwrap();
    assert!(validate_create_product_idea(&valid).is_ok());

    let no_title: CreateProductIdeaRequest = serde_json::from_value(json!({
        "title": "",
        "description": "x",
        "estimation": 45,
        "priority": "high",
        "created_by": creator
    }))
    .unwrap();
    assert!(validate_create_product_idea(&no_title).is_err());

    let empty_update: UpdateProductIdeaRequest = serde_json::from_value(json!({})).unwrap();
    assert!(validate_update_product_idea(&empty_update).is_err());
}

#[test]
fn product_idea_status_rejects_unknown_values() {
    use devflow_backend::db::models::ProductIdeaStatusUpdateRequest;

    assert!(
        serde_json::from_value::<ProductIdeaStatusUpdateRequest>(json!({"status": "under_review"}))
            .is_ok()
    );
    assert!(
        serde_json::from_value::<ProductIdeaStatusUpdateRequest>(json!({"status": "shipped"}))
            .is_err()
    );
}
