use crate::db::models::product_idea::{CreateProductIdeaRequest, UpdateProductIdeaRequest};
use crate::error::AppError;
use crate::validation::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};

pub fn validate_create_product_idea(req: &CreateProductIdeaRequest) -> Result<(), AppError> {
    validate_title(&req.title)?;
    validate_description(&req.description)?;
    validate_estimation(req.estimation)?;
    Ok(())
}

pub fn validate_update_product_idea(req: &UpdateProductIdeaRequest) -> Result<(), AppError> {
    if req.title.is_none()
        && req.description.is_none()
        && req.estimation.is_none()
        && req.priority.is_none()
        && req.owner_id.is_none()
    {
        return Err(AppError::validation("No update data provided"));
    }

    if let Some(title) = &req.title {
        validate_title(title)?;
    }
    if let Some(description) = &req.description {
        validate_description(description)?;
    }
    if let Some(estimation) = req.estimation {
        validate_estimation(estimation)?;
    }

    Ok(())
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::validation("Product idea title is required"));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(AppError::validation(
            "Product idea title is too long (max 255 characters)",
        ));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), AppError> {
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(AppError::validation(
            "Product idea description is too long (max 10000 characters)",
        ));
    }
    Ok(())
}

fn validate_estimation(estimation: i32) -> Result<(), AppError> {
    if estimation < 0 {
        return Err(AppError::validation("Estimation cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::enums::TaskPriority;
    use uuid::Uuid;

    fn create_req(title: &str, estimation: i32) -> CreateProductIdeaRequest {
        CreateProductIdeaRequest {
            title: title.to_string(),
            description: "Redesign the mobile app".to_string(),
            estimation,
            priority: TaskPriority::High,
            created_by: Uuid::new_v4(),
            owner_id: None,
            team_members: None,
        }
    }

    #[test]
    fn test_create_product_idea_validation() {
        assert!(validate_create_product_idea(&create_req("Mobile redesign", 45)).is_ok());
        assert!(validate_create_product_idea(&create_req("", 45)).is_err());
        assert!(validate_create_product_idea(&create_req("Mobile redesign", -5)).is_err());
    }

    #[test]
    fn test_update_product_idea_validation() {
        let empty = UpdateProductIdeaRequest {
            title: None,
            description: None,
            estimation: None,
            priority: None,
            owner_id: None,
        };
        assert!(validate_update_product_idea(&empty).is_err());

        let priority_only = UpdateProductIdeaRequest {
            priority: Some(TaskPriority::Low),
            ..empty
        };
        assert!(validate_update_product_idea(&priority_only).is_ok());
    }
}
