use crate::db::models::epic::{CreateEpicRequest, UpdateEpicRequest};
use crate::error::AppError;
use crate::validation::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};

pub fn validate_create_epic(req: &CreateEpicRequest) -> Result<(), AppError> {
    validate_title(&req.title)?;
    validate_description(&req.description)?;
    validate_estimation(req.estimation)?;
    Ok(())
}

pub fn validate_update_epic(req: &UpdateEpicRequest) -> Result<(), AppError> {
    if req.title.is_none()
        && req.description.is_none()
        && req.estimation.is_none()
        && req.capability_category.is_none()
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
        return Err(AppError::validation("Epic title is required"));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(AppError::validation(
            "Epic title is too long (max 255 characters)",
        ));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), AppError> {
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(AppError::validation(
            "Epic description is too long (max 10000 characters)",
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
