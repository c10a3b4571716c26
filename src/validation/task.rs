use crate::db::models::task::{CreateTaskRequest, UpdateTaskRequest};
use crate::error::AppError;
use crate::validation::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};

pub fn validate_create_task(req: &CreateTaskRequest) -> Result<(), AppError> {
    validate_title(&req.title)?;
    validate_description(&req.description)?;
    validate_estimation(req.estimation)?;
    Ok(())
}

pub fn validate_update_task(req: &UpdateTaskRequest) -> Result<(), AppError> {
    if req.title.is_none()
        && req.description.is_none()
        && req.epic_id.is_none()
        && req.assignee_id.is_none()
        && req.assignee_type.is_none()
        && req.estimation.is_none()
        && req.priority.is_none()
        && req.assigned_date.is_none()
        && req.completion_date.is_none()
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
        return Err(AppError::validation("Task title is required"));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(AppError::validation(
            "Task title is too long (max 255 characters)",
        ));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), AppError> {
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(AppError::validation(
            "Task description is too long (max 10000 characters)",
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

    fn create_req(title: &str) -> CreateTaskRequest {
        CreateTaskRequest {
            title: title.to_string(),
            description: "Wire up the form".to_string(),
            epic_id: None,
            assignee_id: None,
            assignee_type: None,
            estimation: 3,
            priority: TaskPriority::Medium,
            is_product_idea: false,
            created_by: Uuid::new_v4(),
            owner_id: None,
            team_members: None,
        }
    }

    fn empty_update() -> UpdateTaskRequest {
        UpdateTaskRequest {
            title: None,
            description: None,
            epic_id: None,
            assignee_id: None,
            assignee_type: None,
            estimation: None,
            priority: None,
            assigned_date: None,
            completion_date: None,
            owner_id: None,
        }
    }

    #[test]
    fn test_create_task_validation() {
        assert!(validate_create_task(&create_req("Build form")).is_ok());
        assert!(validate_create_task(&create_req("")).is_err());
        assert!(validate_create_task(&create_req(&"a".repeat(256))).is_err());
    }

    #[test]
    fn test_update_task_validation() {
        assert!(validate_update_task(&empty_update()).is_err());

        // Clearing a reference with an explicit null counts as an update.
        let clear_epic = UpdateTaskRequest {
            epic_id: Some(None),
            ..empty_update()
        };
        assert!(validate_update_task(&clear_epic).is_ok());

        let bad_title = UpdateTaskRequest {
            title: Some("".to_string()),
            ..empty_update()
        };
        assert!(validate_update_task(&bad_title).is_err());
    }
}
