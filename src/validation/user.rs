use crate::db::models::user::{CreateUserRequest, UpdateUserRequest};
use crate::error::AppError;
use crate::validation::MAX_TITLE_LEN;

pub fn validate_create_user(req: &CreateUserRequest) -> Result<(), AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::validation("User name is required"));
    }

    if req.name.len() > MAX_TITLE_LEN {
        return Err(AppError::validation(
            "User name is too long (max 255 characters)",
        ));
    }

    validate_email(&req.email)?;

    Ok(())
}

pub fn validate_update_user(req: &UpdateUserRequest) -> Result<(), AppError> {
    if req.name.is_none()
        && req.email.is_none()
        && req.avatar_url.is_none()
        && req.role.is_none()
        && req.user_type.is_none()
    {
        return Err(AppError::validation("No update data provided"));
    }

    if let Some(name) = &req.name {
        if name.trim().is_empty() {
            return Err(AppError::validation("User name cannot be empty"));
        }
        if name.len() > MAX_TITLE_LEN {
            return Err(AppError::validation(
                "User name is too long (max 255 characters)",
            ));
        }
    }

    if let Some(email) = &req.email {
        validate_email(email)?;
    }

    Ok(())
}

fn validate_email(email: &str) -> Result<(), AppError> {
    if email.trim().is_empty() {
        return Err(AppError::validation("Email is required"));
    }

    if email.len() > MAX_TITLE_LEN {
        return Err(AppError::validation(
            "Email is too long (max 255 characters)",
        ));
    }

    // Cheap shape check; real verification belongs to a mail round-trip.
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(AppError::validation("Email format is invalid")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::enums::{UserRole, UserType};

    fn create_req(name: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            avatar_url: None,
            role: UserRole::Member,
            user_type: UserType::Developer,
        }
    }

    #[test]
    fn test_create_user_validation() {
        assert!(validate_create_user(&create_req("Alex Smith", "alex@example.com")).is_ok());
        assert!(validate_create_user(&create_req("", "alex@example.com")).is_err());
        assert!(validate_create_user(&create_req("Alex", "not-an-email")).is_err());
        assert!(validate_create_user(&create_req("Alex", "alex@nodot")).is_err());
        assert!(validate_create_user(&create_req(&"a".repeat(256), "alex@example.com")).is_err());
    }

    #[test]
    fn test_update_user_validation() {
        let empty = UpdateUserRequest {
            name: None,
            email: None,
            avatar_url: None,
            role: None,
            user_type: None,
        };
        assert!(validate_update_user(&empty).is_err());

        let name_only = UpdateUserRequest {
            name: Some("New Name".to_string()),
            ..empty_update()
        };
        assert!(validate_update_user(&name_only).is_ok());

        let bad_email = UpdateUserRequest {
            email: Some("nope".to_string()),
            ..empty_update()
        };
        assert!(validate_update_user(&bad_email).is_err());
    }

    fn empty_update() -> UpdateUserRequest {
        UpdateUserRequest {
            name: None,
            email: None,
            avatar_url: None,
            role: None,
            user_type: None,
        }
    }
}
