use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::enums::{ChangeOperation, EntityType},
    db::models::task::Task,
    db::models::user::{
        CreateUserRequest, NewUser, UpdateUser, UpdateUserRequest, UpdateUserTypeRequest, User,
    },
    db::repositories::tasks::TaskRepo,
    db::repositories::users::UserRepo,
    error::AppError,
    services::change_logs_service::{self, ChangeLogsService},
    validation::user::{validate_create_user, validate_update_user},
};

pub struct UsersService;

impl UsersService {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<User>, AppError> {
        UserRepo::list(conn).map_err(Into::into)
    }

    pub fn get(conn: &mut PgConnection, user_id: Uuid) -> Result<User, AppError> {
        UserRepo::find_by_id(conn, user_id)?.ok_or_else(|| AppError::not_found("user"))
    }

    pub fn create(conn: &mut PgConnection, req: &CreateUserRequest) -> Result<User, AppError> {
        validate_create_user(req)?;

        conn.transaction::<User, AppError, _>(|conn| {
            let new_user = NewUser {
                id: Uuid::new_v4(),
                name: req.name.trim().to_string(),
                email: req.email.trim().to_string(),
                avatar_url: req.avatar_url.clone(),
                role: req.role.clone(),
                user_type: req.user_type.clone(),
                created_at: Utc::now(),
            };

            let user = UserRepo::insert(conn, &new_user)?;

            // A user record has no separate actor, so it logs as itself.
            ChangeLogsService::record(
                conn,
                EntityType::User,
                user.id,
                ChangeOperation::Create,
                user.id,
                change_logs_service::entity_snapshot(&user)?,
            )?;

            Ok(user)
        })
    }

    pub fn update(
        conn: &mut PgConnection,
        user_id: Uuid,
        req: &UpdateUserRequest,
    ) -> Result<User, AppError> {
        validate_update_user(req)?;

        let existing =
            UserRepo::find_by_id(conn, user_id)?.ok_or_else(|| AppError::not_found("user"))?;

        let changes = UpdateUser {
            name: req.name.clone(),
            email: req.email.clone(),
            avatar_url: req.avatar_url.clone(),
            role: req.role.clone(),
            user_type: req.user_type.clone(),
        };

        conn.transaction::<User, AppError, _>(|conn| {
            let updated = UserRepo::update_fields(conn, user_id, &changes)?;

            ChangeLogsService::record(
                conn,
                EntityType::User,
                user_id,
                ChangeOperation::Update,
                user_id,
                change_logs_service::diff_changes(&existing, &updated)?,
            )?;

            Ok(updated)
        })
    }

    pub fn update_type(
        conn: &mut PgConnection,
        user_id: Uuid,
        req: &UpdateUserTypeRequest,
    ) -> Result<User, AppError> {
        let existing =
            UserRepo::find_by_id(conn, user_id)?.ok_or_else(|| AppError::not_found("user"))?;

        let changes = UpdateUser {
            user_type: Some(req.user_type.clone()),
            ..UpdateUser::default()
        };

        conn.transaction::<User, AppError, _>(|conn| {
            let updated = UserRepo::update_fields(conn, user_id, &changes)?;

            ChangeLogsService::record(
                conn,
                EntityType::User,
                user_id,
                ChangeOperation::Update,
                user_id,
                change_logs_service::diff_changes(&existing, &updated)?,
            )?;

            Ok(updated)
        })
    }

    /// Tasks currently assigned to the user.
    pub fn tasks(conn: &mut PgConnection, user_id: Uuid) -> Result<Vec<Task>, AppError> {
        if !UserRepo::exists(conn, user_id)? {
            return Err(AppError::not_found("user"));
        }
        TaskRepo::list_by_assignee(conn, user_id).map_err(Into::into)
    }
}
