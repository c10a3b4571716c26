use chrono::Utc;
use diesel::prelude::*;
use serde_json::json;
use uuid::Uuid;

use crate::{
    db::enums::{ChangeOperation, EntityType, TaskStatus},
    db::models::task::{
        CreateTaskRequest, NewTask, Task, TaskStatusUpdateRequest, UpdateTask, UpdateTaskRequest,
    },
    db::repositories::epics::EpicRepo,
    db::repositories::tasks::TaskRepo,
    db::repositories::users::UserRepo,
    error::AppError,
    services::change_logs_service::{self, ChangeLogsService},
    validation::task::{validate_create_task, validate_update_task},
};

pub struct TasksService;

impl TasksService {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<Task>, AppError> {
        TaskRepo::list(conn).map_err(Into::into)
    }

    pub fn get(conn: &mut PgConnection, task_id: Uuid) -> Result<Task, AppError> {
        TaskRepo::find_by_id(conn, task_id)?.ok_or_else(|| AppError::not_found("task"))
    }

    pub fn create(conn: &mut PgConnection, req: &CreateTaskRequest) -> Result<Task, AppError> {
        validate_create_task(req)?;

        ensure_user(conn, req.created_by, "created_by")?;
        let owner_id = req.owner_id.unwrap_or(req.created_by);
        ensure_user(conn, owner_id, "owner_id")?;
        if let Some(assignee_id) = req.assignee_id {
            ensure_user(conn, assignee_id, "assignee_id")?;
        }
        if let Some(epic_id) = req.epic_id {
            ensure_epic(conn, epic_id)?;
        }
        let team_members = req.team_members.clone().unwrap_or_default();
        ensure_team_members(conn, &team_members)?;

        // Product-idea candidates start in the backlog; regular tasks are
        // immediately ready to pick up.
        let status = if req.is_product_idea {
            TaskStatus::Backlog
        } else {
            TaskStatus::Ready
        };

        conn.transaction::<Task, AppError, _>(|conn| {
            let now = Utc::now();
            let new_task = NewTask {
                id: Uuid::new_v4(),
                epic_id: req.epic_id,
                assignee_id: req.assignee_id,
                assignee_type: req.assignee_type.clone(),
                title: req.title.trim().to_string(),
                description: req.description.clone(),
                estimation: req.estimation,
                priority: req.priority.clone(),
                status,
                is_product_idea: req.is_product_idea,
                owner_id,
                created_by: req.created_by,
                team_members,
                created_at: now,
                updated_at: now,
            };

            let task = TaskRepo::insert(conn, &new_task)?;

            ChangeLogsService::record(
                conn,
                EntityType::Task,
                task.id,
                ChangeOperation::Create,
                task.created_by,
                change_logs_service::entity_snapshot(&task)?,
            )?;

            Ok(task)
        })
    }

    pub fn update(
        conn: &mut PgConnection,
        task_id: Uuid,
        req: &UpdateTaskRequest,
    ) -> Result<Task, AppError> {
        validate_update_task(req)?;

        let existing =
            TaskRepo::find_by_id(conn, task_id)?.ok_or_else(|| AppError::not_found("task"))?;

        // References are only checked when they are being set to a value;
        // explicit null clears without a lookup.
        if let Some(Some(epic_id)) = req.epic_id {
            ensure_epic(conn, epic_id)?;
        }
        if let Some(Some(assignee_id)) = req.assignee_id {
            ensure_user(conn, assignee_id, "assignee_id")?;
        }
        if let Some(owner_id) = req.owner_id {
            ensure_user(conn, owner_id, "owner_id")?;
        }

        let changes = UpdateTask {
            title: req.title.clone(),
            description: req.description.clone(),
            epic_id: req.epic_id,
            assignee_id: req.assignee_id,
            assignee_type: req.assignee_type.clone(),
            estimation: req.estimation,
            priority: req.priority.clone(),
            status: None,
            assigned_date: req.assigned_date.map(Some),
            completion_date: req.completion_date.map(Some),
            owner_id: req.owner_id,
            updated_at: Some(Utc::now()),
        };

        conn.transaction::<Task, AppError, _>(|conn| {
            let updated = TaskRepo::update_fields(conn, task_id, &changes)?;

            ChangeLogsService::record(
                conn,
                EntityType::Task,
                task_id,
                ChangeOperation::Update,
                existing.owner_id,
                change_logs_service::diff_changes(&existing, &updated)?,
            )?;

            Ok(updated)
        })
    }

    /// Status changes also maintain the workflow dates: entering
    /// `in_progress` stamps assigned_date once, entering `done` stamps
    /// completion_date, and leaving `done` clears it again.
    pub fn update_status(
        conn: &mut PgConnection,
        task_id: Uuid,
        req: &TaskStatusUpdateRequest,
    ) -> Result<Task, AppError> {
        let existing =
            TaskRepo::find_by_id(conn, task_id)?.ok_or_else(|| AppError::not_found("task"))?;

        let mut changes = UpdateTask {
            status: Some(req.status.clone()),
            updated_at: Some(Utc::now()),
            ..UpdateTask::default()
        };

        if req.status == TaskStatus::InProgress && existing.assigned_date.is_none() {
            changes.assigned_date = Some(Some(Utc::now()));
        }
        if req.status == TaskStatus::Done && existing.status != TaskStatus::Done {
            changes.completion_date = Some(Some(Utc::now()));
        }
        if req.status != TaskStatus::Done && existing.status == TaskStatus::Done {
            changes.completion_date = Some(None);
        }

        conn.transaction::<Task, AppError, _>(|conn| {
            let updated = TaskRepo::update_fields(conn, task_id, &changes)?;

            ChangeLogsService::record(
                conn,
                EntityType::Task,
                task_id,
                ChangeOperation::StatusChange,
                existing.owner_id,
                json!({"status": {"old": existing.status, "new": updated.status}}),
            )?;

            Ok(updated)
        })
    }

    pub fn delete(conn: &mut PgConnection, task_id: Uuid) -> Result<(), AppError> {
        let existing =
            TaskRepo::find_by_id(conn, task_id)?.ok_or_else(|| AppError::not_found("task"))?;

        conn.transaction::<(), AppError, _>(|conn| {
            TaskRepo::delete_by_id(conn, task_id)?;

            ChangeLogsService::record(
                conn,
                EntityType::Task,
                task_id,
                ChangeOperation::Delete,
                existing.owner_id,
                json!({"title": existing.title}),
            )?;

            Ok(())
        })
    }

    pub fn list_by_epic(conn: &mut PgConnection, epic_id: Uuid) -> Result<Vec<Task>, AppError> {
        if !EpicRepo::exists(conn, epic_id)? {
            return Err(AppError::not_found("epic"));
        }
        TaskRepo::list_by_epic(conn, epic_id).map_err(Into::into)
    }

    pub fn list_by_assignee(
        conn: &mut PgConnection,
        assignee_id: Uuid,
    ) -> Result<Vec<Task>, AppError> {
        if !UserRepo::exists(conn, assignee_id)? {
            return Err(AppError::not_found("user"));
        }
        TaskRepo::list_by_assignee(conn, assignee_id).map_err(Into::into)
    }
}

fn ensure_user(conn: &mut PgConnection, user_id: Uuid, field: &str) -> Result<(), AppError> {
    if !UserRepo::exists(conn, user_id)? {
        return Err(AppError::validation(format!(
            "Unknown user for {}: {}",
            field, user_id
        )));
    }
    Ok(())
}

fn ensure_epic(conn: &mut PgConnection, epic_id: Uuid) -> Result<(), AppError> {
    if !EpicRepo::exists(conn, epic_id)? {
        return Err(AppError::validation(format!(
            "Unknown epic for epic_id: {}",
            epic_id
        )));
    }
    Ok(())
}

fn ensure_team_members(conn: &mut PgConnection, team_members: &[Uuid]) -> Result<(), AppError> {
    if !UserRepo::all_exist(conn, team_members)? {
        return Err(AppError::validation(
            "team_members contains an unknown user",
        ));
    }
    Ok(())
}
