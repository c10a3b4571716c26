use chrono::Utc;
use diesel::prelude::*;
use serde_json::json;
use uuid::Uuid;

use crate::{
    db::enums::{ChangeOperation, EntityType, EpicStatus},
    db::models::epic::{
        CreateEpicRequest, Epic, EpicStatusUpdateRequest, EpicWithTasks, NewEpic, UpdateEpic,
        UpdateEpicRequest,
    },
    db::models::product_idea::ProductIdea,
    db::models::task::Task,
    db::repositories::epics::EpicRepo,
    db::repositories::product_ideas::ProductIdeaRepo,
    db::repositories::tasks::TaskRepo,
    db::repositories::users::UserRepo,
    error::AppError,
    services::change_logs_service::{self, ChangeLogsService},
    services::progress,
    validation::epic::{validate_create_epic, validate_update_epic},
};

pub struct EpicsService;

impl EpicsService {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<Epic>, AppError> {
        EpicRepo::list(conn).map_err(Into::into)
    }

    pub fn get(conn: &mut PgConnection, epic_id: Uuid) -> Result<Epic, AppError> {
        EpicRepo::find_by_id(conn, epic_id)?.ok_or_else(|| AppError::not_found("epic"))
    }

    pub fn create(conn: &mut PgConnection, req: &CreateEpicRequest) -> Result<Epic, AppError> {
        validate_create_epic(req)?;

        ensure_user(conn, req.created_by, "created_by")?;
        let owner_id = req.owner_id.unwrap_or(req.created_by);
        ensure_user(conn, owner_id, "owner_id")?;
        let team_members = req.team_members.clone().unwrap_or_default();
        ensure_team_members(conn, &team_members)?;

        conn.transaction::<Epic, AppError, _>(|conn| {
            let now = Utc::now();
            let new_epic = NewEpic {
                id: Uuid::new_v4(),
                title: req.title.trim().to_string(),
                description: req.description.clone(),
                estimation: req.estimation,
                capability_category: req.capability_category.clone(),
                status: EpicStatus::Planning,
                created_by: req.created_by,
                owner_id,
                team_members,
                created_at: now,
                updated_at: now,
            };

            let epic = EpicRepo::insert(conn, &new_epic)?;

            ChangeLogsService::record(
                conn,
                EntityType::Epic,
                epic.id,
                ChangeOperation::Create,
                epic.created_by,
                change_logs_service::entity_snapshot(&epic)?,
            )?;

            Ok(epic)
        })
    }

    pub fn update(
        conn: &mut PgConnection,
        epic_id: Uuid,
        req: &UpdateEpicRequest,
    ) -> Result<Epic, AppError> {
        validate_update_epic(req)?;

        let existing =
            EpicRepo::find_by_id(conn, epic_id)?.ok_or_else(|| AppError::not_found("epic"))?;

        if let Some(owner_id) = req.owner_id {
            ensure_user(conn, owner_id, "owner_id")?;
        }

        let changes = UpdateEpic {
            title: req.title.clone(),
            description: req.description.clone(),
            estimation: req.estimation,
            capability_category: req.capability_category.clone(),
            status: None,
            owner_id: req.owner_id,
            updated_at: Some(Utc::now()),
        };

        conn.transaction::<Epic, AppError, _>(|conn| {
            let updated = EpicRepo::update_fields(conn, epic_id, &changes)?;

            ChangeLogsService::record(
                conn,
                EntityType::Epic,
                epic_id,
                ChangeOperation::Update,
                existing.owner_id,
                change_logs_service::diff_changes(&existing, &updated)?,
            )?;

            Ok(updated)
        })
    }

    pub fn update_status(
        conn: &mut PgConnection,
        epic_id: Uuid,
        req: &EpicStatusUpdateRequest,
    ) -> Result<Epic, AppError> {
        let existing =
            EpicRepo::find_by_id(conn, epic_id)?.ok_or_else(|| AppError::not_found("epic"))?;

        let changes = UpdateEpic {
            status: Some(req.status.clone()),
            updated_at: Some(Utc::now()),
            ..UpdateEpic::default()
        };

        conn.transaction::<Epic, AppError, _>(|conn| {
            let updated = EpicRepo::update_fields(conn, epic_id, &changes)?;

            ChangeLogsService::record(
                conn,
                EntityType::Epic,
                epic_id,
                ChangeOperation::StatusChange,
                existing.owner_id,
                json!({"status": {"old": existing.status, "new": updated.status}}),
            )?;

            Ok(updated)
        })
    }

    /// Deletes the epic, detaching its tasks and dropping idea links so no
    /// dependent data is lost with it.
    pub fn delete(conn: &mut PgConnection, epic_id: Uuid) -> Result<(), AppError> {
        let existing =
            EpicRepo::find_by_id(conn, epic_id)?.ok_or_else(|| AppError::not_found("epic"))?;

        conn.transaction::<(), AppError, _>(|conn| {
            TaskRepo::detach_from_epic(conn, epic_id)?;
            ProductIdeaRepo::delete_links_by_epic(conn, epic_id)?;
            EpicRepo::delete_by_id(conn, epic_id)?;

            ChangeLogsService::record(
                conn,
                EntityType::Epic,
                epic_id,
                ChangeOperation::Delete,
                existing.owner_id,
                json!({"title": existing.title}),
            )?;

            Ok(())
        })
    }

    pub fn tasks(conn: &mut PgConnection, epic_id: Uuid) -> Result<Vec<Task>, AppError> {
        if !EpicRepo::exists(conn, epic_id)? {
            return Err(AppError::not_found("epic"));
        }
        TaskRepo::list_by_epic(conn, epic_id).map_err(Into::into)
    }

    /// Every epic with its tasks and progress, built from two queries and
    /// grouped in memory.
    pub fn list_with_tasks(conn: &mut PgConnection) -> Result<Vec<EpicWithTasks>, AppError> {
        let epics = EpicRepo::list(conn)?;
        let mut tasks_by_epic: std::collections::HashMap<Uuid, Vec<Task>> =
            std::collections::HashMap::new();

        for task in TaskRepo::list(conn)? {
            if let Some(epic_id) = task.epic_id {
                tasks_by_epic.entry(epic_id).or_default().push(task);
            }
        }

        Ok(epics
            .into_iter()
            .map(|epic| {
                let tasks = tasks_by_epic.remove(&epic.id).unwrap_or_default();
                progress::epic_with_tasks(epic, tasks)
            })
            .collect())
    }

    pub fn product_ideas(
        conn: &mut PgConnection,
        epic_id: Uuid,
    ) -> Result<Vec<ProductIdea>, AppError> {
        if !EpicRepo::exists(conn, epic_id)? {
            return Err(AppError::not_found("epic"));
        }
        let idea_ids = ProductIdeaRepo::list_idea_ids_by_epic(conn, epic_id)?;
        ProductIdeaRepo::list_by_ids(conn, &idea_ids).map_err(Into::into)
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

fn ensure_team_members(conn: &mut PgConnection, team_members: &[Uuid]) -> Result<(), AppError> {
    if !UserRepo::all_exist(conn, team_members)? {
        return Err(AppError::validation(
            "team_members contains an unknown user",
        ));
    }
    Ok(())
}
