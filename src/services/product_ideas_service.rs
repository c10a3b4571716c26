use chrono::Utc;
use diesel::prelude::*;
use serde_json::json;
use uuid::Uuid;

use crate::{
    db::enums::{ChangeOperation, EntityType, ProductIdeaStatus},
    db::models::epic::Epic,
    db::models::product_idea::{
        CreateProductIdeaRequest, NewProductIdea, NewProductIdeaEpicLink, ProductIdea,
        ProductIdeaStatusUpdateRequest, ProductIdeaWithEpics, UpdateProductIdea,
        UpdateProductIdeaRequest,
    },
    db::repositories::epics::EpicRepo,
    db::repositories::product_ideas::ProductIdeaRepo,
    db::repositories::tasks::TaskRepo,
    db::repositories::users::UserRepo,
    error::AppError,
    services::change_logs_service::{self, ChangeLogsService},
    services::progress,
    validation::product_idea::{validate_create_product_idea, validate_update_product_idea},
};

pub struct ProductIdeasService;

impl ProductIdeasService {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<ProductIdea>, AppError> {
        ProductIdeaRepo::list(conn).map_err(Into::into)
    }

    pub fn get(conn: &mut PgConnection, idea_id: Uuid) -> Result<ProductIdea, AppError> {
        ProductIdeaRepo::find_by_id(conn, idea_id)?
            .ok_or_else(|| AppError::not_found("product idea"))
    }

    pub fn create(
        conn: &mut PgConnection,
        req: &CreateProductIdeaRequest,
    ) -> Result<ProductIdea, AppError> {
        validate_create_product_idea(req)?;

        ensure_user(conn, req.created_by, "created_by")?;
        let owner_id = req.owner_id.unwrap_or(req.created_by);
        ensure_user(conn, owner_id, "owner_id")?;
        let team_members = req.team_members.clone().unwrap_or_default();
        ensure_team_members(conn, &team_members)?;

        conn.transaction::<ProductIdea, AppError, _>(|conn| {
            let now = Utc::now();
            let new_idea = NewProductIdea {
                id: Uuid::new_v4(),
                title: req.title.trim().to_string(),
                description: req.description.clone(),
                estimation: req.estimation,
                priority: req.priority.clone(),
                status: ProductIdeaStatus::Proposed,
                owner_id,
                created_by: req.created_by,
                team_members,
                created_at: now,
                updated_at: now,
            };

            let idea = ProductIdeaRepo::insert(conn, &new_idea)?;

            ChangeLogsService::record(
                conn,
                EntityType::ProductIdea,
                idea.id,
                ChangeOperation::Create,
                idea.created_by,
                change_logs_service::entity_snapshot(&idea)?,
            )?;

            Ok(idea)
        })
    }

    pub fn update(
        conn: &mut PgConnection,
        idea_id: Uuid,
        req: &UpdateProductIdeaRequest,
    ) -> Result<ProductIdea, AppError> {
        validate_update_product_idea(req)?;

        let existing = ProductIdeaRepo::find_by_id(conn, idea_id)?
            .ok_or_else(|| AppError::not_found("product idea"))?;

        if let Some(owner_id) = req.owner_id {
            ensure_user(conn, owner_id, "owner_id")?;
        }

        let changes = UpdateProductIdea {
            title: req.title.clone(),
            description: req.description.clone(),
            estimation: req.estimation,
            priority: req.priority.clone(),
            status: None,
            owner_id: req.owner_id,
            updated_at: Some(Utc::now()),
        };

        conn.transaction::<ProductIdea, AppError, _>(|conn| {
            let updated = ProductIdeaRepo::update_fields(conn, idea_id, &changes)?;

            ChangeLogsService::record(
                conn,
                EntityType::ProductIdea,
                idea_id,
                ChangeOperation::Update,
                existing.owner_id,
                change_logs_service::diff_changes(&existing, &updated)?,
            )?;

            Ok(updated)
        })
    }

    pub fn update_status(
        conn: &mut PgConnection,
        idea_id: Uuid,
        req: &ProductIdeaStatusUpdateRequest,
    ) -> Result<ProductIdea, AppError> {
        let existing = ProductIdeaRepo::find_by_id(conn, idea_id)?
            .ok_or_else(|| AppError::not_found("product idea"))?;

        let changes = UpdateProductIdea {
            status: Some(req.status.clone()),
            updated_at: Some(Utc::now()),
            ..UpdateProductIdea::default()
        };

        conn.transaction::<ProductIdea, AppError, _>(|conn| {
            let updated = ProductIdeaRepo::update_fields(conn, idea_id, &changes)?;

            ChangeLogsService::record(
                conn,
                EntityType::ProductIdea,
                idea_id,
                ChangeOperation::StatusChange,
                existing.owner_id,
                json!({"status": {"old": existing.status, "new": updated.status}}),
            )?;

            Ok(updated)
        })
    }

    pub fn delete(conn: &mut PgConnection, idea_id: Uuid) -> Result<(), AppError> {
        let existing = ProductIdeaRepo::find_by_id(conn, idea_id)?
            .ok_or_else(|| AppError::not_found("product idea"))?;

        conn.transaction::<(), AppError, _>(|conn| {
            ProductIdeaRepo::delete_links_by_idea(conn, idea_id)?;
            ProductIdeaRepo::delete_by_id(conn, idea_id)?;

            ChangeLogsService::record(
                conn,
                EntityType::ProductIdea,
                idea_id,
                ChangeOperation::Delete,
                existing.owner_id,
                json!({"title": existing.title}),
            )?;

            Ok(())
        })
    }

    /// Links an idea to an epic. Linking an already-linked pair is a
    /// no-op and leaves no change-log entry behind.
    pub fn link_epic(
        conn: &mut PgConnection,
        idea_id: Uuid,
        epic_id: Uuid,
    ) -> Result<(), AppError> {
        let idea = ProductIdeaRepo::find_by_id(conn, idea_id)?
            .ok_or_else(|| AppError::not_found("product idea"))?;
        if !EpicRepo::exists(conn, epic_id)? {
            return Err(AppError::not_found("epic"));
        }

        conn.transaction::<(), AppError, _>(|conn| {
            let link = NewProductIdeaEpicLink {
                product_idea_id: idea_id,
                epic_id,
            };
            let inserted = ProductIdeaRepo::insert_link(conn, &link)?;

            if inserted > 0 {
                ChangeLogsService::record(
                    conn,
                    EntityType::ProductIdea,
                    idea_id,
                    ChangeOperation::Link,
                    idea.owner_id,
                    json!({"epic_id": epic_id}),
                )?;
            }

            Ok(())
        })
    }

    pub fn unlink_epic(
        conn: &mut PgConnection,
        idea_id: Uuid,
        epic_id: Uuid,
    ) -> Result<(), AppError> {
        let idea = ProductIdeaRepo::find_by_id(conn, idea_id)?
            .ok_or_else(|| AppError::not_found("product idea"))?;

        conn.transaction::<(), AppError, _>(|conn| {
            let deleted = ProductIdeaRepo::delete_link(conn, idea_id, epic_id)?;
            if deleted == 0 {
                return Err(AppError::not_found("product idea epic link"));
            }

            ChangeLogsService::record(
                conn,
                EntityType::ProductIdea,
                idea_id,
                ChangeOperation::Unlink,
                idea.owner_id,
                json!({"epic_id": epic_id}),
            )?;

            Ok(())
        })
    }

    pub fn epics(conn: &mut PgConnection, idea_id: Uuid) -> Result<Vec<Epic>, AppError> {
        if ProductIdeaRepo::find_by_id(conn, idea_id)?.is_none() {
            return Err(AppError::not_found("product idea"));
        }
        let epic_ids = ProductIdeaRepo::list_epic_ids_by_idea(conn, idea_id)?;
        EpicRepo::list_by_ids(conn, &epic_ids).map_err(Into::into)
    }

    /// Every idea with its linked epics and progress across the tasks of
    /// those epics.
    pub fn list_with_epics(
        conn: &mut PgConnection,
    ) -> Result<Vec<ProductIdeaWithEpics>, AppError> {
        let ideas = ProductIdeaRepo::list(conn)?;

        let mut projections = Vec::with_capacity(ideas.len());
        for idea in ideas {
            let epic_ids = ProductIdeaRepo::list_epic_ids_by_idea(conn, idea.id)?;
            let epics = EpicRepo::list_by_ids(conn, &epic_ids)?;
            let tasks = if epic_ids.is_empty() {
                Vec::new()
            } else {
                TaskRepo::list_by_epic_ids(conn, &epic_ids)?
            };
            projections.push(progress::product_idea_with_epics(idea, epics, tasks));
        }

        Ok(projections)
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
