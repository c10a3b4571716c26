use diesel::prelude::*;

use crate::db::models::task::{NewTask, Task, UpdateTask};

pub struct TaskRepo;

impl TaskRepo {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<Task>, diesel::result::Error> {
        use crate::schema::tasks::dsl::*;
        tasks.order(created_at.desc()).load::<Task>(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        task_id: uuid::Uuid,
    ) -> Result<Option<Task>, diesel::result::Error> {
        use crate::schema::tasks::dsl::*;
        tasks.filter(id.eq(task_id)).first::<Task>(conn).optional()
    }

    pub fn list_by_epic(
        conn: &mut PgConnection,
        target_epic_id: uuid::Uuid,
    ) -> Result<Vec<Task>, diesel::result::Error> {
        use crate::schema::tasks::dsl::*;
        tasks
            .filter(epic_id.eq(target_epic_id))
            .order(created_at.desc())
            .load::<Task>(conn)
    }

    pub fn list_by_epic_ids(
        conn: &mut PgConnection,
        epic_ids: &[uuid::Uuid],
    ) -> Result<Vec<Task>, diesel::result::Error> {
        use crate::schema::tasks::dsl::*;
        tasks
            .filter(epic_id.eq_any(epic_ids.iter().map(|e| Some(*e)).collect::<Vec<_>>()))
            .order(created_at.desc())
            .load::<Task>(conn)
    }

    pub fn list_by_assignee(
        conn: &mut PgConnection,
        target_assignee_id: uuid::Uuid,
    ) -> Result<Vec<Task>, diesel::result::Error> {
        use crate::schema::tasks::dsl::*;
        tasks
            .filter(assignee_id.eq(target_assignee_id))
            .order(created_at.desc())
            .load::<Task>(conn)
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_task: &NewTask,
    ) -> Result<Task, diesel::result::Error> {
        diesel::insert_into(crate::schema::tasks::table)
            .values(new_task)
            .get_result(conn)
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        task_id: uuid::Uuid,
        changes: &UpdateTask,
    ) -> Result<Task, diesel::result::Error> {
        use crate::schema::tasks::dsl::*;
        diesel::update(tasks.filter(id.eq(task_id)))
            .set(changes)
            .get_result(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        task_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::tasks::dsl::*;
        diesel::delete(tasks.filter(id.eq(task_id))).execute(conn)
    }

    /// Clears epic_id for every task attached to the epic. Used when an
    /// epic is deleted so its tasks survive detached.
    pub fn detach_from_epic(
        conn: &mut PgConnection,
        target_epic_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::tasks::dsl::*;
        diesel::update(tasks.filter(epic_id.eq(target_epic_id)))
            .set(epic_id.eq(None::<uuid::Uuid>))
            .execute(conn)
    }
}
