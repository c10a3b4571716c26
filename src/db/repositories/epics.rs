use diesel::prelude::*;

use crate::db::models::epic::{Epic, NewEpic, UpdateEpic};

pub struct EpicRepo;

impl EpicRepo {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<Epic>, diesel::result::Error> {
        use crate::schema::epics::dsl::*;
        epics.order(created_at.desc()).load::<Epic>(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        epic_id: uuid::Uuid,
    ) -> Result<Option<Epic>, diesel::result::Error> {
        use crate::schema::epics::dsl::*;
        epics.filter(id.eq(epic_id)).first::<Epic>(conn).optional()
    }

    pub fn exists(
        conn: &mut PgConnection,
        epic_id: uuid::Uuid,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::epics::dsl::*;
        diesel::select(diesel::dsl::exists(epics.filter(id.eq(epic_id)))).get_result(conn)
    }

    pub fn list_by_ids(
        conn: &mut PgConnection,
        epic_ids: &[uuid::Uuid],
    ) -> Result<Vec<Epic>, diesel::result::Error> {
        use crate::schema::epics::dsl::*;
        epics
            .filter(id.eq_any(epic_ids))
            .order(created_at.desc())
            .load::<Epic>(conn)
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_epic: &NewEpic,
    ) -> Result<Epic, diesel::result::Error> {
        diesel::insert_into(crate::schema::epics::table)
            .values(new_epic)
            .get_result(conn)
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        epic_id: uuid::Uuid,
        changes: &UpdateEpic,
    ) -> Result<Epic, diesel::result::Error> {
        use crate::schema::epics::dsl::*;
        diesel::update(epics.filter(id.eq(epic_id)))
            .set(changes)
            .get_result(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        epic_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::epics::dsl::*;
        diesel::delete(epics.filter(id.eq(epic_id))).execute(conn)
    }
}
