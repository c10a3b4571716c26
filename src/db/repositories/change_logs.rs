use diesel::prelude::*;

use crate::db::enums::EntityType;
use crate::db::models::change_log::{ChangeLogEntry, NewChangeLogEntry};

pub struct ChangeLogRepo;

impl ChangeLogRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_entry: &NewChangeLogEntry,
    ) -> Result<ChangeLogEntry, diesel::result::Error> {
        diesel::insert_into(crate::schema::change_logs::table)
            .values(new_entry)
            .get_result(conn)
    }

    pub fn list(conn: &mut PgConnection) -> Result<Vec<ChangeLogEntry>, diesel::result::Error> {
        use crate::schema::change_logs::dsl::*;
        change_logs
            .order(created_at.desc())
            .load::<ChangeLogEntry>(conn)
    }

    /// Entries for one entity, oldest first.
    pub fn list_by_entity(
        conn: &mut PgConnection,
        target_entity_type: &EntityType,
        target_entity_id: uuid::Uuid,
    ) -> Result<Vec<ChangeLogEntry>, diesel::result::Error> {
        use crate::schema::change_logs::dsl::*;
        change_logs
            .filter(entity_type.eq(target_entity_type))
            .filter(entity_id.eq(target_entity_id))
            .order(created_at.asc())
            .load::<ChangeLogEntry>(conn)
    }
}
