use diesel::prelude::*;

use crate::db::models::user::{NewUser, UpdateUser, User};

pub struct UserRepo;

impl UserRepo {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<User>, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        users.order(created_at.desc()).load::<User>(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        user_id: uuid::Uuid,
    ) -> Result<Option<User>, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        users.filter(id.eq(user_id)).first::<User>(conn).optional()
    }

    pub fn exists(
        conn: &mut PgConnection,
        user_id: uuid::Uuid,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        diesel::select(diesel::dsl::exists(users.filter(id.eq(user_id)))).get_result(conn)
    }

    /// True only when every id in the slice refers to an existing user.
    pub fn all_exist(
        conn: &mut PgConnection,
        user_ids: &[uuid::Uuid],
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        if user_ids.is_empty() {
            return Ok(true);
        }
        let mut distinct = user_ids.to_vec();
        distinct.sort();
        distinct.dedup();
        let found: i64 = users
            .filter(id.eq_any(&distinct))
            .count()
            .get_result(conn)?;
        Ok(found == distinct.len() as i64)
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_user: &NewUser,
    ) -> Result<User, diesel::result::Error> {
        diesel::insert_into(crate::schema::users::table)
            .values(new_user)
            .get_result(conn)
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        user_id: uuid::Uuid,
        changes: &UpdateUser,
    ) -> Result<User, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        diesel::update(users.filter(id.eq(user_id)))
            .set(changes)
            .get_result(conn)
    }
}
