use diesel::prelude::*;

use crate::db::models::product_idea::{
    NewProductIdea, NewProductIdeaEpicLink, ProductIdea, UpdateProductIdea,
};

pub struct ProductIdeaRepo;

impl ProductIdeaRepo {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<ProductIdea>, diesel::result::Error> {
        use crate::schema::product_ideas::dsl::*;
        product_ideas
            .order(created_at.desc())
            .load::<ProductIdea>(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        idea_id: uuid::Uuid,
    ) -> Result<Option<ProductIdea>, diesel::result::Error> {
        use crate::schema::product_ideas::dsl::*;
        product_ideas
            .filter(id.eq(idea_id))
            .first::<ProductIdea>(conn)
            .optional()
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_idea: &NewProductIdea,
    ) -> Result<ProductIdea, diesel::result::Error> {
        diesel::insert_into(crate::schema::product_ideas::table)
            .values(new_idea)
            .get_result(conn)
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        idea_id: uuid::Uuid,
        changes: &UpdateProductIdea,
    ) -> Result<ProductIdea, diesel::result::Error> {
        use crate::schema::product_ideas::dsl::*;
        diesel::update(product_ideas.filter(id.eq(idea_id)))
            .set(changes)
            .get_result(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        idea_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::product_ideas::dsl::*;
        diesel::delete(product_ideas.filter(id.eq(idea_id))).execute(conn)
    }

    // Link table operations

    /// Inserts the link unless it already exists. Returns the number of
    /// rows written (0 for an already-linked pair).
    pub fn insert_link(
        conn: &mut PgConnection,
        link: &NewProductIdeaEpicLink,
    ) -> Result<usize, diesel::result::Error> {
        diesel::insert_into(crate::schema::product_idea_epic_links::table)
            .values(link)
            .on_conflict_do_nothing()
            .execute(conn)
    }

    pub fn delete_link(
        conn: &mut PgConnection,
        idea_id: uuid::Uuid,
        target_epic_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::product_idea_epic_links::dsl::*;
        diesel::delete(
            product_idea_epic_links
                .filter(product_idea_id.eq(idea_id))
                .filter(epic_id.eq(target_epic_id)),
        )
        .execute(conn)
    }

    pub fn list_epic_ids_by_idea(
        conn: &mut PgConnection,
        idea_id: uuid::Uuid,
    ) -> Result<Vec<uuid::Uuid>, diesel::result::Error> {
        use crate::schema::product_idea_epic_links::dsl::*;
        product_idea_epic_links
            .filter(product_idea_id.eq(idea_id))
            .select(epic_id)
            .load::<uuid::Uuid>(conn)
    }

    pub fn list_idea_ids_by_epic(
        conn: &mut PgConnection,
        target_epic_id: uuid::Uuid,
    ) -> Result<Vec<uuid::Uuid>, diesel::result::Error> {
        use crate::schema::product_idea_epic_links::dsl::*;
        product_idea_epic_links
            .filter(epic_id.eq(target_epic_id))
            .select(product_idea_id)
            .load::<uuid::Uuid>(conn)
    }

    pub fn list_by_ids(
        conn: &mut PgConnection,
        idea_ids: &[uuid::Uuid],
    ) -> Result<Vec<ProductIdea>, diesel::result::Error> {
        use crate::schema::product_ideas::dsl::*;
        product_ideas
            .filter(id.eq_any(idea_ids))
            .order(created_at.desc())
            .load::<ProductIdea>(conn)
    }

    pub fn delete_links_by_idea(
        conn: &mut PgConnection,
        idea_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::product_idea_epic_links::dsl::*;
        diesel::delete(product_idea_epic_links.filter(product_idea_id.eq(idea_id))).execute(conn)
    }

    pub fn delete_links_by_epic(
        conn: &mut PgConnection,
        target_epic_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::product_idea_epic_links::dsl::*;
        diesel::delete(product_idea_epic_links.filter(epic_id.eq(target_epic_id))).execute(conn)
    }
}
