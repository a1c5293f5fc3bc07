use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;

use crate::domain;
use crate::infra::db::postgres::{
    errors::translate_write_error, postgres_connection::PgPoolSquad, schema::categories,
};
use domain::{
    entities::categories::{CategoryEntity, CategoryRow, CategoryChangeset},
    repositories::crud::CrudRepository,
    value_objects::enums::entity_statuses::EntityStatus,
};

pub struct CategoryPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl CategoryPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl CrudRepository for CategoryPostgres {
    type Entity = CategoryEntity;

    async fn find_by_id(&self, id: i64) -> Result<Option<CategoryEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = categories::table
            .find(id)
            .select(CategoryRow::as_select())
            .first::<CategoryRow>(&mut conn)
            .optional()?;

        Ok(row.map(CategoryEntity::from))
    }

    async fn find_by_status(&self, status: EntityStatus) -> Result<Vec<CategoryEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = categories::table
            .filter(categories::status.eq(status.as_i16()))
            .order(categories::id.asc())
            .select(CategoryRow::as_select())
            .load::<CategoryRow>(&mut conn)?;

        Ok(rows.into_iter().map(CategoryEntity::from).collect())
    }

    async fn find_by_id_and_status(
        &self,
        id: i64,
        status: EntityStatus,
    ) -> Result<Option<CategoryEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = categories::table
            .find(id)
            .filter(categories::status.eq(status.as_i16()))
            .select(CategoryRow::as_select())
            .first::<CategoryRow>(&mut conn)
            .optional()?;

        Ok(row.map(CategoryEntity::from))
    }

    async fn find_by_unique_key(&self, key: &str) -> Result<Option<CategoryEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = categories::table
            .filter(categories::name.eq(key))
            .select(CategoryRow::as_select())
            .first::<CategoryRow>(&mut conn)
            .optional()?;

        Ok(row.map(CategoryEntity::from))
    }

    async fn save(&self, entity: CategoryEntity) -> Result<CategoryEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let changeset = CategoryChangeset::from(&entity);

        let row = match entity.id {
            None => insert_into(categories::table)
                .values(&changeset)
                .returning(CategoryRow::as_returning())
                .get_result::<CategoryRow>(&mut conn),
            Some(id) => update(categories::table.find(id))
                .set(&changeset)
                .returning(CategoryRow::as_returning())
                .get_result::<CategoryRow>(&mut conn),
        }
        .map_err(|err| translate_write_error(err, "categories"))?;

        Ok(row.into())
    }
}
