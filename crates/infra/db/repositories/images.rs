use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;

use crate::domain;
use crate::infra::db::postgres::{
    errors::translate_write_error, postgres_connection::PgPoolSquad, schema::images,
};
use domain::{
    entities::images::{ImageEntity, ImageRow, ImageChangeset},
    repositories::crud::CrudRepository,
    value_objects::enums::entity_statuses::EntityStatus,
};

pub struct ImagePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ImagePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl CrudRepository for ImagePostgres {
    type Entity = ImageEntity;

    async fn find_by_id(&self, id: i64) -> Result<Option<ImageEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = images::table
            .find(id)
            .select(ImageRow::as_select())
            .first::<ImageRow>(&mut conn)
            .optional()?;

        Ok(row.map(ImageEntity::from))
    }

    async fn find_by_status(&self, status: EntityStatus) -> Result<Vec<ImageEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = images::table
            .filter(images::status.eq(status.as_i16()))
            .order(images::id.asc())
            .select(ImageRow::as_select())
            .load::<ImageRow>(&mut conn)?;

        Ok(rows.into_iter().map(ImageEntity::from).collect())
    }

    async fn find_by_id_and_status(
        &self,
        id: i64,
        status: EntityStatus,
    ) -> Result<Option<ImageEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = images::table
            .find(id)
            .filter(images::status.eq(status.as_i16()))
            .select(ImageRow::as_select())
            .first::<ImageRow>(&mut conn)
            .optional()?;

        Ok(row.map(ImageEntity::from))
    }

    async fn save(&self, entity: ImageEntity) -> Result<ImageEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let changeset = ImageChangeset::from(&entity);

        let row = match entity.id {
            None => insert_into(images::table)
                .values(&changeset)
                .returning(ImageRow::as_returning())
                .get_result::<ImageRow>(&mut conn),
            Some(id) => update(images::table.find(id))
                .set(&changeset)
                .returning(ImageRow::as_returning())
                .get_result::<ImageRow>(&mut conn),
        }
        .map_err(|err| translate_write_error(err, "images"))?;

        Ok(row.into())
    }
}
