use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;

use crate::domain;
use crate::infra::db::postgres::{
    errors::translate_write_error, postgres_connection::PgPoolSquad, schema::characteristics,
};
use domain::{
    entities::characteristics::{CharacteristicEntity, CharacteristicRow, CharacteristicChangeset},
    repositories::crud::CrudRepository,
    value_objects::enums::entity_statuses::EntityStatus,
};

pub struct CharacteristicPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl CharacteristicPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl CrudRepository for CharacteristicPostgres {
    type Entity = CharacteristicEntity;

    async fn find_by_id(&self, id: i64) -> Result<Option<CharacteristicEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = characteristics::table
            .find(id)
            .select(CharacteristicRow::as_select())
            .first::<CharacteristicRow>(&mut conn)
            .optional()?;

        Ok(row.map(CharacteristicEntity::from))
    }

    async fn find_by_status(&self, status: EntityStatus) -> Result<Vec<CharacteristicEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = characteristics::table
            .filter(characteristics::status.eq(status.as_i16()))
            .order(characteristics::id.asc())
            .select(CharacteristicRow::as_select())
            .load::<CharacteristicRow>(&mut conn)?;

        Ok(rows.into_iter().map(CharacteristicEntity::from).collect())
    }

    async fn find_by_id_and_status(
        &self,
        id: i64,
        status: EntityStatus,
    ) -> Result<Option<CharacteristicEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = characteristics::table
            .find(id)
            .filter(characteristics::status.eq(status.as_i16()))
            .select(CharacteristicRow::as_select())
            .first::<CharacteristicRow>(&mut conn)
            .optional()?;

        Ok(row.map(CharacteristicEntity::from))
    }

    async fn find_by_unique_key(&self, key: &str) -> Result<Option<CharacteristicEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = characteristics::table
            .filter(characteristics::name.eq(key))
            .select(CharacteristicRow::as_select())
            .first::<CharacteristicRow>(&mut conn)
            .optional()?;

        Ok(row.map(CharacteristicEntity::from))
    }

    async fn save(&self, entity: CharacteristicEntity) -> Result<CharacteristicEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let changeset = CharacteristicChangeset::from(&entity);

        let row = match entity.id {
            None => insert_into(characteristics::table)
                .values(&changeset)
                .returning(CharacteristicRow::as_returning())
                .get_result::<CharacteristicRow>(&mut conn),
            Some(id) => update(characteristics::table.find(id))
                .set(&changeset)
                .returning(CharacteristicRow::as_returning())
                .get_result::<CharacteristicRow>(&mut conn),
        }
        .map_err(|err| translate_write_error(err, "characteristics"))?;

        Ok(row.into())
    }
}
