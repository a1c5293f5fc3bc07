use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;

use crate::domain;
use crate::infra::db::postgres::{
    errors::translate_write_error, postgres_connection::PgPoolSquad, schema::cities,
};
use domain::{
    entities::cities::{CityEntity, CityRow, CityChangeset},
    repositories::crud::CrudRepository,
    value_objects::enums::entity_statuses::EntityStatus,
};

pub struct CityPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl CityPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl CrudRepository for CityPostgres {
    type Entity = CityEntity;

    async fn find_by_id(&self, id: i64) -> Result<Option<CityEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = cities::table
            .find(id)
            .select(CityRow::as_select())
            .first::<CityRow>(&mut conn)
            .optional()?;

        Ok(row.map(CityEntity::from))
    }

    async fn find_by_status(&self, status: EntityStatus) -> Result<Vec<CityEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = cities::table
            .filter(cities::status.eq(status.as_i16()))
            .order(cities::id.asc())
            .select(CityRow::as_select())
            .load::<CityRow>(&mut conn)?;

        Ok(rows.into_iter().map(CityEntity::from).collect())
    }

    async fn find_by_id_and_status(
        &self,
        id: i64,
        status: EntityStatus,
    ) -> Result<Option<CityEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = cities::table
            .find(id)
            .filter(cities::status.eq(status.as_i16()))
            .select(CityRow::as_select())
            .first::<CityRow>(&mut conn)
            .optional()?;

        Ok(row.map(CityEntity::from))
    }

    async fn find_by_unique_key(&self, key: &str) -> Result<Option<CityEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = cities::table
            .filter(cities::name.eq(key))
            .select(CityRow::as_select())
            .first::<CityRow>(&mut conn)
            .optional()?;

        Ok(row.map(CityEntity::from))
    }

    async fn save(&self, entity: CityEntity) -> Result<CityEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let changeset = CityChangeset::from(&entity);

        let row = match entity.id {
            None => insert_into(cities::table)
                .values(&changeset)
                .returning(CityRow::as_returning())
                .get_result::<CityRow>(&mut conn),
            Some(id) => update(cities::table.find(id))
                .set(&changeset)
                .returning(CityRow::as_returning())
                .get_result::<CityRow>(&mut conn),
        }
        .map_err(|err| translate_write_error(err, "cities"))?;

        Ok(row.into())
    }
}
