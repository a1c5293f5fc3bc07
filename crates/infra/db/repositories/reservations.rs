use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;

use crate::domain;
use crate::infra::db::postgres::{
    errors::translate_write_error, postgres_connection::PgPoolSquad, schema::reservations,
};
use domain::{
    entities::reservations::{ReservationEntity, ReservationRow, ReservationChangeset},
    repositories::crud::CrudRepository,
    value_objects::enums::entity_statuses::EntityStatus,
};

pub struct ReservationPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ReservationPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl CrudRepository for ReservationPostgres {
    type Entity = ReservationEntity;

    async fn find_by_id(&self, id: i64) -> Result<Option<ReservationEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = reservations::table
            .find(id)
            .select(ReservationRow::as_select())
            .first::<ReservationRow>(&mut conn)
            .optional()?;

        Ok(row.map(ReservationEntity::from))
    }

    async fn find_by_status(&self, status: EntityStatus) -> Result<Vec<ReservationEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = reservations::table
            .filter(reservations::status.eq(status.as_i16()))
            .order(reservations::id.asc())
            .select(ReservationRow::as_select())
            .load::<ReservationRow>(&mut conn)?;

        Ok(rows.into_iter().map(ReservationEntity::from).collect())
    }

    async fn find_by_id_and_status(
        &self,
        id: i64,
        status: EntityStatus,
    ) -> Result<Option<ReservationEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = reservations::table
            .find(id)
            .filter(reservations::status.eq(status.as_i16()))
            .select(ReservationRow::as_select())
            .first::<ReservationRow>(&mut conn)
            .optional()?;

        Ok(row.map(ReservationEntity::from))
    }

    async fn save(&self, entity: ReservationEntity) -> Result<ReservationEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let changeset = ReservationChangeset::from(&entity);

        let row = match entity.id {
            None => insert_into(reservations::table)
                .values(&changeset)
                .returning(ReservationRow::as_returning())
                .get_result::<ReservationRow>(&mut conn),
            Some(id) => update(reservations::table.find(id))
                .set(&changeset)
                .returning(ReservationRow::as_returning())
                .get_result::<ReservationRow>(&mut conn),
        }
        .map_err(|err| translate_write_error(err, "reservations"))?;

        Ok(row.into())
    }
}
