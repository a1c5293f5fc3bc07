use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;

use crate::domain;
use crate::infra::db::postgres::{
    errors::translate_write_error, postgres_connection::PgPoolSquad, schema::users,
};
use domain::{
    entities::users::{UserEntity, UserRow, UserChangeset},
    repositories::crud::CrudRepository,
    value_objects::enums::entity_statuses::EntityStatus,
};

pub struct UserPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl UserPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl CrudRepository for UserPostgres {
    type Entity = UserEntity;

    async fn find_by_id(&self, id: i64) -> Result<Option<UserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = users::table
            .find(id)
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .optional()?;

        Ok(row.map(UserEntity::from))
    }

    async fn find_by_status(&self, status: EntityStatus) -> Result<Vec<UserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = users::table
            .filter(users::status.eq(status.as_i16()))
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load::<UserRow>(&mut conn)?;

        Ok(rows.into_iter().map(UserEntity::from).collect())
    }

    async fn find_by_id_and_status(
        &self,
        id: i64,
        status: EntityStatus,
    ) -> Result<Option<UserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = users::table
            .find(id)
            .filter(users::status.eq(status.as_i16()))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .optional()?;

        Ok(row.map(UserEntity::from))
    }

    async fn find_by_unique_key(&self, key: &str) -> Result<Option<UserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = users::table
            .filter(users::email.eq(key))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .optional()?;

        Ok(row.map(UserEntity::from))
    }

    async fn save(&self, entity: UserEntity) -> Result<UserEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let changeset = UserChangeset::from(&entity);

        let row = match entity.id {
            None => insert_into(users::table)
                .values(&changeset)
                .returning(UserRow::as_returning())
                .get_result::<UserRow>(&mut conn),
            Some(id) => update(users::table.find(id))
                .set(&changeset)
                .returning(UserRow::as_returning())
                .get_result::<UserRow>(&mut conn),
        }
        .map_err(|err| translate_write_error(err, "users"))?;

        Ok(row.into())
    }
}
