use std::sync::Mutex;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use crates::domain::{
    entities::{
        Lifecycle, categories::CategoryEntity, tourist_plans::TouristPlanEntity, users::UserEntity,
    },
    repositories::crud::CrudRepository,
    value_objects::{enums::entity_statuses::EntityStatus, store_errors::UniqueViolation},
};

/// Vec-backed store that mimics the unique constraint and id sequence of a table.
pub(crate) struct InMemoryStore<E> {
    rows: Mutex<Vec<E>>,
    unique_field: &'static str,
    unique_value: fn(&E) -> String,
    assign_identity: fn(&mut E, i64),
}

impl<E> InMemoryStore<E> {
    pub(crate) fn new(
        unique_field: &'static str,
        unique_value: fn(&E) -> String,
        assign_identity: fn(&mut E, i64),
    ) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            unique_field,
            unique_value,
            assign_identity,
        }
    }
}

pub(crate) fn categories() -> InMemoryStore<CategoryEntity> {
    InMemoryStore::new(
        "name",
        |entity| entity.name.clone(),
        |entity, id| {
            entity.id = Some(id);
            entity.created_at = Some(Utc::now());
        },
    )
}

pub(crate) fn tourist_plans() -> InMemoryStore<TouristPlanEntity> {
    InMemoryStore::new(
        "title",
        |entity| entity.title.clone(),
        |entity, id| {
            entity.id = Some(id);
            entity.created_at = Some(Utc::now());
        },
    )
}

pub(crate) fn users() -> InMemoryStore<UserEntity> {
    InMemoryStore::new(
        "email",
        |entity| entity.email.clone(),
        |entity, id| {
            entity.id = Some(id);
            entity.created_at = Some(Utc::now());
        },
    )
}

#[async_trait]
impl<E> CrudRepository for InMemoryStore<E>
where
    E: Lifecycle + Clone + Send + Sync + 'static,
{
    type Entity = E;

    async fn find_by_id(&self, id: i64) -> Result<Option<E>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|row| row.id() == Some(id)).cloned())
    }

    async fn find_by_status(&self, status: EntityStatus) -> Result<Vec<E>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|row| row.status() == status).cloned().collect())
    }

    async fn find_by_id_and_status(&self, id: i64, status: EntityStatus) -> Result<Option<E>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|row| row.id() == Some(id) && row.status() == status)
            .cloned())
    }

    async fn find_by_unique_key(&self, key: &str) -> Result<Option<E>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|row| (self.unique_value)(row) == key)
            .cloned())
    }

    async fn save(&self, mut entity: E) -> Result<E> {
        let mut rows = self.rows.lock().unwrap();

        let value = (self.unique_value)(&entity);
        if rows
            .iter()
            .any(|row| row.id() != entity.id() && (self.unique_value)(row) == value)
        {
            return Err(UniqueViolation {
                constraint: None,
                field: Some(self.unique_field.to_string()),
            }
            .into());
        }

        match entity.id() {
            None => {
                let id = rows.len() as i64 + 1;
                (self.assign_identity)(&mut entity, id);
                rows.push(entity.clone());
            }
            Some(id) => {
                let row = rows
                    .iter_mut()
                    .find(|row| row.id() == Some(id))
                    .ok_or_else(|| anyhow!("no row with id {}", id))?;
                *row = entity.clone();
            }
        }

        Ok(entity)
    }
}
