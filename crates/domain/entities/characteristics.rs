use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::{
    domain::{entities::Lifecycle, value_objects::enums::entity_statuses::EntityStatus},
    infra::db::postgres::schema::characteristics,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CharacteristicEntity {
    pub id: Option<i64>,
    pub name: String,
    pub image_id: Option<i64>,
    pub status: EntityStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = characteristics)]
pub struct CharacteristicRow {
    pub id: i64,
    pub name: String,
    pub image_id: Option<i64>,
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = characteristics)]
pub struct CharacteristicChangeset {
    pub name: String,
    pub image_id: Option<i64>,
    pub status: i16,
    pub updated_at: DateTime<Utc>,
}

impl From<CharacteristicRow> for CharacteristicEntity {
    fn from(value: CharacteristicRow) -> Self {
        Self {
            id: Some(value.id),
            name: value.name,
            image_id: value.image_id,
            status: EntityStatus::from_i16(value.status),
            created_at: Some(value.created_at),
            updated_at: Some(value.updated_at),
        }
    }
}

impl From<&CharacteristicEntity> for CharacteristicChangeset {
    fn from(value: &CharacteristicEntity) -> Self {
        Self {
            name: value.name.clone(),
            image_id: value.image_id,
            status: value.status.as_i16(),
            updated_at: Utc::now(),
        }
    }
}

impl Lifecycle for CharacteristicEntity {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn status(&self) -> EntityStatus {
        self.status
    }

    fn set_status(&mut self, status: EntityStatus) {
        self.status = status;
    }
}
