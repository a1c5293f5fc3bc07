use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::{
    domain::{entities::Lifecycle, value_objects::enums::entity_statuses::EntityStatus},
    infra::db::postgres::schema::cities,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CityEntity {
    pub id: Option<i64>,
    pub name: String,
    pub country: Option<String>,
    pub status: EntityStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = cities)]
pub struct CityRow {
    pub id: i64,
    pub name: String,
    pub country: Option<String>,
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = cities)]
pub struct CityChangeset {
    pub name: String,
    pub country: Option<String>,
    pub status: i16,
    pub updated_at: DateTime<Utc>,
}

impl From<CityRow> for CityEntity {
    fn from(value: CityRow) -> Self {
        Self {
            id: Some(value.id),
            name: value.name,
            country: value.country,
            status: EntityStatus::from_i16(value.status),
            created_at: Some(value.created_at),
            updated_at: Some(value.updated_at),
        }
    }
}

impl From<&CityEntity> for CityChangeset {
    fn from(value: &CityEntity) -> Self {
        Self {
            name: value.name.clone(),
            country: value.country.clone(),
            status: value.status.as_i16(),
            updated_at: Utc::now(),
        }
    }
}

impl Lifecycle for CityEntity {
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
