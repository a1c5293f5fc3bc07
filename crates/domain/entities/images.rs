use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::{
    domain::{entities::Lifecycle, value_objects::enums::entity_statuses::EntityStatus},
    infra::db::postgres::schema::images,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ImageEntity {
    pub id: Option<i64>,
    pub url: String,
    pub tourist_plan_id: Option<i64>,
    pub status: EntityStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = images)]
pub struct ImageRow {
    pub id: i64,
    pub url: String,
    pub tourist_plan_id: Option<i64>,
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = images)]
pub struct ImageChangeset {
    pub url: String,
    pub tourist_plan_id: Option<i64>,
    pub status: i16,
    pub updated_at: DateTime<Utc>,
}

impl From<ImageRow> for ImageEntity {
    fn from(value: ImageRow) -> Self {
        Self {
            id: Some(value.id),
            url: value.url,
            tourist_plan_id: value.tourist_plan_id,
            status: EntityStatus::from_i16(value.status),
            created_at: Some(value.created_at),
            updated_at: Some(value.updated_at),
        }
    }
}

impl From<&ImageEntity> for ImageChangeset {
    fn from(value: &ImageEntity) -> Self {
        Self {
            url: value.url.clone(),
            tourist_plan_id: value.tourist_plan_id,
            status: value.status.as_i16(),
            updated_at: Utc::now(),
        }
    }
}

impl Lifecycle for ImageEntity {
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
