use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use crate::{
    domain::{entities::Lifecycle, value_objects::enums::entity_statuses::EntityStatus},
    infra::db::postgres::schema::reservations,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ReservationEntity {
    pub id: Option<i64>,
    pub tourist_plan_id: i64,
    pub user_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub people_count: i32,
    pub status: EntityStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = reservations)]
pub struct ReservationRow {
    pub id: i64,
    pub tourist_plan_id: i64,
    pub user_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub people_count: i32,
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = reservations)]
pub struct ReservationChangeset {
    pub tourist_plan_id: i64,
    pub user_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub people_count: i32,
    pub status: i16,
    pub updated_at: DateTime<Utc>,
}

impl From<ReservationRow> for ReservationEntity {
    fn from(value: ReservationRow) -> Self {
        Self {
            id: Some(value.id),
            tourist_plan_id: value.tourist_plan_id,
            user_id: value.user_id,
            start_date: value.start_date,
            end_date: value.end_date,
            people_count: value.people_count,
            status: EntityStatus::from_i16(value.status),
            created_at: Some(value.created_at),
            updated_at: Some(value.updated_at),
        }
    }
}

impl From<&ReservationEntity> for ReservationChangeset {
    fn from(value: &ReservationEntity) -> Self {
        Self {
            tourist_plan_id: value.tourist_plan_id,
            user_id: value.user_id,
            start_date: value.start_date,
            end_date: value.end_date,
            people_count: value.people_count,
            status: value.status.as_i16(),
            updated_at: Utc::now(),
        }
    }
}

impl Lifecycle for ReservationEntity {
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
