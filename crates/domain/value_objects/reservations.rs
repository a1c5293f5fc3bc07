use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::entity_statuses::EntityStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationModel {
    pub id: Option<i64>,
    pub tourist_plan_id: i64,
    pub user_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub people_count: i32,
    pub status: EntityStatus,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpsertReservationModel {
    pub tourist_plan_id: Option<i64>,
    pub user_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub people_count: Option<i32>,
}
