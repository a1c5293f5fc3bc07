use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::entity_statuses::EntityStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TouristPlanModel {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    pub seller: Option<String>,
    pub city_id: i64,
    pub category_id: i64,
    pub characteristic_ids: Vec<i64>,
    pub availability_start_date: Option<NaiveDate>,
    pub availability_end_date: Option<NaiveDate>,
    pub capacity: Option<i32>,
    pub duration: Option<String>,
    pub food_included: bool,
    pub wifi_included: bool,
    pub pets_friendly: bool,
    pub disability_access: bool,
    pub status: EntityStatus,
    pub created_at: Option<DateTime<Utc>>,
}

/// `characteristic_ids`, when present, replaces the whole set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpsertTouristPlanModel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub seller: Option<String>,
    pub city_id: Option<i64>,
    pub category_id: Option<i64>,
    pub characteristic_ids: Option<Vec<i64>>,
    pub availability_start_date: Option<NaiveDate>,
    pub availability_end_date: Option<NaiveDate>,
    pub capacity: Option<i32>,
    pub duration: Option<String>,
    pub food_included: Option<bool>,
    pub wifi_included: Option<bool>,
    pub pets_friendly: Option<bool>,
    pub disability_access: Option<bool>,
}
