use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use crate::{
    domain::{entities::Lifecycle, value_objects::enums::entity_statuses::EntityStatus},
    infra::db::postgres::schema::{tourist_plan_characteristics, tourist_plans},
};

#[derive(Debug, Clone, PartialEq)]
pub struct TouristPlanEntity {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    pub seller: Option<String>,
    pub city_id: i64,
    pub category_id: i64,
    pub availability_start_date: Option<NaiveDate>,
    pub availability_end_date: Option<NaiveDate>,
    pub capacity: Option<i32>,
    pub duration: Option<String>,
    pub food_included: bool,
    pub wifi_included: bool,
    pub pets_friendly: bool,
    pub disability_access: bool,
    /// Ids held in `tourist_plan_characteristics`, kept sorted.
    pub characteristic_ids: Vec<i64>,
    pub status: EntityStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = tourist_plans)]
pub struct TouristPlanRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    pub seller: Option<String>,
    pub city_id: i64,
    pub category_id: i64,
    pub availability_start_date: Option<NaiveDate>,
    pub availability_end_date: Option<NaiveDate>,
    pub capacity: Option<i32>,
    pub duration: Option<String>,
    pub food_included: bool,
    pub wifi_included: bool,
    pub pets_friendly: bool,
    pub disability_access: bool,
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tourist_plans)]
pub struct TouristPlanChangeset {
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    pub seller: Option<String>,
    pub city_id: i64,
    pub category_id: i64,
    pub availability_start_date: Option<NaiveDate>,
    pub availability_end_date: Option<NaiveDate>,
    pub capacity: Option<i32>,
    pub duration: Option<String>,
    pub food_included: bool,
    pub wifi_included: bool,
    pub pets_friendly: bool,
    pub disability_access: bool,
    pub status: i16,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Selectable, Queryable, Insertable)]
#[diesel(table_name = tourist_plan_characteristics)]
pub struct TouristPlanCharacteristicRow {
    pub tourist_plan_id: i64,
    pub characteristic_id: i64,
}

impl TouristPlanEntity {
    pub fn from_row(value: TouristPlanRow, characteristic_ids: Vec<i64>) -> Self {
        Self {
            id: Some(value.id),
            title: value.title,
            description: value.description,
            price: value.price,
            seller: value.seller,
            city_id: value.city_id,
            category_id: value.category_id,
            availability_start_date: value.availability_start_date,
            availability_end_date: value.availability_end_date,
            capacity: value.capacity,
            duration: value.duration,
            food_included: value.food_included,
            wifi_included: value.wifi_included,
            pets_friendly: value.pets_friendly,
            disability_access: value.disability_access,
            characteristic_ids,
            status: EntityStatus::from_i16(value.status),
            created_at: Some(value.created_at),
            updated_at: Some(value.updated_at),
        }
    }
}

impl From<&TouristPlanEntity> for TouristPlanChangeset {
    fn from(value: &TouristPlanEntity) -> Self {
        Self {
            title: value.title.clone(),
            description: value.description.clone(),
            price: value.price,
            seller: value.seller.clone(),
            city_id: value.city_id,
            category_id: value.category_id,
            availability_start_date: value.availability_start_date,
            availability_end_date: value.availability_end_date,
            capacity: value.capacity,
            duration: value.duration.clone(),
            food_included: value.food_included,
            wifi_included: value.wifi_included,
            pets_friendly: value.pets_friendly,
            disability_access: value.disability_access,
            status: value.status.as_i16(),
            updated_at: Utc::now(),
        }
    }
}

impl Lifecycle for TouristPlanEntity {
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
