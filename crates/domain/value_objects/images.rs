use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::entity_statuses::EntityStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageModel {
    pub id: Option<i64>,
    pub url: String,
    pub tourist_plan_id: Option<i64>,
    pub status: EntityStatus,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpsertImageModel {
    pub url: Option<String>,
    pub tourist_plan_id: Option<i64>,
}
