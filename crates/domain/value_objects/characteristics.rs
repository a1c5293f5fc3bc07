use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::entity_statuses::EntityStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CharacteristicModel {
    pub id: Option<i64>,
    pub name: String,
    pub image_id: Option<i64>,
    pub status: EntityStatus,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpsertCharacteristicModel {
    pub name: Option<String>,
    pub image_id: Option<i64>,
}
