use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::entity_statuses::EntityStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryModel {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub image_id: Option<i64>,
    pub status: EntityStatus,
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of create and update requests. Absent fields are left untouched on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpsertCategoryModel {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_id: Option<i64>,
}
