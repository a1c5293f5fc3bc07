use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::{entity_statuses::EntityStatus, user_roles::UserRole};

/// Public view of a user. The password hash never leaves the store layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserModel {
    pub id: Option<i64>,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub status: EntityStatus,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpsertUserModel {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
}
