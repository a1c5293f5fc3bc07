use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::{
    domain::{
        entities::Lifecycle,
        value_objects::enums::{entity_statuses::EntityStatus, user_roles::UserRole},
    },
    infra::db::postgres::schema::users,
};

#[derive(Debug, Clone, PartialEq)]
pub struct UserEntity {
    pub id: Option<i64>,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub status: EntityStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = users)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserChangeset {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub status: i16,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRow> for UserEntity {
    fn from(value: UserRow) -> Self {
        Self {
            id: Some(value.id),
            name: value.name,
            last_name: value.last_name,
            email: value.email,
            password_hash: value.password_hash,
            role: UserRole::from_str(&value.role),
            status: EntityStatus::from_i16(value.status),
            created_at: Some(value.created_at),
            updated_at: Some(value.updated_at),
        }
    }
}

impl From<&UserEntity> for UserChangeset {
    fn from(value: &UserEntity) -> Self {
        Self {
            name: value.name.clone(),
            last_name: value.last_name.clone(),
            email: value.email.clone(),
            password_hash: value.password_hash.clone(),
            role: value.role.to_string(),
            status: value.status.as_i16(),
            updated_at: Utc::now(),
        }
    }
}

impl Lifecycle for UserEntity {
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
