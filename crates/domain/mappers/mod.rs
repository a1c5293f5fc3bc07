pub mod categories;
pub mod characteristics;
pub mod cities;
pub mod images;
pub mod reservations;
pub mod tourist_plans;
pub mod users;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::domain::entities::Lifecycle;

/// Localized names used when building user-facing messages for a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLabels {
    /// Short identifier used in logs, e.g. `categories`.
    pub resource: &'static str,
    /// Singular with article, e.g. `la categoría`.
    pub singular: &'static str,
    /// Bare plural, e.g. `categorías`.
    pub plural: &'static str,
}

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Natural key carried by a request, checked for duplicates before writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueKey {
    pub field: &'static str,
    pub value: String,
}

/// Transforms between the stored entity and its transport models.
///
/// `partial_update` copies only the fields present on the request. Identity,
/// status and timestamps belong to the lifecycle and are never touched here.
pub trait EntityMapper: Send + Sync + 'static {
    type Entity: Lifecycle + Clone + Send + Sync + 'static;
    type Request: DeserializeOwned + Send + Sync + 'static;
    type Response: Serialize + Send + Sync + 'static;

    fn labels() -> &'static ResourceLabels;

    fn to_entity(request: Self::Request) -> Result<Self::Entity, MappingError>;

    fn to_response(entity: &Self::Entity) -> Self::Response;

    fn partial_update(
        request: Self::Request,
        entity: &mut Self::Entity,
    ) -> Result<(), MappingError>;

    fn unique_key(_request: &Self::Request) -> Option<UniqueKey> {
        None
    }
}

pub(crate) fn required<T>(value: Option<T>, message: &str) -> Result<T, MappingError> {
    value.ok_or_else(|| MappingError::Invalid(message.to_string()))
}

/// Trims the value and rejects it when nothing is left.
pub(crate) fn non_blank(value: String, message: &str) -> Result<String, MappingError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MappingError::Invalid(message.to_string()));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn required_text(value: Option<String>, message: &str) -> Result<String, MappingError> {
    non_blank(required(value, message)?, message)
}

pub(crate) fn trimmed_key(field: &'static str, value: Option<&String>) -> Option<UniqueKey> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    Some(UniqueKey {
        field,
        value: value.to_string(),
    })
}
