use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{
    entities::Lifecycle, value_objects::enums::entity_statuses::EntityStatus,
};

/// Store contract every resource repository satisfies.
///
/// Each call is atomic on its own. `save` inserts when the entity has no id
/// and updates the row with that id otherwise, returning what was stored.
/// Unique and foreign-key violations surface as
/// [`UniqueViolation`](crate::domain::value_objects::store_errors::UniqueViolation) and
/// [`ForeignKeyViolation`](crate::domain::value_objects::store_errors::ForeignKeyViolation)
/// inside the returned `anyhow::Error`.
#[async_trait]
pub trait CrudRepository: Send + Sync {
    type Entity: Lifecycle + Clone + Send + Sync + 'static;

    async fn find_by_id(&self, id: i64) -> Result<Option<Self::Entity>>;

    /// Rows with the given status in insertion order.
    async fn find_by_status(&self, status: EntityStatus) -> Result<Vec<Self::Entity>>;

    async fn find_by_id_and_status(
        &self,
        id: i64,
        status: EntityStatus,
    ) -> Result<Option<Self::Entity>>;

    /// Lookup by the resource's natural key (name, title, email).
    /// Resources without one keep the default.
    async fn find_by_unique_key(&self, _key: &str) -> Result<Option<Self::Entity>> {
        Ok(None)
    }

    async fn save(&self, entity: Self::Entity) -> Result<Self::Entity>;
}
