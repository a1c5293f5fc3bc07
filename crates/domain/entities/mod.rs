pub mod categories;
pub mod characteristics;
pub mod cities;
pub mod images;
pub mod reservations;
pub mod tourist_plans;
pub mod users;

use crate::domain::value_objects::enums::entity_statuses::EntityStatus;

/// Identity and status accessors the generic CRUD flow works through.
///
/// `id` is `None` until the store has assigned one.
pub trait Lifecycle {
    fn id(&self) -> Option<i64>;
    fn status(&self) -> EntityStatus;
    fn set_status(&mut self, status: EntityStatus);
}
