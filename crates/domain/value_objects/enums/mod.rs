pub mod entity_statuses;
pub mod user_roles;
