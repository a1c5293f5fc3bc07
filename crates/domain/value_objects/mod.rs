pub mod categories;
pub mod characteristics;
pub mod cities;
pub mod enums;
pub mod iam;
pub mod images;
pub mod reservations;
pub mod store_errors;
pub mod tourist_plans;
pub mod users;
