pub mod categories;
pub mod characteristics;
pub mod cities;
pub mod images;
pub mod reservations;
pub mod tourist_plans;
pub mod users;
