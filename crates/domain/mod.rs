pub mod entities;
pub mod mappers;
pub mod repositories;
pub mod value_objects;
