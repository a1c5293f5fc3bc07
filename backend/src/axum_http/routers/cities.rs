use std::sync::Arc;

use axum::Router;
use crates::{
    domain::mappers::cities::CityMapper,
    infra::db::{postgres::postgres_connection::PgPoolSquad, repositories::cities::CityPostgres},
};

use super::crud;
use crate::usecases::crud::CrudUseCase;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let cities_repository = CityPostgres::new(Arc::clone(&db_pool));
    let cities_usecase = CrudUseCase::<_, CityMapper>::new(Arc::new(cities_repository));

    crud::routes(Arc::new(cities_usecase))
}
