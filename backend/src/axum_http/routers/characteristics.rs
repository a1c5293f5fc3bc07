use std::sync::Arc;

use axum::Router;
use crates::{
    domain::mappers::characteristics::CharacteristicMapper,
    infra::db::{postgres::postgres_connection::PgPoolSquad, repositories::characteristics::CharacteristicPostgres},
};

use super::crud;
use crate::usecases::crud::CrudUseCase;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let characteristics_repository = CharacteristicPostgres::new(Arc::clone(&db_pool));
    let characteristics_usecase = CrudUseCase::<_, CharacteristicMapper>::new(Arc::new(characteristics_repository));

    crud::routes(Arc::new(characteristics_usecase))
}
