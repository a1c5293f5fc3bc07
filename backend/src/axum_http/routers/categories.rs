use std::sync::Arc;

use axum::Router;
use crates::{
    domain::mappers::categories::CategoryMapper,
    infra::db::{postgres::postgres_connection::PgPoolSquad, repositories::categories::CategoryPostgres},
};

use super::crud;
use crate::usecases::crud::CrudUseCase;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let categories_repository = CategoryPostgres::new(Arc::clone(&db_pool));
    let categories_usecase = CrudUseCase::<_, CategoryMapper>::new(Arc::new(categories_repository));

    crud::routes(Arc::new(categories_usecase))
}
