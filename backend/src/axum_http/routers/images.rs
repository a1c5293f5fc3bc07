use std::sync::Arc;

use axum::Router;
use crates::{
    domain::mappers::images::ImageMapper,
    infra::db::{postgres::postgres_connection::PgPoolSquad, repositories::images::ImagePostgres},
};

use super::crud;
use crate::usecases::crud::CrudUseCase;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let images_repository = ImagePostgres::new(Arc::clone(&db_pool));
    let images_usecase = CrudUseCase::<_, ImageMapper>::new(Arc::new(images_repository));

    crud::routes(Arc::new(images_usecase))
}
