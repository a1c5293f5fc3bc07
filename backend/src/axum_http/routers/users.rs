use std::sync::Arc;

use axum::Router;
use crates::{
    domain::mappers::users::UserMapper,
    infra::db::{postgres::postgres_connection::PgPoolSquad, repositories::users::UserPostgres},
};

use super::crud;
use crate::usecases::crud::CrudUseCase;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let users_repository = UserPostgres::new(Arc::clone(&db_pool));
    let users_usecase = CrudUseCase::<_, UserMapper>::new(Arc::new(users_repository));

    crud::routes(Arc::new(users_usecase))
}
