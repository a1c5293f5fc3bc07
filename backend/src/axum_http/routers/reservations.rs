use std::sync::Arc;

use axum::Router;
use crates::{
    domain::mappers::reservations::ReservationMapper,
    infra::db::{postgres::postgres_connection::PgPoolSquad, repositories::reservations::ReservationPostgres},
};

use super::crud;
use crate::usecases::crud::CrudUseCase;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let reservations_repository = ReservationPostgres::new(Arc::clone(&db_pool));
    let reservations_usecase = CrudUseCase::<_, ReservationMapper>::new(Arc::new(reservations_repository));

    crud::routes(Arc::new(reservations_usecase))
}
