use std::sync::Arc;

use axum::Router;
use crates::{
    domain::mappers::tourist_plans::TouristPlanMapper,
    infra::db::{postgres::postgres_connection::PgPoolSquad, repositories::tourist_plans::TouristPlanPostgres},
};

use super::crud;
use crate::usecases::crud::CrudUseCase;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let tourist_plans_repository = TouristPlanPostgres::new(Arc::clone(&db_pool));
    let tourist_plans_usecase = CrudUseCase::<_, TouristPlanMapper>::new(Arc::new(tourist_plans_repository));

    crud::routes(Arc::new(tourist_plans_usecase))
}
