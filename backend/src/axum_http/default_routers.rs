use axum::{http::StatusCode, response::IntoResponse};
use tracing::info;

use super::api_response::ApiResponse;

pub async fn not_found() -> impl IntoResponse {
    info!("backend router: not_found handler invoked");
    ApiResponse::failure(StatusCode::NOT_FOUND, "Recurso no encontrado")
}

pub async fn health_check() -> impl IntoResponse {
    info!("backend router: health_check handler invoked");
    (StatusCode::OK, "OK").into_response()
}
