use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post, put},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info};

use crate::{
    axum_http::api_response::ApiResponse,
    usecases::crud::{CrudResult, CrudService},
};

/// Mounts the six lifecycle endpoints for one resource.
pub fn routes<S>(service: Arc<S>) -> Router
where
    S: CrudService<Id = i64> + 'static,
    S::Request: DeserializeOwned,
    S::Response: Serialize,
{
    Router::new()
        .route("/create", post(create::<S>))
        .route("/all", get(get_all::<S>))
        .route("/:id", get(read::<S>))
        .route("/update/:id", put(update::<S>))
        .route("/delete/:id", delete(soft_delete::<S>))
        .route("/toggle-status/:id", patch(toggle_status::<S>))
        .with_state(service)
}

pub async fn get_all<S>(State(service): State<Arc<S>>) -> Response
where
    S: CrudService<Id = i64> + 'static,
    S::Response: Serialize,
{
    let labels = service.labels();
    debug!(resource = labels.resource, "crud router: get_all invoked");

    match service.get_all().await {
        Ok(items) if items.is_empty() => ApiResponse::failure(
            StatusCode::NO_CONTENT,
            format!("No se encontraron {}", labels.plural),
        )
        .into_response(),
        Ok(items) => ApiResponse::success(StatusCode::OK, items).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn read<S>(
    State(service): State<Arc<S>>,
    path: Result<Path<i64>, PathRejection>,
) -> Response
where
    S: CrudService<Id = i64> + 'static,
    S::Response: Serialize,
{
    let id = match path {
        Ok(Path(id)) => id,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    debug!(resource = service.labels().resource, id, "crud router: read invoked");

    respond(StatusCode::OK, service.read(id).await)
}

pub async fn create<S>(
    State(service): State<Arc<S>>,
    payload: Result<Json<S::Request>, JsonRejection>,
) -> Response
where
    S: CrudService<Id = i64> + 'static,
    S::Request: DeserializeOwned,
    S::Response: Serialize,
{
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    info!(resource = service.labels().resource, "crud router: create invoked");

    respond(StatusCode::CREATED, service.create(input).await)
}

pub async fn update<S>(
    State(service): State<Arc<S>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<S::Request>, JsonRejection>,
) -> Response
where
    S: CrudService<Id = i64> + 'static,
    S::Request: DeserializeOwned,
    S::Response: Serialize,
{
    let id = match path {
        Ok(Path(id)) => id,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    info!(resource = service.labels().resource, id, "crud router: update invoked");

    respond(StatusCode::OK, service.update(input, id).await)
}

pub async fn soft_delete<S>(
    State(service): State<Arc<S>>,
    path: Result<Path<i64>, PathRejection>,
) -> Response
where
    S: CrudService<Id = i64> + 'static,
    S::Response: Serialize,
{
    let id = match path {
        Ok(Path(id)) => id,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    info!(resource = service.labels().resource, id, "crud router: delete invoked");

    respond(StatusCode::OK, service.delete(id).await)
}

pub async fn toggle_status<S>(
    State(service): State<Arc<S>>,
    path: Result<Path<i64>, PathRejection>,
) -> Response
where
    S: CrudService<Id = i64> + 'static,
    S::Response: Serialize,
{
    let id = match path {
        Ok(Path(id)) => id,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    info!(resource = service.labels().resource, id, "crud router: toggle_status invoked");

    respond(StatusCode::OK, service.toggle_status(id).await)
}

fn respond<T: Serialize>(status: StatusCode, result: CrudResult<T>) -> Response {
    match result {
        Ok(data) => ApiResponse::success(status, data).into_response(),
        Err(err) => err.into_response(),
    }
}

fn bad_request(message: String) -> Response {
    ApiResponse::failure(StatusCode::BAD_REQUEST, message).into_response()
}
