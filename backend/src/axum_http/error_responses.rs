use axum::response::{IntoResponse, Response};

use super::api_response::ApiResponse;
use crate::usecases::crud::CrudError;

impl IntoResponse for CrudError {
    fn into_response(self) -> Response {
        // Internal renders its public message; the source was logged where it was raised.
        ApiResponse::failure(self.status_code(), self.to_string()).into_response()
    }
}
