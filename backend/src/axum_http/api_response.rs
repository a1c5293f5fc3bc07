use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Serialize, Serializer};

/// Envelope shared by every resource endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(serialize_with = "serialize_status")]
    pub status: StatusCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(status: StatusCode, data: T) -> Self {
        Self {
            success: true,
            status,
            data: Some(data),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            status,
            data: None,
            message: Some(message.into()),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

fn serialize_status<S>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_carries_data_and_numeric_status() {
        let body = serde_json::to_value(ApiResponse::success(StatusCode::CREATED, "ok")).unwrap();

        assert_eq!(body, json!({ "success": true, "status": 201, "data": "ok" }));
    }

    #[test]
    fn failure_carries_message_only() {
        let body = serde_json::to_value(ApiResponse::failure(
            StatusCode::NOT_FOUND,
            "No se encontró la ciudad",
        ))
        .unwrap();

        assert_eq!(
            body,
            json!({ "success": false, "status": 404, "message": "No se encontró la ciudad" })
        );
    }
}
