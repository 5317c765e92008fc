use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use service::registration::errors::RegistrationError;

/// HTTP-facing error carrying only a caller-safe message.
///
/// Expected negative outcomes map to 400, infrastructure failures to 500;
/// no raw error detail ever crosses this boundary.
#[derive(Debug)]
pub enum ApiError {
    Invalid(String),
    Internal(String),
}

impl From<RegistrationError> for ApiError {
    fn from(e: RegistrationError) -> Self {
        match e {
            RegistrationError::Rejected(message) => ApiError::Invalid(message),
            RegistrationError::Internal(message) => ApiError::Internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Invalid(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}
