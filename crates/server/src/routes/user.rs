use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;

use common::types::ApiMessage;
use service::registration::domain::RegisterInput;
use service::registration::service::REGISTRATION_ERROR;
use service::registration::RegistrationService;
use service::validation::validate_user;

use crate::errors::ApiError;

#[derive(Clone)]
pub struct ServerState {
    pub registration: Arc<RegistrationService>,
}

/// POST /api/user — the full registration pipeline: shape and field
/// validation, duplicate-email check, password hashing, persistence.
pub async fn create_user(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> Result<Json<ApiMessage>, ApiError> {
    let verdict = validate_user(&body);
    if !verdict.valid {
        return Err(ApiError::Invalid(verdict.message));
    }

    // The shape was just checked, so deserialization cannot reasonably fail.
    let input: RegisterInput = serde_json::from_value(body)
        .map_err(|_| ApiError::Internal(REGISTRATION_ERROR.into()))?;

    state.registration.register(&input).await?;

    Ok(Json(ApiMessage::new(format!(
        "{} And user has been successfully created.",
        verdict.message
    ))))
}
