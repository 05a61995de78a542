//! Connection Handlers
//!
//! Registry access for services that learn about a handle out of band.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::{ConnectionStatusResponse, RegisterConnectionRequest};
use crate::domain::{ConnectionHandle, UserId};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

/// Report whether a user is reachable
pub async fn get_connection(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<ConnectionStatusResponse>, AppError> {
    let user_id = UserId::new(user_id)?;
    let handle = state.notifications.registry().connection_for(user_id);

    Ok(Json(ConnectionStatusResponse {
        user_id: user_id.as_i64(),
        connected: handle.is_some(),
        handle: handle.map(|h| h.as_str().to_string()),
    }))
}

/// Register or replace the handle for a user
pub async fn register_connection(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(body): Json<RegisterConnectionRequest>,
) -> Result<StatusCode, AppError> {
    body.validate().map_err(validation_error)?;

    let user_id = UserId::new(user_id)?;
    let handle = ConnectionHandle::new(body.handle)
        .ok_or_else(|| AppError::BadRequest("Handle must not be blank".into()))?;

    state.notifications.register_connection(user_id, handle);

    Ok(StatusCode::NO_CONTENT)
}

/// Drop the handle for a user. Idempotent.
pub async fn unregister_connection(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let user_id = UserId::new(user_id)?;
    state.notifications.unregister_connection(user_id);

    Ok(StatusCode::NO_CONTENT)
}
