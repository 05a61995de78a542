//! Notification Handlers
//!
//! Internal endpoint used by the social CRUD services after they persist a
//! comment, like, message or follow.

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::application::dto::{NotificationDispatchResponse, SendNotificationRequest};
use crate::domain::{NotificationPayload, UserId};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

/// Push a notification to one user
///
/// Always 202 once the request is valid: an offline recipient is a normal
/// outcome, not an error.
pub async fn send_notification(
    State(state): State<AppState>,
    Json(body): Json<SendNotificationRequest>,
) -> Result<(StatusCode, Json<NotificationDispatchResponse>), AppError> {
    body.validate().map_err(validation_error)?;

    let user_id = UserId::new(body.user_id)?;
    let mut payload = NotificationPayload::new(body.message);
    payload.kind = body.kind;
    payload.data = body.data;

    let outcome = state
        .notifications
        .send_notification_to_user(user_id, &payload);

    Ok((StatusCode::ACCEPTED, Json(outcome.into())))
}
