//! Identity-provider webhook receiver.
//!
//! Only `user.created` has an effect: the new account is mirrored into the
//! `users` table. Every other verified event is acknowledged and ignored.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use swipedeck_core::webhook::{
    UserCreatedData, WebhookEvent, EVENT_USER_CREATED, HEADER_ID, HEADER_SIGNATURE,
    HEADER_TIMESTAMP,
};
use swipedeck_db::models::user::CreateUser;
use swipedeck_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub received: bool,
    pub event_type: String,
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> AppResult<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("Missing {name} header")))
}

// ---------------------------------------------------------------------------
// POST /api/webhooks/identity
// ---------------------------------------------------------------------------

pub async fn receive_identity_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let verifier = state.webhook.as_ref().ok_or_else(|| {
        AppError::InternalError("WEBHOOK_SIGNING_SECRET is not configured".into())
    })?;

    let msg_id = header(&headers, HEADER_ID)?;
    let timestamp = header(&headers, HEADER_TIMESTAMP)?;
    let signatures = header(&headers, HEADER_SIGNATURE)?;

    verifier
        .verify(
            msg_id,
            timestamp,
            signatures,
            &body,
            chrono::Utc::now().timestamp(),
        )
        .map_err(|e| {
            tracing::warn!(msg_id, error = %e, "Rejected webhook delivery");
            AppError::BadRequest(e.to_string())
        })?;

    let event: WebhookEvent = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid webhook payload: {e}")))?;

    if event.event_type == EVENT_USER_CREATED {
        let data: UserCreatedData = serde_json::from_value(event.data)
            .map_err(|e| AppError::BadRequest(format!("Invalid user.created payload: {e}")))?;

        let email = data
            .primary_email()
            .ok_or_else(|| AppError::BadRequest("User has no email address".into()))?;

        let user = UserRepo::create_from_signup(
            &state.pool,
            &CreateUser {
                id: data.id.clone(),
                email: email.to_string(),
            },
        )
        .await?;

        tracing::info!(msg_id, user_id = %user.id, "Mirrored new user");
    } else {
        tracing::debug!(msg_id, event_type = %event.event_type, "Ignoring webhook event");
    }

    Ok(Json(DataResponse {
        data: WebhookAck {
            received: true,
            event_type: event.event_type,
        },
    }))
}
