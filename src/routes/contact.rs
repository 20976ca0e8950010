//! Contact form submission route.
//!
//! Plain contact submissions alert the business. Booking-type submissions
//! additionally send the client a confirmation; both deliveries run
//! concurrently and both must succeed for the submission to count.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::integrations::notify::Notification;
use crate::routes::ApiError;
use crate::services::validator::{validate_contact, ContactSubmission};
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
    pub message_id: String,
}

fn to_notification(s: &ContactSubmission) -> Notification {
    Notification {
        name: s.name.clone(),
        email: s.email.clone(),
        phone: Some(s.phone.clone()).filter(|p| !p.is_empty()),
        service: s.service.clone(),
        preferred_date: s.preferred_date.clone(),
        preferred_time: s.preferred_time.clone(),
        message: s.message.clone(),
        inquiry_type: Some(s.inquiry_type.clone()).filter(|t| !t.is_empty()),
    }
}

/// `POST /api/contact` — validate and deliver a contact or booking submission.
pub async fn submit(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<ContactResponse>, ApiError> {
    validate_contact(&submission).map_err(ApiError::Validation)?;
    let notification = to_notification(&submission);

    let message_id = if submission.is_booking() {
        let (confirmation, alert) = tokio::join!(
            state.notifier.confirm_client(&notification),
            state.notifier.notify_business(&notification),
        );
        let _ = confirmation.map_err(|e| ApiError::Collaborator {
            message: "Failed to send booking confirmation".to_owned(),
            retryable: e.retryable(),
        })?;
        alert.map_err(|e| ApiError::Collaborator {
            message: "Failed to send booking confirmation".to_owned(),
            retryable: e.retryable(),
        })?
    } else {
        state.notifier.notify_business(&notification).await.map_err(|e| {
            ApiError::Collaborator {
                message: "Failed to send message".to_owned(),
                retryable: e.retryable(),
            }
        })?
    };

    tracing::info!(booking = submission.is_booking(), %message_id, "contact submission delivered");
    let message = if submission.is_booking() {
        "Booking request submitted successfully"
    } else {
        "Message sent successfully"
    };
    Ok(Json(ContactResponse { success: true, message, message_id }))
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
