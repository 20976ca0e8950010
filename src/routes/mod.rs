//! Router assembly and the API error envelope.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything is a JSON API under `/api`. Failures use one envelope:
//! `{success: false, message, retryable}`, with validation failures adding a
//! per-field error map. Validation is 422, collaborator failures are 502 and
//! marked retryable, everything else is the usual 4xx.

pub mod booking;
pub mod chat;
pub mod contact;
pub mod content;
pub mod shop;
pub mod site;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::services::validator::FieldErrors;
use crate::services::wizard::WizardError;
use crate::state::AppState;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    /// Field-level validation failure, 422.
    Validation(FieldErrors),
    /// An external collaborator failed, 502, retryable per its error.
    Collaborator { message: String, retryable: bool },
    NotFound(&'static str),
    BadRequest(String),
    /// A booking submission is already in flight, 409.
    Conflict(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "success": false,
                    "message": "Validation failed",
                    "retryable": false,
                    "errors": errors,
                }),
            ),
            Self::Collaborator { message, retryable } => (
                StatusCode::BAD_GATEWAY,
                json!({ "success": false, "message": message, "retryable": retryable }),
            ),
            Self::NotFound(what) => (
                StatusCode::NOT_FOUND,
                json!({ "success": false, "message": format!("{what} not found"), "retryable": false }),
            ),
            Self::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "message": message, "retryable": false }),
            ),
            Self::Conflict(message) => (
                StatusCode::CONFLICT,
                json!({ "success": false, "message": message, "retryable": false }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

impl From<WizardError> for ApiError {
    fn from(e: WizardError) -> Self {
        match e {
            WizardError::Validation(errors) => Self::Validation(errors),
            WizardError::SubmissionInFlight => Self::Conflict(e.to_string()),
            other => Self::BadRequest(other.to_string()),
        }
    }
}

// =============================================================================
// ROUTER
// =============================================================================

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/contact", post(contact::submit))
        .route("/api/booking/services", get(booking::list_services))
        .route("/api/booking/stylists", get(booking::list_stylists))
        .route("/api/booking/slots", get(booking::available_slots))
        .route("/api/booking/session", post(booking::create_session))
        .route("/api/booking/session/{id}", get(booking::get_session))
        .route("/api/booking/session/{id}/services", post(booking::toggle_service))
        .route("/api/booking/session/{id}/stylist", post(booking::select_stylist))
        .route("/api/booking/session/{id}/date", post(booking::set_date))
        .route("/api/booking/session/{id}/time", post(booking::select_time))
        .route("/api/booking/session/{id}/contact", post(booking::set_contact))
        .route("/api/booking/session/{id}/advance", post(booking::advance))
        .route("/api/booking/session/{id}/back", post(booking::back))
        .route("/api/booking/session/{id}/submit", post(booking::submit))
        .route("/api/chat/session", post(chat::create_session))
        .route("/api/chat/session/{id}", get(chat::transcript))
        .route("/api/chat/session/{id}/message", post(chat::send_message))
        .route("/api/blog", get(content::blog))
        .route("/api/portfolio", get(content::portfolio))
        .route("/api/services", get(content::services))
        .route("/api/shop/products", get(shop::products))
        .route("/api/shop/cart", post(shop::create_cart))
        .route("/api/shop/cart/{id}/lines", post(shop::add_line))
        .route("/api/shop/checkout", post(shop::create_checkout))
        .route("/api/shop/checkout/{id}", get(shop::get_checkout))
        .route("/api/site/info", get(site::info))
        .route("/api/feed", get(site::feed))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
