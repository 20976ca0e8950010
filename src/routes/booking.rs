//! Booking wizard session routes.
//!
//! Each wizard lives server-side keyed by a session id; every mutation
//! returns the refreshed session view so the client never tracks state
//! locally. Submission fans out the confirmation and alert emails and only
//! resets the wizard when both deliveries succeed.

use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::integrations::notify::Notification;
use crate::routes::ApiError;
use crate::services::catalog::{self, Service};
use crate::services::wizard::{BookingRequest, BookingStep, BookingWizard, ContactBundle, Stylist, STYLISTS};
use crate::state::AppState;

// =============================================================================
// VIEWS
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: Uuid,
    pub step: BookingStep,
    pub services: Vec<String>,
    pub stylist: Option<String>,
    pub preferred_date: String,
    pub preferred_time: String,
    pub available_slots: Vec<String>,
    pub total_price: u32,
    pub total_duration: String,
    pub submitting: bool,
}

fn view(id: Uuid, wizard: &BookingWizard) -> SessionView {
    SessionView {
        session_id: id,
        step: wizard.step(),
        services: wizard.selected_services().to_vec(),
        stylist: wizard.selected_stylist().map(str::to_owned),
        preferred_date: wizard.preferred_date().to_owned(),
        preferred_time: wizard.preferred_time().to_owned(),
        available_slots: wizard.available_slots().to_vec(),
        total_price: wizard.total_price(),
        total_duration: wizard.total_duration(),
        submitting: wizard.is_submitting(),
    }
}

// =============================================================================
// CATALOG LOOKUPS
// =============================================================================

/// `GET /api/booking/services` — bookable services.
pub async fn list_services() -> Json<Vec<&'static Service>> {
    Json(catalog::SERVICES.iter().collect())
}

/// `GET /api/booking/stylists` — stylist roster.
pub async fn list_stylists() -> Json<Vec<&'static Stylist>> {
    Json(STYLISTS.iter().collect())
}

#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotsResponse {
    pub date: String,
    pub available_slots: Vec<String>,
}

const DATE_FMT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

fn parse_date(raw: &str) -> Result<Date, ApiError> {
    Date::parse(raw, DATE_FMT)
        .map_err(|_| ApiError::BadRequest("date must be in YYYY-MM-DD format".to_owned()))
}

/// `GET /api/booking/slots?date=YYYY-MM-DD` — availability for a date.
pub async fn available_slots(
    State(state): State<AppState>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, ApiError> {
    let date = parse_date(&query.date)?;
    let slots = state.scheduler.available_slots(date).await;
    Ok(Json(SlotsResponse { date: query.date, available_slots: slots }))
}

// =============================================================================
// SESSION LIFECYCLE
// =============================================================================

/// `POST /api/booking/session` — start a new booking wizard.
pub async fn create_session(State(state): State<AppState>) -> Json<SessionView> {
    let id = Uuid::new_v4();
    let wizard = BookingWizard::new();
    let response = view(id, &wizard);
    state.wizards.write().await.insert(id, wizard);
    Json(response)
}

/// `GET /api/booking/session/{id}` — current session snapshot.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    let wizards = state.wizards.read().await;
    let wizard = wizards.get(&id).ok_or(ApiError::NotFound("booking session"))?;
    Ok(Json(view(id, wizard)))
}

// Runs one mutation under the write lock and returns the refreshed view.
async fn with_wizard<F>(state: &AppState, id: Uuid, apply: F) -> Result<Json<SessionView>, ApiError>
where
    F: FnOnce(&mut BookingWizard) -> Result<(), ApiError>,
{
    let mut wizards = state.wizards.write().await;
    let wizard = wizards.get_mut(&id).ok_or(ApiError::NotFound("booking session"))?;
    apply(wizard)?;
    Ok(Json(view(id, wizard)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBody {
    pub service_id: String,
}

/// `POST /api/booking/session/{id}/services` — toggle a service selection.
pub async fn toggle_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ServiceBody>,
) -> Result<Json<SessionView>, ApiError> {
    with_wizard(&state, id, |w| w.toggle_service(&body.service_id).map_err(Into::into)).await
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylistBody {
    pub stylist_id: String,
}

/// `POST /api/booking/session/{id}/stylist` — choose a stylist.
pub async fn select_stylist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<StylistBody>,
) -> Result<Json<SessionView>, ApiError> {
    with_wizard(&state, id, |w| w.select_stylist(&body.stylist_id).map_err(Into::into)).await
}

#[derive(Deserialize)]
pub struct DateBody {
    pub date: String,
}

/// `POST /api/booking/session/{id}/date` — set the preferred date and load
/// its availability.
pub async fn set_date(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<DateBody>,
) -> Result<Json<SessionView>, ApiError> {
    let date = parse_date(&body.date)?;
    let slots = state.scheduler.available_slots(date).await;
    let today = OffsetDateTime::now_utc().date();
    with_wizard(&state, id, |w| {
        w.set_preferred_date(&body.date, today, slots).map_err(Into::into)
    })
    .await
}

#[derive(Deserialize)]
pub struct TimeBody {
    pub time: String,
}

/// `POST /api/booking/session/{id}/time` — choose an available slot.
pub async fn select_time(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<TimeBody>,
) -> Result<Json<SessionView>, ApiError> {
    with_wizard(&state, id, |w| w.select_time(&body.time).map_err(Into::into)).await
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactBody {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub special_requests: String,
    #[serde(default = "default_true")]
    pub is_new_client: bool,
    #[serde(default)]
    pub consent: bool,
}

fn default_true() -> bool {
    true
}

/// `POST /api/booking/session/{id}/contact` — record contact details.
/// Validation happens at submission, not here.
pub async fn set_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ContactBody>,
) -> Result<Json<SessionView>, ApiError> {
    with_wizard(&state, id, |w| {
        w.set_contact(ContactBundle {
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            phone: body.phone,
            special_requests: body.special_requests,
            is_new_client: body.is_new_client,
            consent: body.consent,
        });
        Ok(())
    })
    .await
}

/// `POST /api/booking/session/{id}/advance` — forward navigation.
pub async fn advance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    with_wizard(&state, id, |w| w.advance().map(|_| ()).map_err(Into::into)).await
}

/// `POST /api/booking/session/{id}/back` — backward navigation.
pub async fn back(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    with_wizard(&state, id, |w| {
        w.back();
        Ok(())
    })
    .await
}

// =============================================================================
// SUBMISSION
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub message: &'static str,
    pub message_id: String,
}

fn to_notification(request: &BookingRequest) -> Notification {
    let service_names: Vec<&str> = request
        .services
        .iter()
        .filter_map(|id| catalog::service_by_id(id))
        .map(|s| s.name)
        .collect();
    Notification {
        name: format!("{} {}", request.first_name, request.last_name),
        email: request.email.clone(),
        phone: Some(request.phone.clone()),
        service: Some(service_names.join(", ")),
        preferred_date: Some(request.preferred_date.clone()),
        preferred_time: Some(request.preferred_time.clone()),
        message: request.message.clone(),
        inquiry_type: Some("booking".to_owned()),
    }
}

/// `POST /api/booking/session/{id}/submit` — validate, deliver both booking
/// emails, and reset the wizard on success.
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let request = {
        let mut wizards = state.wizards.write().await;
        let wizard = wizards.get_mut(&id).ok_or(ApiError::NotFound("booking session"))?;
        wizard.begin_submit()?
    };

    let notification = to_notification(&request);
    let (confirmation, alert) = tokio::join!(
        state.notifier.confirm_client(&notification),
        state.notifier.notify_business(&notification),
    );
    let outcome = confirmation.and(alert);

    // The session may have expired while the emails were in flight.
    if let Some(wizard) = state.wizards.write().await.get_mut(&id) {
        wizard.finish_submit(outcome.is_ok());
    }

    match outcome {
        Ok(message_id) => {
            tracing::info!(session = %id, %message_id, "booking submitted");
            Ok(Json(SubmitResponse {
                success: true,
                message: "Booking request submitted successfully",
                message_id,
            }))
        }
        Err(e) => Err(ApiError::Collaborator {
            message: "Failed to send booking confirmation".to_owned(),
            retryable: e.retryable(),
        }),
    }
}

#[cfg(test)]
#[path = "booking_test.rs"]
mod tests;
