use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use time::macros::format_description;
use time::{Duration, OffsetDateTime};

use super::*;
use crate::state::test_helpers::{demo_state, state_with_notifier, RecordingNotifier};

fn tomorrow() -> String {
    let fmt = format_description!("[year]-[month]-[day]");
    (OffsetDateTime::now_utc().date() + Duration::days(1))
        .format(&fmt)
        .expect("formattable date")
}

async fn session_through_datetime(state: &AppState) -> (Uuid, Vec<String>) {
    let Json(session) = create_session(State(state.clone())).await;
    let id = session.session_id;

    toggle_service(
        State(state.clone()),
        Path(id),
        Json(ServiceBody { service_id: "balayage".to_owned() }),
    )
    .await
    .unwrap();
    advance(State(state.clone()), Path(id)).await.unwrap();

    select_stylist(
        State(state.clone()),
        Path(id),
        Json(StylistBody { stylist_id: "nina".to_owned() }),
    )
    .await
    .unwrap();
    advance(State(state.clone()), Path(id)).await.unwrap();

    let Json(view) =
        set_date(State(state.clone()), Path(id), Json(DateBody { date: tomorrow() })).await.unwrap();
    let slots = view.available_slots;
    assert!(!slots.is_empty(), "fixture scheduler should offer slots");
    select_time(State(state.clone()), Path(id), Json(TimeBody { time: slots[0].clone() }))
        .await
        .unwrap();
    advance(State(state.clone()), Path(id)).await.unwrap();
    (id, slots)
}

fn contact_body() -> ContactBody {
    ContactBody {
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        phone: "555-123-4567".to_owned(),
        special_requests: String::new(),
        is_new_client: true,
        consent: true,
    }
}

#[tokio::test]
async fn create_and_fetch_session() {
    let state = demo_state();
    let Json(session) = create_session(State(state.clone())).await;
    assert_eq!(session.step, BookingStep::ServiceSelection);
    assert!(!session.submitting);

    let Json(fetched) =
        get_session(State(state.clone()), Path(session.session_id)).await.unwrap();
    assert_eq!(fetched.session_id, session.session_id);

    let missing = get_session(State(state), Path(Uuid::new_v4())).await;
    assert!(matches!(missing, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn advancing_an_empty_session_is_a_bad_request() {
    let state = demo_state();
    let Json(session) = create_session(State(state.clone())).await;
    let result = advance(State(state), Path(session.session_id)).await;
    assert!(matches!(result, Err(ApiError::BadRequest(_))));
}

#[tokio::test]
async fn full_wizard_flow_reaches_contact_step() {
    let state = demo_state();
    let (id, _slots) = session_through_datetime(&state).await;
    let Json(view) = get_session(State(state.clone()), Path(id)).await.unwrap();
    assert_eq!(view.step, BookingStep::ContactDetails);
    assert_eq!(view.total_price, 180);
}

#[tokio::test]
async fn slots_endpoint_rejects_malformed_dates() {
    let state = demo_state();
    let ok = available_slots(State(state.clone()), Query(SlotsQuery { date: tomorrow() })).await;
    assert!(ok.is_ok());

    let bad =
        available_slots(State(state), Query(SlotsQuery { date: "next tuesday".to_owned() })).await;
    assert!(matches!(bad, Err(ApiError::BadRequest(_))));
}

#[tokio::test]
async fn submit_sends_both_emails_and_resets_the_wizard() {
    let notifier = Arc::new(RecordingNotifier::new(false));
    let state = state_with_notifier(notifier.clone());
    let (id, _) = session_through_datetime(&state).await;
    set_contact(State(state.clone()), Path(id), Json(contact_body())).await.unwrap();

    let Json(response) = submit(State(state.clone()), Path(id)).await.unwrap();
    assert!(response.success);
    assert_eq!(notifier.sent.lock().await.len(), 2);

    let Json(view) = get_session(State(state), Path(id)).await.unwrap();
    assert_eq!(view.step, BookingStep::ServiceSelection);
    assert!(view.services.is_empty());
    assert!(!view.submitting);
}

#[tokio::test]
async fn submit_with_invalid_contact_reports_field_errors() {
    let state = demo_state();
    let (id, _) = session_through_datetime(&state).await;

    let result = submit(State(state), Path(id)).await;
    let Err(ApiError::Validation(errors)) = result else {
        panic!("expected validation error");
    };
    assert!(errors.contains_key("firstName"));
    assert!(errors.contains_key("consent"));
}

#[tokio::test]
async fn failed_delivery_keeps_the_draft_for_retry() {
    let state = state_with_notifier(Arc::new(RecordingNotifier::new(true)));
    let (id, _) = session_through_datetime(&state).await;
    set_contact(State(state.clone()), Path(id), Json(contact_body())).await.unwrap();

    let result = submit(State(state.clone()), Path(id)).await;
    assert!(matches!(result, Err(ApiError::Collaborator { retryable: true, .. })));

    // Draft is intact and no longer marked in flight.
    let Json(view) = get_session(State(state), Path(id)).await.unwrap();
    assert_eq!(view.step, BookingStep::ContactDetails);
    assert_eq!(view.services, ["balayage"]);
    assert!(!view.submitting);
}

#[tokio::test]
async fn lookups_return_catalog_and_roster() {
    let Json(services) = list_services().await;
    assert_eq!(services.len(), 6);
    let Json(stylists) = list_stylists().await;
    assert_eq!(stylists.len(), 2);
}
