//! Four-step booking wizard.
//!
//! DESIGN
//! ======
//! Linear state machine: ServiceSelection -> StylistSelection ->
//! DateTimeSelection -> ContactDetails, forward navigation gated per step,
//! backward always allowed (no-op at the first step). The machine itself is
//! synchronous and pure; submission I/O happens at the call site between
//! `begin_submit` (validates, snapshots the draft, raises the in-flight
//! flag) and `finish_submit` (drops the flag, resets on success). The flag
//! is what blocks double submission while the notifier call is outstanding.
//!
//! Available time slots come from the `Scheduler` collaborator. Changing the
//! preferred date replaces the available set and drops a previously selected
//! time if the new set no longer contains it.

use serde::Serialize;
use thiserror::Error;
use time::macros::format_description;
use time::Date;

use crate::services::catalog::{self, Service};
use crate::services::validator::{validate_booking, BookingFields, FieldErrors};

// =============================================================================
// STYLISTS
// =============================================================================

#[derive(Debug, Serialize)]
pub struct Stylist {
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub experience: &'static str,
    pub specialties: &'static [&'static str],
    pub rating: f32,
}

pub const STYLISTS: [Stylist; 2] = [
    Stylist {
        id: "nina",
        name: "Nina Moore",
        title: "Master Stylist & Owner",
        experience: "5+ years",
        specialties: &["Balayage", "Color Correction", "Bridal Styling"],
        rating: 4.9,
    },
    Stylist {
        id: "assistant",
        name: "Any Available Stylist",
        title: "Professional Stylist",
        experience: "All levels",
        specialties: &["All Services"],
        rating: 4.8,
    },
];

#[must_use]
pub fn stylist_by_id(id: &str) -> Option<&'static Stylist> {
    STYLISTS.iter().find(|s| s.id == id)
}

// =============================================================================
// STATE MACHINE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    ServiceSelection,
    StylistSelection,
    DateTimeSelection,
    ContactDetails,
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("unknown service: {0}")]
    UnknownService(String),
    #[error("unknown stylist: {0}")]
    UnknownStylist(String),
    #[error("date must be in YYYY-MM-DD format")]
    MalformedDate,
    #[error("date must not be in the past")]
    DateInPast,
    #[error("time slot is not available for the selected date")]
    SlotUnavailable,
    #[error("current step is incomplete")]
    StepIncomplete(BookingStep),
    #[error("booking details failed validation")]
    Validation(FieldErrors),
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error("submission is only possible from the contact details step")]
    NotAtContactStep,
    #[error("the contact details step completes by submitting, not advancing")]
    AdvancePastFinalStep,
}

#[derive(Debug, Clone, Default)]
pub struct ContactBundle {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: String,
    pub is_new_client: bool,
    pub consent: bool,
}

/// Read-only snapshot handed to the notifier when the draft is submitted.
#[derive(Debug, Clone, Serialize)]
pub struct BookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub services: Vec<String>,
    pub stylist: Option<String>,
    pub preferred_date: String,
    pub preferred_time: String,
    pub special_requests: String,
    pub is_new_client: bool,
    /// Human-readable summary used as the notification message body.
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct BookingWizard {
    step: BookingStep,
    services: Vec<String>,
    stylist: Option<String>,
    preferred_date: String,
    preferred_time: String,
    available_slots: Vec<String>,
    contact: ContactBundle,
    submitting: bool,
}

const DATE_FMT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

impl BookingWizard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: BookingStep::ServiceSelection,
            services: Vec::new(),
            stylist: None,
            preferred_date: String::new(),
            preferred_time: String::new(),
            available_slots: Vec::new(),
            contact: ContactBundle { is_new_client: true, ..ContactBundle::default() },
            submitting: false,
        }
    }

    #[must_use]
    pub fn step(&self) -> BookingStep {
        self.step
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn selected_services(&self) -> &[String] {
        &self.services
    }

    #[must_use]
    pub fn available_slots(&self) -> &[String] {
        &self.available_slots
    }

    #[must_use]
    pub fn selected_stylist(&self) -> Option<&str> {
        self.stylist.as_deref()
    }

    #[must_use]
    pub fn preferred_date(&self) -> &str {
        &self.preferred_date
    }

    #[must_use]
    pub fn preferred_time(&self) -> &str {
        &self.preferred_time
    }

    /// Add or remove a service from the selection.
    ///
    /// # Errors
    ///
    /// Fails if the identifier is not a known service.
    pub fn toggle_service(&mut self, service_id: &str) -> Result<(), WizardError> {
        if catalog::service_by_id(service_id).is_none() {
            return Err(WizardError::UnknownService(service_id.to_owned()));
        }
        if let Some(pos) = self.services.iter().position(|s| s == service_id) {
            self.services.remove(pos);
        } else {
            self.services.push(service_id.to_owned());
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Fails if the identifier is not a known stylist.
    pub fn select_stylist(&mut self, stylist_id: &str) -> Result<(), WizardError> {
        if stylist_by_id(stylist_id).is_none() {
            return Err(WizardError::UnknownStylist(stylist_id.to_owned()));
        }
        self.stylist = Some(stylist_id.to_owned());
        Ok(())
    }

    /// Set the preferred date and install the slots the scheduler reported
    /// available for it. A previously selected time that is absent from the
    /// new availability is cleared.
    ///
    /// # Errors
    ///
    /// Fails on a malformed date or a date before `today`.
    pub fn set_preferred_date(
        &mut self,
        raw: &str,
        today: Date,
        available: Vec<String>,
    ) -> Result<(), WizardError> {
        let date = Date::parse(raw, DATE_FMT).map_err(|_| WizardError::MalformedDate)?;
        if date < today {
            return Err(WizardError::DateInPast);
        }
        self.preferred_date = raw.to_owned();
        if !self.preferred_time.is_empty() && !available.contains(&self.preferred_time) {
            self.preferred_time.clear();
        }
        self.available_slots = available;
        Ok(())
    }

    /// # Errors
    ///
    /// Fails if the slot is not in the available set for the chosen date.
    pub fn select_time(&mut self, slot: &str) -> Result<(), WizardError> {
        if !self.available_slots.iter().any(|s| s == slot) {
            return Err(WizardError::SlotUnavailable);
        }
        self.preferred_time = slot.to_owned();
        Ok(())
    }

    pub fn set_contact(&mut self, contact: ContactBundle) {
        self.contact = contact;
    }

    /// Advance to the next step if the current step's guard passes.
    ///
    /// # Errors
    ///
    /// `StepIncomplete` when the guard fails; advancing from the contact
    /// step is not a navigation but a submission, so it fails too.
    pub fn advance(&mut self) -> Result<BookingStep, WizardError> {
        let next = match self.step {
            BookingStep::ServiceSelection => {
                if self.services.is_empty() {
                    return Err(WizardError::StepIncomplete(self.step));
                }
                BookingStep::StylistSelection
            }
            BookingStep::StylistSelection => {
                if self.stylist.is_none() {
                    return Err(WizardError::StepIncomplete(self.step));
                }
                BookingStep::DateTimeSelection
            }
            BookingStep::DateTimeSelection => {
                if self.preferred_date.is_empty() || self.preferred_time.is_empty() {
                    return Err(WizardError::StepIncomplete(self.step));
                }
                BookingStep::ContactDetails
            }
            BookingStep::ContactDetails => return Err(WizardError::AdvancePastFinalStep),
        };
        self.step = next;
        Ok(next)
    }

    /// Step backward. No-op at the first step.
    pub fn back(&mut self) -> BookingStep {
        self.step = match self.step {
            BookingStep::ServiceSelection | BookingStep::StylistSelection => BookingStep::ServiceSelection,
            BookingStep::DateTimeSelection => BookingStep::StylistSelection,
            BookingStep::ContactDetails => BookingStep::DateTimeSelection,
        };
        self.step
    }

    /// Sum of the minimum prices of the selected services.
    #[must_use]
    pub fn total_price(&self) -> u32 {
        self.selected_service_records().map(|s| s.price_min).sum()
    }

    /// Comma-joined duration labels of the selected services.
    #[must_use]
    pub fn total_duration(&self) -> String {
        self.selected_service_records().map(|s| s.duration).collect::<Vec<_>>().join(", ")
    }

    fn selected_service_records(&self) -> impl Iterator<Item = &'static Service> + '_ {
        self.services.iter().filter_map(|id| catalog::service_by_id(id))
    }

    /// Validate the whole draft and, on success, snapshot it for submission
    /// and raise the in-flight flag. The caller performs the notifier call
    /// and reports back through [`finish_submit`](Self::finish_submit).
    ///
    /// # Errors
    ///
    /// `SubmissionInFlight` while a prior submission is outstanding,
    /// `NotAtContactStep` outside the final step, `Validation` with the
    /// full field error map otherwise.
    pub fn begin_submit(&mut self) -> Result<BookingRequest, WizardError> {
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }
        if self.step != BookingStep::ContactDetails {
            return Err(WizardError::NotAtContactStep);
        }
        let fields = BookingFields {
            first_name: &self.contact.first_name,
            last_name: &self.contact.last_name,
            email: &self.contact.email,
            phone: &self.contact.phone,
            services: &self.services,
            preferred_date: &self.preferred_date,
            preferred_time: &self.preferred_time,
            consent: self.contact.consent,
        };
        validate_booking(&fields).map_err(WizardError::Validation)?;

        let service_names: Vec<&str> =
            self.selected_service_records().map(|s| s.name).collect();
        let message = format!(
            "Booking request for {} on {} at {}",
            service_names.join(", "),
            self.preferred_date,
            self.preferred_time
        );
        self.submitting = true;
        Ok(BookingRequest {
            first_name: self.contact.first_name.clone(),
            last_name: self.contact.last_name.clone(),
            email: self.contact.email.clone(),
            phone: self.contact.phone.clone(),
            services: self.services.clone(),
            stylist: self.stylist.clone(),
            preferred_date: self.preferred_date.clone(),
            preferred_time: self.preferred_time.clone(),
            special_requests: self.contact.special_requests.clone(),
            is_new_client: self.contact.is_new_client,
            message,
        })
    }

    /// Record the outcome of the in-flight submission. Success resets the
    /// wizard to an empty draft at the first step; failure returns to an
    /// editable contact step so the user can retry.
    pub fn finish_submit(&mut self, success: bool) {
        self.submitting = false;
        if success {
            *self = Self::new();
        }
    }
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "wizard_test.rs"]
mod tests;
