//! Form validation schemas for contact and booking submissions.
//!
//! DESIGN
//! ======
//! Declarative per-field rules with fixed human-readable messages. Validation
//! never short-circuits: every rule runs and every violated field appears in
//! the returned error map, so the client can surface all problems at once.
//! A required field missing from the input is a violation, never implicitly
//! valid.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Field name -> error message, ordered for stable serialization.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

pub const INQUIRY_TYPES: [&str; 6] = ["general", "booking", "services", "products", "complaint", "compliment"];
pub const PREFERRED_CONTACT_METHODS: [&str; 3] = ["email", "phone", "text"];

// =============================================================================
// CONTACT SCHEMA
// =============================================================================

/// A contact-form submission as posted by the client. Unknown enum values are
/// kept as strings so membership failures surface as field errors rather than
/// deserialization rejections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub inquiry_type: String,
    #[serde(default)]
    pub preferred_contact: String,
    #[serde(default)]
    pub consent: bool,
    /// Submission discriminator: `"booking"` triggers the dual notification
    /// (client confirmation + business alert).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Booking-type submissions may carry appointment preferences.
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub preferred_date: Option<String>,
    #[serde(default)]
    pub preferred_time: Option<String>,
}

impl ContactSubmission {
    #[must_use]
    pub fn is_booking(&self) -> bool {
        self.kind.as_deref() == Some("booking")
    }
}

/// Validate a contact submission against the contact schema.
///
/// # Errors
///
/// Returns the complete map of violated fields.
pub fn validate_contact(s: &ContactSubmission) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    check_min_len(&mut errors, "name", &s.name, 2, "Name must be at least 2 characters");
    check_email(&mut errors, "email", &s.email);
    check_min_len(&mut errors, "phone", &s.phone, 10, "Please enter a valid phone number");
    check_min_len(&mut errors, "subject", &s.subject, 5, "Subject must be at least 5 characters");
    check_min_len(&mut errors, "message", &s.message, 10, "Message must be at least 10 characters");
    check_one_of(&mut errors, "inquiryType", &s.inquiry_type, &INQUIRY_TYPES, "Please select a valid inquiry type");
    check_one_of(
        &mut errors,
        "preferredContact",
        &s.preferred_contact,
        &PREFERRED_CONTACT_METHODS,
        "Please select a valid contact method",
    );
    check_consent(&mut errors, s.consent, "You must agree to our privacy policy");

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

// =============================================================================
// BOOKING SCHEMA
// =============================================================================

/// Borrowed view of a booking draft, validated at final submission. The
/// wizard owns the draft; this keeps the validator a leaf module.
#[derive(Debug, Clone, Copy)]
pub struct BookingFields<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub services: &'a [String],
    pub preferred_date: &'a str,
    pub preferred_time: &'a str,
    pub consent: bool,
}

/// Validate the booking superset schema. Stylist, special requests and the
/// new-client flag are optional and never produce errors.
///
/// # Errors
///
/// Returns the complete map of violated fields.
pub fn validate_booking(f: &BookingFields<'_>) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    check_min_len(&mut errors, "firstName", f.first_name, 2, "First name must be at least 2 characters");
    check_min_len(&mut errors, "lastName", f.last_name, 2, "Last name must be at least 2 characters");
    check_email(&mut errors, "email", f.email);
    check_min_len(&mut errors, "phone", f.phone, 10, "Please enter a valid phone number");
    if f.services.is_empty() {
        errors.insert("services", "Please select at least one service");
    }
    if f.preferred_date.is_empty() {
        errors.insert("preferredDate", "Please select a date");
    }
    if f.preferred_time.is_empty() {
        errors.insert("preferredTime", "Please select a time");
    }
    check_consent(&mut errors, f.consent, "You must agree to our terms");

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

// =============================================================================
// RULES
// =============================================================================

fn check_min_len(errors: &mut FieldErrors, field: &'static str, value: &str, min: usize, msg: &'static str) {
    if value.chars().count() < min {
        errors.insert(field, msg);
    }
}

fn check_one_of(errors: &mut FieldErrors, field: &'static str, value: &str, allowed: &[&str], msg: &'static str) {
    if !allowed.contains(&value) {
        errors.insert(field, msg);
    }
}

fn check_consent(errors: &mut FieldErrors, consent: bool, msg: &'static str) {
    if !consent {
        errors.insert("consent", msg);
    }
}

fn check_email(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if !is_valid_email(value) {
        errors.insert(field, "Please enter a valid email address");
    }
}

/// Accepts `local@domain` where the domain looks real: dotted, non-empty
/// labels, no whitespace anywhere.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
#[path = "validator_test.rs"]
mod tests;
