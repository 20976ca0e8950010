use super::*;

fn valid_contact() -> ContactSubmission {
    ContactSubmission {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        phone: "5551234567".to_owned(),
        subject: "Booking question".to_owned(),
        message: "Can I book Tuesday?".to_owned(),
        inquiry_type: "booking".to_owned(),
        preferred_contact: "email".to_owned(),
        consent: true,
        ..ContactSubmission::default()
    }
}

#[test]
fn fully_valid_contact_payload_produces_zero_errors() {
    assert!(validate_contact(&valid_contact()).is_ok());
}

#[test]
fn every_violated_field_is_reported_not_just_the_first() {
    let empty = ContactSubmission::default();
    let errors = validate_contact(&empty).unwrap_err();

    for field in ["name", "email", "phone", "subject", "message", "inquiryType", "preferredContact", "consent"] {
        assert!(errors.contains_key(field), "missing error for {field}");
    }
    assert_eq!(errors.len(), 8);
}

#[test]
fn single_bad_field_reports_only_that_field() {
    let mut s = valid_contact();
    s.email = "not-an-email".to_owned();
    let errors = validate_contact(&s).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("email"), Some(&"Please enter a valid email address"));
}

#[test]
fn consent_must_be_true_with_fixed_message() {
    let mut s = valid_contact();
    s.consent = false;
    let errors = validate_contact(&s).unwrap_err();
    assert_eq!(errors.get("consent"), Some(&"You must agree to our privacy policy"));
}

#[test]
fn inquiry_type_and_preferred_contact_are_closed_enumerations() {
    let mut s = valid_contact();
    s.inquiry_type = "gossip".to_owned();
    s.preferred_contact = "carrier-pigeon".to_owned();
    let errors = validate_contact(&s).unwrap_err();
    assert!(errors.contains_key("inquiryType"));
    assert!(errors.contains_key("preferredContact"));
}

#[test]
fn phone_counts_formatting_characters() {
    let mut s = valid_contact();
    s.phone = "(555) 123-4567".to_owned();
    assert!(validate_contact(&s).is_ok());
    s.phone = "555-1234".to_owned();
    assert!(validate_contact(&s).unwrap_err().contains_key("phone"));
}

#[test]
fn email_grammar_rejects_lookalikes() {
    for bad in ["", "plain", "@example.com", "a@", "a@b", "a@b..com", "a b@example.com", "a@ex ample.com", "a@b@c.com"] {
        assert!(!is_valid_email(bad), "accepted {bad:?}");
    }
    for good in ["jane@example.com", "j.doe+tag@sub.example.co"] {
        assert!(is_valid_email(good), "rejected {good:?}");
    }
}

#[test]
fn booking_schema_checks_all_fields_together() {
    let f = BookingFields {
        first_name: "J",
        last_name: "",
        email: "nope",
        phone: "123",
        services: &[],
        preferred_date: "",
        preferred_time: "",
        consent: false,
    };
    let errors = validate_booking(&f).unwrap_err();
    for field in ["firstName", "lastName", "email", "phone", "services", "preferredDate", "preferredTime", "consent"] {
        assert!(errors.contains_key(field), "missing error for {field}");
    }
}

#[test]
fn booking_schema_passes_a_complete_draft() {
    let services = vec!["balayage".to_owned()];
    let f = BookingFields {
        first_name: "Jane",
        last_name: "Doe",
        email: "jane@example.com",
        phone: "5551234567",
        services: &services,
        preferred_date: "2030-06-01",
        preferred_time: "10:00 AM",
        consent: true,
    };
    assert!(validate_booking(&f).is_ok());
}

#[test]
fn booking_discriminator_is_the_type_field() {
    let s: ContactSubmission =
        serde_json::from_str(r#"{"type":"booking","name":"Jane Doe","email":"jane@example.com"}"#).unwrap();
    assert!(s.is_booking());
    let s: ContactSubmission = serde_json::from_str(r#"{"inquiryType":"booking"}"#).unwrap();
    assert!(!s.is_booking());
}
