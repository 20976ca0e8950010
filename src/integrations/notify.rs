//! Email notification collaborator.
//!
//! Contact and booking submissions fan out to the business (alert) and, for
//! bookings, to the client (confirmation). The real implementation delivers
//! through Resend; without credentials a demo variant logs the message and
//! fabricates an id so the rest of the flow behaves identically.

use async_trait::async_trait;
use resend_rs::types::CreateEmailBaseOptions;
use resend_rs::Resend;
use thiserror::Error;
use uuid::Uuid;

use crate::config::{BusinessInfo, NotifyConfig};

const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact_notification.html");
const CONFIRMATION_TEMPLATE: &str = include_str!("../../templates/booking_confirmation.html");

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

impl NotifyError {
    /// Delivery failures are transient as far as the caller can tell.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Delivery(_))
    }
}

/// Everything a notification email needs. Optional fields render as "Not
/// provided" in the business alert.
#[derive(Debug, Clone)]
pub struct Notification {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub message: String,
    pub inquiry_type: Option<String>,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Alert the business about a new submission. Returns a message id.
    async fn notify_business(&self, n: &Notification) -> Result<String, NotifyError>;

    /// Send the client their booking confirmation. Returns a message id.
    async fn confirm_client(&self, n: &Notification) -> Result<String, NotifyError>;

    fn is_demo(&self) -> bool {
        false
    }
}

// =============================================================================
// TEMPLATE RENDERING
// =============================================================================

fn or_not_provided(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("Not provided")
}

fn fill(template: &str, n: &Notification, biz: &BusinessInfo) -> String {
    template
        .replace("{{NAME}}", &n.name)
        .replace("{{EMAIL}}", &n.email)
        .replace("{{PHONE}}", or_not_provided(n.phone.as_deref()))
        .replace("{{SERVICE}}", or_not_provided(n.service.as_deref()))
        .replace("{{DATE}}", or_not_provided(n.preferred_date.as_deref()))
        .replace("{{TIME}}", or_not_provided(n.preferred_time.as_deref()))
        .replace("{{MESSAGE}}", &n.message)
        .replace("{{BUSINESS}}", &biz.name)
        .replace("{{INSTAGRAM}}", &biz.instagram_url)
}

#[must_use]
pub fn render_contact_notification(n: &Notification, biz: &BusinessInfo) -> String {
    fill(CONTACT_TEMPLATE, n, biz)
}

#[must_use]
pub fn render_booking_confirmation(n: &Notification, biz: &BusinessInfo) -> String {
    fill(CONFIRMATION_TEMPLATE, n, biz)
}

fn alert_subject(n: &Notification) -> String {
    match n.inquiry_type.as_deref() {
        Some("booking") => format!("New Booking Request from {}", n.name),
        _ => format!("New Contact Form Submission from {}", n.name),
    }
}

// =============================================================================
// RESEND
// =============================================================================

pub struct ResendNotifier {
    resend: Resend,
    from_email: String,
    business: BusinessInfo,
}

impl ResendNotifier {
    #[must_use]
    pub fn new(config: &NotifyConfig, business: BusinessInfo) -> Self {
        Self {
            resend: Resend::new(&config.api_key),
            from_email: config.from_email.clone(),
            business,
        }
    }

    async fn deliver(&self, to: &str, subject: &str, html: &str) -> Result<String, NotifyError> {
        let email = CreateEmailBaseOptions::new(&self.from_email, [to], subject).with_html(html);
        let sent = self
            .resend
            .emails
            .send(email)
            .await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;
        Ok(sent.id.to_string())
    }
}

#[async_trait]
impl Notifier for ResendNotifier {
    async fn notify_business(&self, n: &Notification) -> Result<String, NotifyError> {
        let html = render_contact_notification(n, &self.business);
        self.deliver(&self.business.email, &alert_subject(n), &html).await
    }

    async fn confirm_client(&self, n: &Notification) -> Result<String, NotifyError> {
        let html = render_booking_confirmation(n, &self.business);
        let subject = format!("Booking Confirmation - {}", self.business.name);
        self.deliver(&n.email, &subject, &html).await
    }
}

// =============================================================================
// DEMO
// =============================================================================

pub struct DemoNotifier;

#[async_trait]
impl Notifier for DemoNotifier {
    async fn notify_business(&self, n: &Notification) -> Result<String, NotifyError> {
        tracing::info!(name = %n.name, email = %n.email, "demo notifier: business alert");
        Ok(format!("demo_{}", Uuid::new_v4()))
    }

    async fn confirm_client(&self, n: &Notification) -> Result<String, NotifyError> {
        tracing::info!(email = %n.email, "demo notifier: client confirmation");
        Ok(format!("demo_{}", Uuid::new_v4()))
    }

    fn is_demo(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;
