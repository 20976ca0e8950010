//! Payment collaborator: Stripe Checkout sessions.
//!
//! Stripe's API is form-encoded, so the request body is assembled as key
//! pairs by a pure function. Without credentials the demo gateway returns a
//! placeholder session instead of failing, which keeps the shop flow
//! navigable.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::config::{HttpTimeouts, StripeConfig};

const CHECKOUT_SESSIONS_URL: &str = "https://api.stripe.com/v1/checkout/sessions";

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(String),
    #[error("payment request failed: {0}")]
    Request(String),
    #[error("payment API returned {status}: {body}")]
    Response { status: u16, body: String },
    #[error("payment response parse failed: {0}")]
    Parse(String),
}

impl PaymentError {
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Response { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutItem {
    pub price_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutMode {
    Payment,
    Subscription,
}

impl CheckoutMode {
    fn as_str(self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Subscription => "subscription",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutItem>,
    pub success_url: String,
    pub cancel_url: String,
    pub customer_email: Option<String>,
    pub mode: CheckoutMode,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: Option<String>,
    pub status: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError>;

    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSession, PaymentError>;

    fn is_demo(&self) -> bool {
        false
    }
}

// =============================================================================
// STRIPE
// =============================================================================

pub struct StripeGateway {
    http: reqwest::Client,
    secret_key: String,
}

impl StripeGateway {
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn new(config: &StripeConfig, timeouts: &HttpTimeouts) -> Result<Self, PaymentError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| PaymentError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, secret_key: config.secret_key.clone() })
    }

    async fn parse(response: reqwest::Response) -> Result<CheckoutSession, PaymentError> {
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| PaymentError::Request(e.to_string()))?;
        if status != 200 {
            return Err(PaymentError::Response { status, body: text });
        }
        parse_session(&text)
    }
}

/// Stripe takes `application/x-www-form-urlencoded` bodies with indexed
/// array keys. Pure so the encoding is testable.
#[must_use]
pub fn checkout_form(request: &CheckoutRequest) -> Vec<(String, String)> {
    let mut form = vec![
        ("mode".to_owned(), request.mode.as_str().to_owned()),
        ("success_url".to_owned(), request.success_url.clone()),
        ("cancel_url".to_owned(), request.cancel_url.clone()),
    ];
    for (i, item) in request.items.iter().enumerate() {
        form.push((format!("line_items[{i}][price]"), item.price_id.clone()));
        form.push((format!("line_items[{i}][quantity]"), item.quantity.to_string()));
    }
    if let Some(email) = &request.customer_email {
        form.push(("customer_email".to_owned(), email.clone()));
    }
    form
}

fn parse_session(json: &str) -> Result<CheckoutSession, PaymentError> {
    let value: Value = serde_json::from_str(json).map_err(|e| PaymentError::Parse(e.to_string()))?;
    let id = value["id"]
        .as_str()
        .ok_or_else(|| PaymentError::Parse("missing session id".to_owned()))?
        .to_owned();
    let status = value["status"]
        .as_str()
        .ok_or_else(|| PaymentError::Parse("missing session status".to_owned()))?
        .to_owned();
    Ok(CheckoutSession { id, url: value["url"].as_str().map(str::to_owned), status })
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let response = self
            .http
            .post(CHECKOUT_SESSIONS_URL)
            .bearer_auth(&self.secret_key)
            .form(&checkout_form(request))
            .send()
            .await
            .map_err(|e| PaymentError::Request(e.to_string()))?;
        Self::parse(response).await
    }

    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSession, PaymentError> {
        let response = self
            .http
            .get(format!("{CHECKOUT_SESSIONS_URL}/{session_id}"))
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(|e| PaymentError::Request(e.to_string()))?;
        Self::parse(response).await
    }
}

// =============================================================================
// DEMO
// =============================================================================

pub struct DemoGateway;

#[async_trait]
impl PaymentGateway for DemoGateway {
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        tracing::info!(items = request.items.len(), "demo gateway: placeholder checkout session");
        Ok(CheckoutSession {
            id: format!("cs_demo_{}", Uuid::new_v4().simple()),
            url: Some(format!("{}?session_id=demo", request.success_url)),
            status: "open".to_owned(),
        })
    }

    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSession, PaymentError> {
        Ok(CheckoutSession { id: session_id.to_owned(), url: None, status: "complete".to_owned() })
    }

    fn is_demo(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[path = "payments_test.rs"]
mod tests;
