//! Application configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! All environment access happens here, once, at process start. The resulting
//! `AppConfig` is passed by reference to the collaborator constructors and
//! handlers; business logic never reads ambient env state. A collaborator
//! whose credentials are absent gets a `None` sub-config and runs in demo
//! mode instead of failing.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Business contact details interpolated into chatbot responses and emails.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BusinessInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub instagram_url: String,
}

impl Default for BusinessInfo {
    fn default() -> Self {
        Self {
            name: "Luxe Hair Studio".to_owned(),
            phone: "+1 (555) 123-4567".to_owned(),
            email: "hello@luxehair.example".to_owned(),
            address: "123 Beauty Street, Style City, SC 12345".to_owned(),
            instagram_url: "https://instagram.com/luxehairstudio".to_owned(),
        }
    }
}

/// Outbound HTTP timeouts shared by all real collaborator clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

/// Email delivery credentials (Resend).
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    pub api_key: String,
    pub from_email: String,
}

/// Shopify Storefront API credentials.
#[derive(Debug, Clone)]
pub struct ShopifyConfig {
    pub domain: String,
    pub storefront_token: String,
}

/// Stripe API credentials.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    pub publishable_key: String,
    pub secret_key: String,
}

/// Instagram Graph API credentials.
#[derive(Debug, Clone)]
pub struct InstagramConfig {
    pub access_token: String,
    pub user_id: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub business: BusinessInfo,
    pub notify: Option<NotifyConfig>,
    pub shopify: Option<ShopifyConfig>,
    pub stripe: Option<StripeConfig>,
    pub instagram: Option<InstagramConfig>,
    pub analytics_id: Option<String>,
    pub chatbot_enabled: bool,
    pub timeouts: HttpTimeouts,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Never fails: missing collaborator credentials degrade to demo mode,
    /// missing business details fall back to placeholder defaults.
    ///
    /// Recognized variables:
    /// - `PORT` (default 3000)
    /// - `BUSINESS_NAME`, `BUSINESS_PHONE`, `BUSINESS_EMAIL`,
    ///   `BUSINESS_ADDRESS`, `BUSINESS_INSTAGRAM_URL`
    /// - `RESEND_API_KEY` + `RESEND_FROM_EMAIL`
    /// - `SHOPIFY_DOMAIN` + `SHOPIFY_STOREFRONT_ACCESS_TOKEN`
    /// - `STRIPE_PUBLISHABLE_KEY` + `STRIPE_SECRET_KEY`
    /// - `INSTAGRAM_ACCESS_TOKEN` + `INSTAGRAM_USER_ID`
    /// - `GA_TRACKING_ID`
    /// - `CHATBOT_ENABLED` ("false" disables; default enabled)
    /// - `HTTP_REQUEST_TIMEOUT_SECS` (default 30), `HTTP_CONNECT_TIMEOUT_SECS` (default 10)
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = BusinessInfo::default();
        let business = BusinessInfo {
            name: env_or("BUSINESS_NAME", &defaults.name),
            phone: env_or("BUSINESS_PHONE", &defaults.phone),
            email: env_or("BUSINESS_EMAIL", &defaults.email),
            address: env_or("BUSINESS_ADDRESS", &defaults.address),
            instagram_url: env_or("BUSINESS_INSTAGRAM_URL", &defaults.instagram_url),
        };

        let notify = match (env_opt("RESEND_API_KEY"), env_opt("RESEND_FROM_EMAIL")) {
            (Some(api_key), Some(from_email)) => Some(NotifyConfig { api_key, from_email }),
            _ => None,
        };
        let shopify = match (env_opt("SHOPIFY_DOMAIN"), env_opt("SHOPIFY_STOREFRONT_ACCESS_TOKEN")) {
            (Some(domain), Some(storefront_token)) => Some(ShopifyConfig { domain, storefront_token }),
            _ => None,
        };
        let stripe = match (env_opt("STRIPE_PUBLISHABLE_KEY"), env_opt("STRIPE_SECRET_KEY")) {
            (Some(publishable_key), Some(secret_key)) => Some(StripeConfig { publishable_key, secret_key }),
            _ => None,
        };
        let instagram = match (env_opt("INSTAGRAM_ACCESS_TOKEN"), env_opt("INSTAGRAM_USER_ID")) {
            (Some(access_token), Some(user_id)) => Some(InstagramConfig { access_token, user_id }),
            _ => None,
        };

        Self {
            port: env_opt("PORT").and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT),
            business,
            notify,
            shopify,
            stripe,
            instagram,
            analytics_id: env_opt("GA_TRACKING_ID"),
            chatbot_enabled: env_opt("CHATBOT_ENABLED").as_deref() != Some("false"),
            timeouts: HttpTimeouts {
                request_secs: env_parse_u64("HTTP_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
                connect_secs: env_parse_u64("HTTP_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
            },
        }
    }
}

impl Default for AppConfig {
    /// Fully unconfigured config: every collaborator in demo mode.
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            business: BusinessInfo::default(),
            notify: None,
            shopify: None,
            stripe: None,
            instagram: None,
            analytics_id: None,
            chatbot_enabled: true,
            timeouts: HttpTimeouts::default(),
        }
    }
}

/// Read an env var, treating empty/whitespace values as absent.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_owned())
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
