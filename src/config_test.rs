use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_salon_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BUSINESS_NAME");
        std::env::remove_var("BUSINESS_PHONE");
        std::env::remove_var("BUSINESS_EMAIL");
        std::env::remove_var("BUSINESS_ADDRESS");
        std::env::remove_var("BUSINESS_INSTAGRAM_URL");
        std::env::remove_var("RESEND_API_KEY");
        std::env::remove_var("RESEND_FROM_EMAIL");
        std::env::remove_var("SHOPIFY_DOMAIN");
        std::env::remove_var("SHOPIFY_STOREFRONT_ACCESS_TOKEN");
        std::env::remove_var("STRIPE_PUBLISHABLE_KEY");
        std::env::remove_var("STRIPE_SECRET_KEY");
        std::env::remove_var("INSTAGRAM_ACCESS_TOKEN");
        std::env::remove_var("INSTAGRAM_USER_ID");
        std::env::remove_var("GA_TRACKING_ID");
        std::env::remove_var("CHATBOT_ENABLED");
        std::env::remove_var("HTTP_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("HTTP_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn default_config_runs_every_collaborator_in_demo_mode() {
    let cfg = AppConfig::default();
    assert!(cfg.notify.is_none());
    assert!(cfg.shopify.is_none());
    assert!(cfg.stripe.is_none());
    assert!(cfg.instagram.is_none());
    assert!(cfg.analytics_id.is_none());
    assert!(cfg.chatbot_enabled);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.timeouts, HttpTimeouts::default());
}

#[test]
fn from_env_with_no_vars_matches_defaults() {
    unsafe { clear_salon_env() };

    let cfg = AppConfig::from_env();
    assert!(cfg.notify.is_none());
    assert!(cfg.shopify.is_none());
    assert!(cfg.stripe.is_none());
    assert!(cfg.instagram.is_none());
    assert!(cfg.chatbot_enabled);
    assert_eq!(cfg.business.name, BusinessInfo::default().name);
}

#[test]
fn from_env_needs_both_halves_of_a_credential_pair() {
    unsafe {
        clear_salon_env();
        std::env::set_var("RESEND_API_KEY", "re_test");
        std::env::set_var("SHOPIFY_DOMAIN", "demo.myshopify.com");
        std::env::set_var("SHOPIFY_STOREFRONT_ACCESS_TOKEN", "token");
    }

    let cfg = AppConfig::from_env();
    // API key without a from-address is not enough.
    assert!(cfg.notify.is_none());
    let shopify = cfg.shopify.expect("both shopify vars set");
    assert_eq!(shopify.domain, "demo.myshopify.com");

    unsafe { clear_salon_env() };
}

#[test]
fn from_env_reads_business_and_flags() {
    unsafe {
        clear_salon_env();
        std::env::set_var("BUSINESS_PHONE", "+1 (212) 555-0100");
        std::env::set_var("CHATBOT_ENABLED", "false");
        std::env::set_var("GA_TRACKING_ID", "G-TEST123");
        std::env::set_var("HTTP_REQUEST_TIMEOUT_SECS", "42");
    }

    let cfg = AppConfig::from_env();
    assert_eq!(cfg.business.phone, "+1 (212) 555-0100");
    assert!(!cfg.chatbot_enabled);
    assert_eq!(cfg.analytics_id.as_deref(), Some("G-TEST123"));
    assert_eq!(cfg.timeouts.request_secs, 42);
    assert_eq!(cfg.timeouts.connect_secs, DEFAULT_CONNECT_TIMEOUT_SECS);

    unsafe { clear_salon_env() };
}

#[test]
fn blank_env_values_are_treated_as_absent() {
    unsafe {
        clear_salon_env();
        std::env::set_var("GA_TRACKING_ID", "   ");
    }

    let cfg = AppConfig::from_env();
    assert!(cfg.analytics_id.is_none());

    unsafe { clear_salon_env() };
}
