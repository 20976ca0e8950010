use super::*;

fn request() -> CheckoutRequest {
    CheckoutRequest {
        items: vec![
            CheckoutItem { price_id: "price_abc".to_owned(), quantity: 2 },
            CheckoutItem { price_id: "price_def".to_owned(), quantity: 1 },
        ],
        success_url: "https://salon.example/shop/success".to_owned(),
        cancel_url: "https://salon.example/shop".to_owned(),
        customer_email: Some("jane@example.com".to_owned()),
        mode: CheckoutMode::Payment,
    }
}

#[test]
fn checkout_form_encodes_indexed_line_items() {
    let form = checkout_form(&request());
    assert!(form.contains(&("mode".to_owned(), "payment".to_owned())));
    assert!(form.contains(&("line_items[0][price]".to_owned(), "price_abc".to_owned())));
    assert!(form.contains(&("line_items[0][quantity]".to_owned(), "2".to_owned())));
    assert!(form.contains(&("line_items[1][price]".to_owned(), "price_def".to_owned())));
    assert!(form.contains(&("customer_email".to_owned(), "jane@example.com".to_owned())));
}

#[test]
fn checkout_form_omits_absent_email() {
    let form = checkout_form(&CheckoutRequest { customer_email: None, ..request() });
    assert!(!form.iter().any(|(k, _)| k == "customer_email"));
}

#[test]
fn parse_session_reads_id_url_and_status() {
    let session = parse_session(
        r#"{"id":"cs_test_1","url":"https://checkout.stripe.com/c/pay/cs_test_1","status":"open"}"#,
    )
    .unwrap();
    assert_eq!(session.id, "cs_test_1");
    assert_eq!(session.status, "open");
    assert!(session.url.is_some());

    // Completed sessions come back with a null url.
    let done = parse_session(r#"{"id":"cs_test_1","url":null,"status":"complete"}"#).unwrap();
    assert!(done.url.is_none());
}

#[test]
fn parse_session_rejects_malformed_body() {
    assert!(matches!(parse_session("{}"), Err(PaymentError::Parse(_))));
    assert!(matches!(parse_session("not json"), Err(PaymentError::Parse(_))));
}

#[tokio::test]
async fn demo_gateway_returns_placeholder_session() {
    let gateway = DemoGateway;
    assert!(gateway.is_demo());
    let session = gateway.create_checkout_session(&request()).await.unwrap();
    assert!(session.id.starts_with("cs_demo_"));
    assert_eq!(session.status, "open");
    assert_eq!(
        session.url.as_deref(),
        Some("https://salon.example/shop/success?session_id=demo")
    );

    let retrieved = gateway.retrieve_checkout_session(&session.id).await.unwrap();
    assert_eq!(retrieved.status, "complete");
}
