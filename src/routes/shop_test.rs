use axum::extract::{Path, State};
use axum::response::Json;

use super::*;
use crate::state::test_helpers::demo_state;

#[tokio::test]
async fn products_come_from_the_demo_catalog() {
    let Json(products) = products(State(demo_state())).await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].title, "Premium Hair Care Set");
}

#[tokio::test]
async fn cart_flow_adds_lines() {
    let state = demo_state();
    let Json(cart) = create_cart(State(state.clone())).await.unwrap();

    let Json(cart) = add_line(
        State(state.clone()),
        Path(cart.id),
        Json(AddLineBody { variant_id: "2".to_owned(), quantity: 1 }),
    )
    .await
    .unwrap();
    assert_eq!(cart.line_items.len(), 1);
    assert_eq!(cart.total_price, "$149.99");
}

#[tokio::test]
async fn add_line_validates_quantity_and_cart() {
    let state = demo_state();
    let Json(cart) = create_cart(State(state.clone())).await.unwrap();

    let zero = add_line(
        State(state.clone()),
        Path(cart.id),
        Json(AddLineBody { variant_id: "1".to_owned(), quantity: 0 }),
    )
    .await;
    assert!(matches!(zero, Err(ApiError::BadRequest(_))));

    let missing = add_line(
        State(state),
        Path("nope".to_owned()),
        Json(AddLineBody { variant_id: "1".to_owned(), quantity: 1 }),
    )
    .await;
    assert!(matches!(missing, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn checkout_requires_items_and_returns_demo_session() {
    let state = demo_state();
    let empty = create_checkout(
        State(state.clone()),
        Json(CheckoutBody {
            items: vec![],
            success_url: "https://salon.example/success".to_owned(),
            cancel_url: "https://salon.example/shop".to_owned(),
            customer_email: None,
            mode: CheckoutMode::Payment,
        }),
    )
    .await;
    assert!(matches!(empty, Err(ApiError::BadRequest(_))));

    let Json(session) = create_checkout(
        State(state.clone()),
        Json(CheckoutBody {
            items: vec![CheckoutItem { price_id: "price_1".to_owned(), quantity: 1 }],
            success_url: "https://salon.example/success".to_owned(),
            cancel_url: "https://salon.example/shop".to_owned(),
            customer_email: None,
            mode: CheckoutMode::Payment,
        }),
    )
    .await
    .unwrap();
    assert!(session.id.starts_with("cs_demo_"));
    assert_eq!(session.status, "open");

    let Json(retrieved) = get_checkout(State(state), Path(session.id.clone())).await.unwrap();
    assert_eq!(retrieved.id, session.id);
    assert_eq!(retrieved.status, "complete");
}
