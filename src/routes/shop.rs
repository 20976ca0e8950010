//! Shop routes: products, cart, checkout.
//!
//! Thin delegation to the commerce and payment collaborators. Collaborator
//! failures surface as retryable 502s; the demo variants make every route
//! fully functional without credentials.

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Deserialize;

use crate::integrations::commerce::{Cart, CommerceError, Product};
use crate::integrations::payments::{
    CheckoutItem, CheckoutMode, CheckoutRequest, CheckoutSession, PaymentError,
};
use crate::routes::ApiError;
use crate::state::AppState;

fn commerce_error(e: &CommerceError) -> ApiError {
    match e {
        CommerceError::UnknownCart(_) => ApiError::NotFound("cart"),
        CommerceError::UnknownVariant(_) => ApiError::NotFound("variant"),
        other => ApiError::Collaborator {
            message: "Shop is temporarily unavailable".to_owned(),
            retryable: other.retryable(),
        },
    }
}

fn payment_error(e: &PaymentError) -> ApiError {
    ApiError::Collaborator {
        message: "Checkout is temporarily unavailable".to_owned(),
        retryable: e.retryable(),
    }
}

/// `GET /api/shop/products` — product listing.
pub async fn products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.commerce.list_products().await.map_err(|e| commerce_error(&e))?;
    Ok(Json(products))
}

/// `POST /api/shop/cart` — create an empty cart.
pub async fn create_cart(State(state): State<AppState>) -> Result<Json<Cart>, ApiError> {
    let cart = state.commerce.create_cart().await.map_err(|e| commerce_error(&e))?;
    Ok(Json(cart))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLineBody {
    pub variant_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// `POST /api/shop/cart/{id}/lines` — add a variant to the cart.
pub async fn add_line(
    State(state): State<AppState>,
    Path(cart_id): Path<String>,
    Json(body): Json<AddLineBody>,
) -> Result<Json<Cart>, ApiError> {
    if body.quantity == 0 {
        return Err(ApiError::BadRequest("quantity must be at least 1".to_owned()));
    }
    let cart = state
        .commerce
        .add_line_item(&cart_id, &body.variant_id, body.quantity)
        .await
        .map_err(|e| commerce_error(&e))?;
    Ok(Json(cart))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutBody {
    pub items: Vec<CheckoutItem>,
    pub success_url: String,
    pub cancel_url: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default = "default_mode")]
    pub mode: CheckoutMode,
}

fn default_mode() -> CheckoutMode {
    CheckoutMode::Payment
}

/// `POST /api/shop/checkout` — create a payment checkout session.
pub async fn create_checkout(
    State(state): State<AppState>,
    Json(body): Json<CheckoutBody>,
) -> Result<Json<CheckoutSession>, ApiError> {
    if body.items.is_empty() {
        return Err(ApiError::BadRequest("checkout requires at least one item".to_owned()));
    }
    let request = CheckoutRequest {
        items: body.items,
        success_url: body.success_url,
        cancel_url: body.cancel_url,
        customer_email: body.customer_email,
        mode: body.mode,
    };
    let session =
        state.payments.create_checkout_session(&request).await.map_err(|e| payment_error(&e))?;
    Ok(Json(session))
}

/// `GET /api/shop/checkout/{id}` — checkout session status.
pub async fn get_checkout(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<CheckoutSession>, ApiError> {
    let session = state
        .payments
        .retrieve_checkout_session(&session_id)
        .await
        .map_err(|e| payment_error(&e))?;
    Ok(Json(session))
}

#[cfg(test)]
#[path = "shop_test.rs"]
mod tests;
