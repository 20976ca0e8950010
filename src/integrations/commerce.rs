//! Commerce collaborator: product listing and cart operations.
//!
//! The real implementation talks to the Shopify Storefront GraphQL API.
//! Response shaping lives in pure `parse_*` functions so the wire handling
//! is testable without a network. The demo variant serves a fixed product
//! pair and keeps carts in memory.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use uuid::Uuid;

use crate::config::{HttpTimeouts, ShopifyConfig};

const STOREFRONT_API_VERSION: &str = "2023-10";
const PRODUCTS_PAGE_SIZE: u32 = 10;

#[derive(Debug, Error)]
pub enum CommerceError {
    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(String),
    #[error("commerce request failed: {0}")]
    Request(String),
    #[error("commerce API returned {status}: {body}")]
    Response { status: u16, body: String },
    #[error("commerce response parse failed: {0}")]
    Parse(String),
    #[error("unknown cart: {0}")]
    UnknownCart(String),
    #[error("unknown variant: {0}")]
    UnknownVariant(String),
}

impl CommerceError {
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Response { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Variant {
    pub id: String,
    pub title: String,
    pub price: String,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub variants: Vec<Variant>,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineItem {
    pub id: String,
    pub quantity: u32,
    pub variant: Variant,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Cart {
    pub id: String,
    pub web_url: String,
    pub line_items: Vec<LineItem>,
    pub total_price: String,
}

#[async_trait]
pub trait Commerce: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, CommerceError>;
    async fn create_cart(&self) -> Result<Cart, CommerceError>;
    async fn add_line_item(
        &self,
        cart_id: &str,
        variant_id: &str,
        quantity: u32,
    ) -> Result<Cart, CommerceError>;

    fn is_demo(&self) -> bool {
        false
    }
}

// =============================================================================
// SHOPIFY
// =============================================================================

pub struct ShopifyCommerce {
    http: reqwest::Client,
    endpoint: String,
    storefront_token: String,
}

const PRODUCTS_QUERY: &str = r"
query getProducts($first: Int!) {
  products(first: $first) {
    edges {
      node {
        id
        title
        description
        priceRange { minVariantPrice { amount } }
        images(first: 1) { edges { node { url } } }
        variants(first: 10) {
          edges { node { id title price { amount } availableForSale } }
        }
        availableForSale
      }
    }
  }
}";

const CART_FIELDS: &str = r"
  cart {
    id
    checkoutUrl
    lines(first: 10) {
      edges {
        node {
          id
          quantity
          merchandise {
            ... on ProductVariant {
              id
              title
              price { amount }
              product { title }
            }
          }
        }
      }
    }
    cost { totalAmount { amount } }
  }";

impl ShopifyCommerce {
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn new(config: &ShopifyConfig, timeouts: &HttpTimeouts) -> Result<Self, CommerceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| CommerceError::HttpClientBuild(e.to_string()))?;
        let endpoint =
            format!("https://{}/api/{STOREFRONT_API_VERSION}/graphql.json", config.domain);
        Ok(Self { http, endpoint, storefront_token: config.storefront_token.clone() })
    }

    async fn graphql(&self, query: &str, variables: Value) -> Result<Value, CommerceError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("X-Shopify-Storefront-Access-Token", &self.storefront_token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|e| CommerceError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| CommerceError::Request(e.to_string()))?;
        if status != 200 {
            return Err(CommerceError::Response { status, body: text });
        }
        serde_json::from_str(&text).map_err(|e| CommerceError::Parse(e.to_string()))
    }
}

#[async_trait]
impl Commerce for ShopifyCommerce {
    async fn list_products(&self) -> Result<Vec<Product>, CommerceError> {
        let body =
            self.graphql(PRODUCTS_QUERY, json!({ "first": PRODUCTS_PAGE_SIZE })).await?;
        parse_products(&body)
    }

    async fn create_cart(&self) -> Result<Cart, CommerceError> {
        let query = format!(
            "mutation cartCreate($input: CartInput!) {{ cartCreate(input: $input) {{ {CART_FIELDS} }} }}"
        );
        let body = self.graphql(&query, json!({ "input": {} })).await?;
        parse_cart(&body["data"]["cartCreate"]["cart"])
    }

    async fn add_line_item(
        &self,
        cart_id: &str,
        variant_id: &str,
        quantity: u32,
    ) -> Result<Cart, CommerceError> {
        let query = format!(
            "mutation cartLinesAdd($cartId: ID!, $lines: [CartLineInput!]!) {{ cartLinesAdd(cartId: $cartId, lines: $lines) {{ {CART_FIELDS} }} }}"
        );
        let variables = json!({
            "cartId": cart_id,
            "lines": [{ "merchandiseId": variant_id, "quantity": quantity }],
        });
        let body = self.graphql(&query, variables).await?;
        parse_cart(&body["data"]["cartLinesAdd"]["cart"])
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn str_at(value: &Value, context: &str) -> Result<String, CommerceError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| CommerceError::Parse(format!("missing {context}")))
}

fn parse_products(body: &Value) -> Result<Vec<Product>, CommerceError> {
    let edges = body["data"]["products"]["edges"]
        .as_array()
        .ok_or_else(|| CommerceError::Parse("missing products.edges".to_owned()))?;

    edges
        .iter()
        .map(|edge| {
            let node = &edge["node"];
            let variants = node["variants"]["edges"]
                .as_array()
                .map(|vs| {
                    vs.iter()
                        .map(|v| {
                            let v = &v["node"];
                            Ok(Variant {
                                id: str_at(&v["id"], "variant id")?,
                                title: str_at(&v["title"], "variant title")?,
                                price: format!("${}", str_at(&v["price"]["amount"], "variant price")?),
                                available: v["availableForSale"].as_bool().unwrap_or(false),
                            })
                        })
                        .collect::<Result<Vec<_>, CommerceError>>()
                })
                .transpose()?
                .unwrap_or_default();

            Ok(Product {
                id: str_at(&node["id"], "product id")?,
                title: str_at(&node["title"], "product title")?,
                description: node["description"].as_str().unwrap_or("").to_owned(),
                price: format!(
                    "${}",
                    str_at(&node["priceRange"]["minVariantPrice"]["amount"], "product price")?
                ),
                image: node["images"]["edges"][0]["node"]["url"]
                    .as_str()
                    .unwrap_or("/images/products/placeholder.jpg")
                    .to_owned(),
                variants,
                available: node["availableForSale"].as_bool().unwrap_or(false),
            })
        })
        .collect()
}

fn parse_cart(cart: &Value) -> Result<Cart, CommerceError> {
    let line_items = cart["lines"]["edges"]
        .as_array()
        .map(|edges| {
            edges
                .iter()
                .map(|edge| {
                    let node = &edge["node"];
                    let merch = &node["merchandise"];
                    Ok(LineItem {
                        id: str_at(&node["id"], "line id")?,
                        quantity: u32::try_from(node["quantity"].as_u64().unwrap_or(0))
                            .map_err(|_| CommerceError::Parse("line quantity".to_owned()))?,
                        variant: Variant {
                            id: str_at(&merch["id"], "merchandise id")?,
                            title: str_at(&merch["title"], "merchandise title")?,
                            price: format!(
                                "${}",
                                str_at(&merch["price"]["amount"], "merchandise price")?
                            ),
                            available: true,
                        },
                        title: str_at(&merch["product"]["title"], "product title")?,
                    })
                })
                .collect::<Result<Vec<_>, CommerceError>>()
        })
        .transpose()?
        .unwrap_or_default();

    Ok(Cart {
        id: str_at(&cart["id"], "cart id")?,
        web_url: cart["checkoutUrl"].as_str().unwrap_or("").to_owned(),
        line_items,
        total_price: format!("${}", str_at(&cart["cost"]["totalAmount"]["amount"], "cart total")?),
    })
}

// =============================================================================
// DEMO
// =============================================================================

/// In-memory stand-in used when Shopify credentials are absent. Serves a
/// fixed catalog and tracks carts locally.
pub struct DemoCommerce {
    carts: Mutex<HashMap<String, Vec<LineItem>>>,
}

impl DemoCommerce {
    #[must_use]
    pub fn new() -> Self {
        Self { carts: Mutex::new(HashMap::new()) }
    }

    fn demo_products() -> Vec<Product> {
        vec![
            Product {
                id: "1".to_owned(),
                title: "Premium Hair Care Set".to_owned(),
                description: "Complete hair care routine with premium products".to_owned(),
                price: "$89.99".to_owned(),
                image: "/images/products/hair-care-set.jpg".to_owned(),
                variants: vec![Variant {
                    id: "1".to_owned(),
                    title: "Default".to_owned(),
                    price: "$89.99".to_owned(),
                    available: true,
                }],
                available: true,
            },
            Product {
                id: "2".to_owned(),
                title: "Styling Tools Collection".to_owned(),
                description: "Professional styling tools for perfect results".to_owned(),
                price: "$149.99".to_owned(),
                image: "/images/products/styling-tools.jpg".to_owned(),
                variants: vec![Variant {
                    id: "2".to_owned(),
                    title: "Default".to_owned(),
                    price: "$149.99".to_owned(),
                    available: true,
                }],
                available: true,
            },
        ]
    }

    fn find_variant(variant_id: &str) -> Option<(Product, Variant)> {
        Self::demo_products().into_iter().find_map(|p| {
            p.variants.iter().find(|v| v.id == variant_id).cloned().map(|v| (p.clone(), v))
        })
    }

    fn assemble(id: &str, lines: &[LineItem]) -> Cart {
        let total: f64 = lines
            .iter()
            .map(|l| {
                let unit: f64 = l.variant.price.trim_start_matches('$').parse().unwrap_or(0.0);
                unit * f64::from(l.quantity)
            })
            .sum();
        Cart {
            id: id.to_owned(),
            web_url: "/shop?checkout=demo".to_owned(),
            line_items: lines.to_vec(),
            total_price: format!("${total:.2}"),
        }
    }

    fn locked(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<LineItem>>> {
        match self.carts.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for DemoCommerce {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Commerce for DemoCommerce {
    async fn list_products(&self) -> Result<Vec<Product>, CommerceError> {
        Ok(Self::demo_products())
    }

    async fn create_cart(&self) -> Result<Cart, CommerceError> {
        let id = format!("demo_cart_{}", Uuid::new_v4());
        self.locked().insert(id.clone(), Vec::new());
        Ok(Self::assemble(&id, &[]))
    }

    async fn add_line_item(
        &self,
        cart_id: &str,
        variant_id: &str,
        quantity: u32,
    ) -> Result<Cart, CommerceError> {
        let (product, variant) = Self::find_variant(variant_id)
            .ok_or_else(|| CommerceError::UnknownVariant(variant_id.to_owned()))?;

        let mut carts = self.locked();
        let lines = carts
            .get_mut(cart_id)
            .ok_or_else(|| CommerceError::UnknownCart(cart_id.to_owned()))?;

        if let Some(existing) = lines.iter_mut().find(|l| l.variant.id == variant_id) {
            existing.quantity += quantity;
        } else {
            lines.push(LineItem {
                id: format!("line_{}", Uuid::new_v4()),
                quantity,
                variant,
                title: product.title,
            });
        }
        Ok(Self::assemble(cart_id, lines))
    }

    fn is_demo(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[path = "commerce_test.rs"]
mod tests;
