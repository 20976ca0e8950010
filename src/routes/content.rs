//! Content browsing routes: blog, portfolio, services.
//!
//! All three share the same query shape and the same filter/paginate
//! utility; only the backing collection and category definitions differ.

use axum::extract::Query;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::services::catalog::{
    category_chips, filter_page, Browsable, BrowseState, CategoryChip, BLOG_CATEGORIES, BLOG_POSTS,
    PAGE_SIZE, PORTFOLIO_CATEGORIES, PORTFOLIO_ITEMS, SERVICES, SERVICE_CATEGORIES,
};

#[derive(Deserialize)]
pub struct BrowseQuery {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_category() -> String {
    "all".to_owned()
}

fn default_page() -> usize {
    1
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseResponse {
    pub items: Value,
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
    pub categories: Vec<CategoryChip>,
}

fn browse<T: Browsable + Serialize>(
    items: &[T],
    defs: &[(&'static str, &'static str)],
    query: &BrowseQuery,
) -> BrowseResponse {
    // Replay the query onto a fresh browse state so page normalization
    // matches what a stateful client would see.
    let mut state = BrowseState::new();
    state.set_category(&query.category);
    state.set_search(&query.search);
    state.set_page(query.page);
    let result = filter_page(items, &state.category, &state.search, state.page, PAGE_SIZE);
    BrowseResponse {
        items: json!(result.items),
        total: result.total,
        page: result.page,
        page_count: result.page_count,
        categories: category_chips(items, defs),
    }
}

/// `GET /api/blog` — filtered, paginated blog posts.
pub async fn blog(Query(query): Query<BrowseQuery>) -> Json<BrowseResponse> {
    Json(browse(&BLOG_POSTS, &BLOG_CATEGORIES, &query))
}

/// `GET /api/portfolio` — filtered, paginated portfolio entries.
pub async fn portfolio(Query(query): Query<BrowseQuery>) -> Json<BrowseResponse> {
    Json(browse(&PORTFOLIO_ITEMS, &PORTFOLIO_CATEGORIES, &query))
}

/// `GET /api/services` — filtered, paginated services.
pub async fn services(Query(query): Query<BrowseQuery>) -> Json<BrowseResponse> {
    Json(browse(&SERVICES, &SERVICE_CATEGORIES, &query))
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
