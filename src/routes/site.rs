//! Site metadata and social feed routes.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::integrations::feed::{demo_posts, FeedPost};
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub instagram_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<String>,
    pub chatbot_enabled: bool,
    pub demo: DemoFlags,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoFlags {
    pub notifier: bool,
    pub commerce: bool,
    pub payments: bool,
    pub feed: bool,
}

/// `GET /api/site/info` — business identity and collaborator modes.
pub async fn info(State(state): State<AppState>) -> Json<SiteInfo> {
    let biz = &state.config.business;
    Json(SiteInfo {
        name: biz.name.clone(),
        phone: biz.phone.clone(),
        email: biz.email.clone(),
        address: biz.address.clone(),
        instagram_url: biz.instagram_url.clone(),
        analytics_id: state.config.analytics_id.clone(),
        chatbot_enabled: state.config.chatbot_enabled,
        demo: DemoFlags {
            notifier: state.notifier.is_demo(),
            commerce: state.commerce.is_demo(),
            payments: state.payments.is_demo(),
            feed: state.feed.is_demo(),
        },
    })
}

/// `GET /api/feed` — recent social posts. A failed live fetch falls back to
/// the demo posts so the carousel never renders empty.
pub async fn feed(State(state): State<AppState>) -> Json<Vec<FeedPost>> {
    match state.feed.list_recent_posts().await {
        Ok(posts) if !posts.is_empty() => Json(posts),
        Ok(_) => Json(demo_posts()),
        Err(e) => {
            tracing::warn!(error = %e, "feed fetch failed, serving demo posts");
            Json(demo_posts())
        }
    }
}

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;
