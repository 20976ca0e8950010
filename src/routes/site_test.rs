use axum::extract::State;
use axum::response::Json;
use async_trait::async_trait;

use super::*;
use crate::integrations::feed::{FeedError, FeedSource};
use crate::state::test_helpers::demo_state;

#[tokio::test]
async fn info_reports_business_identity_and_demo_flags() {
    let Json(info) = info(State(demo_state())).await;
    assert!(!info.name.is_empty());
    assert!(info.chatbot_enabled);
    assert!(info.demo.notifier);
    assert!(info.demo.commerce);
    assert!(info.demo.payments);
    assert!(info.demo.feed);
}

#[tokio::test]
async fn feed_serves_demo_posts_without_credentials() {
    let Json(posts) = feed(State(demo_state())).await;
    assert_eq!(posts.len(), 5);
}

struct BrokenFeed;

#[async_trait]
impl FeedSource for BrokenFeed {
    async fn list_recent_posts(&self) -> Result<Vec<FeedPost>, FeedError> {
        Err(FeedError::Request("connection reset".to_owned()))
    }
}

#[tokio::test]
async fn feed_falls_back_to_demo_posts_when_the_source_fails() {
    let mut state = demo_state();
    state.feed = std::sync::Arc::new(BrokenFeed);
    let Json(posts) = feed(State(state)).await;
    assert_eq!(posts.len(), 5);
}
