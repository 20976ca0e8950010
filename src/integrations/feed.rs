//! Social feed collaborator: recent Instagram posts.
//!
//! The real source queries the Instagram Graph API media endpoint. Missing
//! credentials select the demo variant; the route additionally falls back to
//! the demo posts when a live fetch fails, so the carousel never renders
//! empty.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::{HttpTimeouts, InstagramConfig};

const GRAPH_BASE_URL: &str = "https://graph.instagram.com";
const MEDIA_FIELDS: &str =
    "id,media_type,media_url,thumbnail_url,caption,permalink,timestamp,like_count,comments_count";
const MEDIA_LIMIT: u32 = 10;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(String),
    #[error("feed request failed: {0}")]
    Request(String),
    #[error("feed API returned {status}: {body}")]
    Response { status: u16, body: String },
    #[error("feed response parse failed: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Carousel,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedPost {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub media_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub caption: String,
    pub permalink: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub like_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments_count: Option<u32>,
}

#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn list_recent_posts(&self) -> Result<Vec<FeedPost>, FeedError>;

    fn is_demo(&self) -> bool {
        false
    }
}

// =============================================================================
// INSTAGRAM GRAPH
// =============================================================================

pub struct InstagramFeed {
    http: reqwest::Client,
    access_token: String,
    user_id: String,
}

impl InstagramFeed {
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn new(config: &InstagramConfig, timeouts: &HttpTimeouts) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| FeedError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, access_token: config.access_token.clone(), user_id: config.user_id.clone() })
    }
}

#[async_trait]
impl FeedSource for InstagramFeed {
    async fn list_recent_posts(&self) -> Result<Vec<FeedPost>, FeedError> {
        let url = format!("{GRAPH_BASE_URL}/{}/media", self.user_id);
        let response = self
            .http
            .get(url)
            .query(&[
                ("fields", MEDIA_FIELDS),
                ("access_token", &self.access_token),
                ("limit", &MEDIA_LIMIT.to_string()),
            ])
            .send()
            .await
            .map_err(|e| FeedError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| FeedError::Request(e.to_string()))?;
        if status != 200 {
            return Err(FeedError::Response { status, body: text });
        }
        parse_media(&text)
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn media_type(raw: &str) -> MediaType {
    match raw {
        "VIDEO" => MediaType::Video,
        "CAROUSEL_ALBUM" => MediaType::Carousel,
        _ => MediaType::Image,
    }
}

fn parse_media(json: &str) -> Result<Vec<FeedPost>, FeedError> {
    let body: Value = serde_json::from_str(json).map_err(|e| FeedError::Parse(e.to_string()))?;
    let data = body["data"].as_array().ok_or_else(|| FeedError::Parse("missing data".to_owned()))?;

    data.iter()
        .map(|post| {
            let id = post["id"]
                .as_str()
                .ok_or_else(|| FeedError::Parse("missing media id".to_owned()))?
                .to_owned();
            Ok(FeedPost {
                id,
                media_type: media_type(post["media_type"].as_str().unwrap_or("IMAGE")),
                media_url: post["media_url"].as_str().unwrap_or("").to_owned(),
                thumbnail_url: post["thumbnail_url"].as_str().map(str::to_owned),
                caption: post["caption"].as_str().unwrap_or("").to_owned(),
                permalink: post["permalink"].as_str().unwrap_or("").to_owned(),
                timestamp: post["timestamp"].as_str().unwrap_or("").to_owned(),
                like_count: post["like_count"].as_u64().and_then(|v| u32::try_from(v).ok()),
                comments_count: post["comments_count"].as_u64().and_then(|v| u32::try_from(v).ok()),
            })
        })
        .collect()
}

// =============================================================================
// DEMO
// =============================================================================

pub struct DemoFeed;

#[must_use]
pub fn demo_posts() -> Vec<FeedPost> {
    let now = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default();
    let post = |id: &str, media_type, media_url: &str, caption: &str, likes, comments| FeedPost {
        id: id.to_owned(),
        media_type,
        media_url: media_url.to_owned(),
        thumbnail_url: None,
        caption: caption.to_owned(),
        permalink: format!("https://instagram.com/p/example{id}"),
        timestamp: now.clone(),
        like_count: Some(likes),
        comments_count: Some(comments),
    };
    vec![
        post(
            "1",
            MediaType::Video,
            "/images/instagram/transformation1.jpg",
            "\u{2728} Another stunning transformation! From dull to dazzling \u{2728} #HairTransformation",
            245,
            18,
        ),
        post(
            "2",
            MediaType::Image,
            "/images/instagram/style2.jpg",
            "\u{1f4ab} Loving this gorgeous balayage! Perfect for the fall season \u{1f342} #Balayage #HairGoals",
            189,
            12,
        ),
        post(
            "3",
            MediaType::Carousel,
            "/images/instagram/before-after.jpg",
            "\u{1f525} Before & After magic! Swipe to see the incredible transformation \u{27a1}\u{fe0f} #BeforeAndAfter",
            312,
            24,
        ),
        post(
            "4",
            MediaType::Video,
            "/images/instagram/technique.jpg",
            "\u{1f3a5} Behind the scenes: Watch the technique that creates these stunning curls! #HairTutorial",
            156,
            8,
        ),
        post(
            "5",
            MediaType::Image,
            "/images/instagram/client-love.jpg",
            "\u{2764}\u{fe0f} Client love! Nothing makes us happier than seeing our clients glow with confidence \u{2728}",
            201,
            15,
        ),
    ]
}

#[async_trait]
impl FeedSource for DemoFeed {
    async fn list_recent_posts(&self) -> Result<Vec<FeedPost>, FeedError> {
        Ok(demo_posts())
    }

    fn is_demo(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;
