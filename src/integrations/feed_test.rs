use super::*;

#[test]
fn parse_media_maps_graph_fields() {
    let json = r#"{
        "data": [
            {
                "id": "17900001",
                "media_type": "VIDEO",
                "media_url": "https://cdn.example/v.mp4",
                "thumbnail_url": "https://cdn.example/t.jpg",
                "caption": "New reel",
                "permalink": "https://instagram.com/p/abc",
                "timestamp": "2026-08-01T12:00:00+0000",
                "like_count": 42,
                "comments_count": 3
            },
            {
                "id": "17900002",
                "media_type": "CAROUSEL_ALBUM",
                "media_url": "https://cdn.example/c.jpg",
                "permalink": "https://instagram.com/p/def",
                "timestamp": "2026-08-02T12:00:00+0000"
            }
        ]
    }"#;

    let posts = parse_media(json).unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].media_type, MediaType::Video);
    assert_eq!(posts[0].thumbnail_url.as_deref(), Some("https://cdn.example/t.jpg"));
    assert_eq!(posts[0].like_count, Some(42));
    assert_eq!(posts[1].media_type, MediaType::Carousel);
    // Absent caption and counts degrade rather than fail.
    assert_eq!(posts[1].caption, "");
    assert_eq!(posts[1].like_count, None);
}

#[test]
fn unknown_media_type_defaults_to_image() {
    let json = r#"{"data":[{"id":"1","media_type":"SOMETHING_NEW","permalink":"","timestamp":""}]}"#;
    let posts = parse_media(json).unwrap();
    assert_eq!(posts[0].media_type, MediaType::Image);
}

#[test]
fn parse_media_rejects_malformed_body() {
    assert!(matches!(parse_media("{}"), Err(FeedError::Parse(_))));
    assert!(matches!(parse_media(r#"{"data":[{}]}"#), Err(FeedError::Parse(_))));
}

#[tokio::test]
async fn demo_feed_serves_five_posts() {
    let feed = DemoFeed;
    assert!(feed.is_demo());
    let posts = feed.list_recent_posts().await.unwrap();
    assert_eq!(posts.len(), 5);
    assert!(posts.iter().all(|p| !p.permalink.is_empty()));
    assert!(posts.iter().any(|p| p.media_type == MediaType::Carousel));
}
