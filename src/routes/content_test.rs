use axum::extract::Query;
use axum::response::Json;

use super::*;

fn query(category: &str, search: &str, page: usize) -> BrowseQuery {
    BrowseQuery { category: category.to_owned(), search: search.to_owned(), page }
}

#[tokio::test]
async fn blog_defaults_to_first_page_of_all_posts() {
    let Json(response) = blog(Query(query("all", "", 1))).await;
    assert_eq!(response.total, 9);
    assert_eq!(response.page_count, 2);
    assert_eq!(response.items.as_array().map(Vec::len), Some(6));
    let all = response.categories.iter().find(|c| c.id == "all").map(|c| c.count);
    assert_eq!(all, Some(9));
}

#[tokio::test]
async fn blog_search_narrows_and_page_clamps() {
    let Json(response) = blog(Query(query("all", "winter", 99))).await;
    assert_eq!(response.total, 1);
    assert_eq!(response.page, 1);
}

#[tokio::test]
async fn portfolio_filters_by_category() {
    let Json(response) = portfolio(Query(query("coloring", "", 1))).await;
    assert_eq!(response.total, 4);
    let chip = response.categories.iter().find(|c| c.id == "coloring").map(|c| c.count);
    assert_eq!(chip, Some(4));
}

#[tokio::test]
async fn services_listing_includes_all_six() {
    let Json(response) = services(Query(query("all", "", 1))).await;
    assert_eq!(response.total, 6);
    assert_eq!(response.page_count, 1);
}
