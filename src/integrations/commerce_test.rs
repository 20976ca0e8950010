use super::*;

#[test]
fn parse_products_shapes_the_graphql_response() {
    let body = serde_json::json!({
        "data": { "products": { "edges": [ { "node": {
            "id": "gid://shopify/Product/1",
            "title": "Argan Oil Serum",
            "description": "Lightweight finishing serum",
            "priceRange": { "minVariantPrice": { "amount": "34.00" } },
            "images": { "edges": [ { "node": { "url": "https://cdn.example/serum.jpg" } } ] },
            "variants": { "edges": [ { "node": {
                "id": "gid://shopify/ProductVariant/11",
                "title": "50ml",
                "price": { "amount": "34.00" },
                "availableForSale": true
            } } ] },
            "availableForSale": true
        } } ] } }
    });

    let products = parse_products(&body).unwrap();
    assert_eq!(products.len(), 1);
    let p = &products[0];
    assert_eq!(p.title, "Argan Oil Serum");
    assert_eq!(p.price, "$34.00");
    assert_eq!(p.image, "https://cdn.example/serum.jpg");
    assert_eq!(p.variants[0].price, "$34.00");
    assert!(p.available);
}

#[test]
fn parse_products_falls_back_to_placeholder_image() {
    let body = serde_json::json!({
        "data": { "products": { "edges": [ { "node": {
            "id": "gid://shopify/Product/2",
            "title": "Gift Card",
            "description": "",
            "priceRange": { "minVariantPrice": { "amount": "25.00" } },
            "images": { "edges": [] },
            "variants": { "edges": [] },
            "availableForSale": true
        } } ] } }
    });

    let products = parse_products(&body).unwrap();
    assert_eq!(products[0].image, "/images/products/placeholder.jpg");
    assert!(products[0].variants.is_empty());
}

#[test]
fn parse_products_rejects_malformed_body() {
    let body = serde_json::json!({ "data": {} });
    assert!(matches!(parse_products(&body), Err(CommerceError::Parse(_))));
}

#[test]
fn parse_cart_extracts_lines_and_total() {
    let cart = serde_json::json!({
        "id": "gid://shopify/Cart/abc",
        "checkoutUrl": "https://shop.example/cart/abc",
        "lines": { "edges": [ { "node": {
            "id": "gid://shopify/CartLine/1",
            "quantity": 2,
            "merchandise": {
                "id": "gid://shopify/ProductVariant/11",
                "title": "50ml",
                "price": { "amount": "34.00" },
                "product": { "title": "Argan Oil Serum" }
            }
        } } ] },
        "cost": { "totalAmount": { "amount": "68.00" } }
    });

    let parsed = parse_cart(&cart).unwrap();
    assert_eq!(parsed.id, "gid://shopify/Cart/abc");
    assert_eq!(parsed.total_price, "$68.00");
    assert_eq!(parsed.line_items.len(), 1);
    assert_eq!(parsed.line_items[0].quantity, 2);
    assert_eq!(parsed.line_items[0].title, "Argan Oil Serum");
}

#[tokio::test]
async fn demo_commerce_serves_fixed_catalog() {
    let commerce = DemoCommerce::new();
    assert!(commerce.is_demo());
    let products = commerce.list_products().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].price, "$89.99");
    assert_eq!(products[1].price, "$149.99");
}

#[tokio::test]
async fn demo_cart_accumulates_lines_and_totals() {
    let commerce = DemoCommerce::new();
    let cart = commerce.create_cart().await.unwrap();
    assert!(cart.line_items.is_empty());
    assert_eq!(cart.total_price, "$0.00");

    let cart = commerce.add_line_item(&cart.id, "1", 2).await.unwrap();
    assert_eq!(cart.line_items.len(), 1);
    assert_eq!(cart.total_price, "$179.98");

    // Same variant again merges into the existing line.
    let cart = commerce.add_line_item(&cart.id, "1", 1).await.unwrap();
    assert_eq!(cart.line_items.len(), 1);
    assert_eq!(cart.line_items[0].quantity, 3);

    let cart = commerce.add_line_item(&cart.id, "2", 1).await.unwrap();
    assert_eq!(cart.line_items.len(), 2);
    assert_eq!(cart.total_price, "$419.96");
}

#[tokio::test]
async fn demo_cart_rejects_unknown_ids() {
    let commerce = DemoCommerce::new();
    let cart = commerce.create_cart().await.unwrap();
    assert!(matches!(
        commerce.add_line_item("missing", "1", 1).await,
        Err(CommerceError::UnknownCart(_))
    ));
    assert!(matches!(
        commerce.add_line_item(&cart.id, "99", 1).await,
        Err(CommerceError::UnknownVariant(_))
    ));
}
