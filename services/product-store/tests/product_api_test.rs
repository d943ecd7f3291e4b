//! 商品 HTTP API 集成测试
//!
//! 在进程内通过 `oneshot` 驱动路由，不绑定端口

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use product_store::api::product_routes;
use product_store::application::ServiceHandler;
use product_store::domain::entities::Product;
use product_store::infrastructure::persistence::{InMemoryProductRepository, seed_products};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let repo = Arc::new(InMemoryProductRepository::seeded());
    product_routes(Arc::new(ServiceHandler::new(repo)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn products(body: &Value) -> Vec<Product> {
    serde_json::from_value(body["data"].clone()).unwrap()
}

fn pixel() -> Value {
    json!({ "name": "Pixel", "desc": "x", "price": 1000, "condition": "new" })
}

#[tokio::test]
async fn test_list_returns_seed_in_order() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body.get("msg").is_none());
    assert_eq!(products(&body), seed_products());
}

#[tokio::test]
async fn test_get_existing_and_missing() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], "1");
    assert_eq!(body["data"]["name"], "Macbook Pro 2018");
    assert_eq!(body["data"]["condition"], "new");

    let (status, body) = send(&app, Method::GET, "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "msg": "no product found" }));
}

#[tokio::test]
async fn test_create_without_body_is_bad_request() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/api", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "msg": "cannot add product" }));

    let (_, body) = send(&app, Method::GET, "/api", None).await;
    assert_eq!(products(&body).len(), 4);
}

#[tokio::test]
async fn test_create_with_malformed_body_is_bad_request() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api",
        Some(json!({ "name": "Pixel", "desc": "x", "price": "free", "condition": "new" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (_, body) = send(&app, Method::GET, "/api", None).await;
    assert_eq!(products(&body).len(), 4);
}

#[tokio::test]
async fn test_update_price_keeps_other_fields_and_order() {
    let app = app();

    let (status, body) = send(&app, Method::PUT, "/api/2", Some(json!({ "price": 999 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let mut expected = seed_products();
    expected[1].price = 999.0;
    assert_eq!(products(&body), expected);
}

#[tokio::test]
async fn test_update_cannot_change_id() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/3",
        Some(json!({ "id": "300", "condition": "new" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let updated = products(&body);
    assert_eq!(updated[2].id.as_str(), "3");
    assert_eq!(body["data"][2]["condition"], "new");
}

#[tokio::test]
async fn test_update_missing_is_not_found_and_unchanged() {
    let app = app();

    let (status, body) = send(&app, Method::PUT, "/api/77", Some(json!({ "price": 1 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "msg": "no product found" }));

    let (_, body) = send(&app, Method::GET, "/api", None).await;
    assert_eq!(products(&body), seed_products());
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let app = app();

    let (status, first) = send(&app, Method::DELETE, "/api/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["success"], true);
    assert_eq!(first["msg"], "product has been removed");
    assert_eq!(products(&first).len(), 3);

    let (status, second) = send(&app, Method::DELETE, "/api/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, first);
}

#[tokio::test]
async fn test_create_then_delete_scenario() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/api", Some(pixel())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Pixel");

    let new_id = body["data"]["id"].as_str().unwrap().to_string();
    assert!(!["1", "2", "3", "4"].contains(&new_id.as_str()));

    let (_, body) = send(&app, Method::GET, "/api", None).await;
    let listed = products(&body);
    assert_eq!(listed.len(), 5);
    assert_eq!(listed[4].id.as_str(), new_id);

    let (status, body) = send(&app, Method::GET, &format!("/api/{new_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], new_id.as_str());

    let (status, body) = send(&app, Method::DELETE, "/api/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(products(&body).len(), 4);

    let (status, _) = send(&app, Method::GET, "/api/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let app = app();

    let (_, a) = send(&app, Method::POST, "/api", Some(pixel())).await;
    let (_, b) = send(&app, Method::POST, "/api", Some(pixel())).await;
    assert_ne!(a["data"]["id"], b["data"]["id"]);
}

#[tokio::test]
async fn test_unsupported_method_is_rejected() {
    let app = app();

    let (status, _) = send(&app, Method::PATCH, "/api/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
