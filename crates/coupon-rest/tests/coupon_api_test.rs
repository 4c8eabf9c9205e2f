//! HTTP integration tests for the coupon API.

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use chrono::{Duration, Utc};
use common::TestApp;
use coupon_config::ServerConfig;
use serde_json::{json, Value};

fn coupon_body(code: &str) -> Value {
    json!({
        "code": code,
        "description": "Black Friday",
        "discountValue": 25.5,
        "expirationDate": "2099-11-28",
        "published": true
    })
}

async fn create(app: &TestApp, code: &str) -> i64 {
    let (status, body) = app.post("/api/v1/coupons", coupon_body(code)).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {body}");
    body["id"].as_i64().expect("id")
}

#[tokio::test]
async fn test_create_coupon_sanitizes_code() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/api/v1/coupons", coupon_body("SAV#E10")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["code"], "SAVE10");
    assert_eq!(body["description"], "Black Friday");
    assert_eq!(body["discountValue"], 25.5);
    assert_eq!(body["expirationDate"], "2099-11-28");
    assert_eq!(body["published"], true);
    assert!(body["id"].as_i64().unwrap() > 0);
    assert!(body["createdAt"].is_string());
    assert!(body.get("deletedAt").is_none());
}

#[tokio::test]
async fn test_create_accepts_string_discount_and_default_published() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/coupons",
            json!({
                "code": "STR001",
                "description": "String discount",
                "discountValue": "0.5",
                "expirationDate": "2099-01-01"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["discountValue"], 0.5);
    assert_eq!(body["published"], false);
}

#[tokio::test]
async fn test_create_duplicate_sanitized_code() {
    let app = TestApp::new().await;
    create(&app, "SAVE10").await;

    let (status, body) = app.post("/api/v1/coupons", coupon_body("SA-VE-10")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], 422);
    assert_eq!(body["error"], "Unprocessable Entity");
    assert_eq!(body["message"], "A coupon with code 'SAVE10' already exists.");
    assert!(body.get("details").is_none());
    assert_eq!(app.count_rows().await, 1);
}

#[tokio::test]
async fn test_create_duplicate_of_deleted_code() {
    let app = TestApp::new().await;
    let id = create(&app, "GONE01").await;
    app.delete(&format!("/api/v1/coupons/{id}")).await;

    let (status, _) = app.post("/api/v1/coupons", coupon_body("GONE01")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(app.count_rows().await, 1);
}

#[tokio::test]
async fn test_create_bad_code_length() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/api/v1/coupons", coupon_body("AB-12")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["message"],
        "The 'code' field must contain exactly 6 alphanumeric characters after removing special characters. Sanitized code: 'AB12' (4 chars)."
    );
}

#[tokio::test]
async fn test_create_past_expiration() {
    let app = TestApp::new().await;
    let yesterday = (Utc::now().date_naive() - Duration::days(1)).to_string();

    let mut body = coupon_body("PAST01");
    body["expirationDate"] = json!(yesterday);
    let (status, body) = app.post("/api/v1/coupons", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "The expiration date cannot be in the past.");
    assert_eq!(app.count_rows().await, 0);
}

#[tokio::test]
async fn test_create_low_discount_is_shape_error() {
    let app = TestApp::new().await;

    let mut body = coupon_body("LOW001");
    body["discountValue"] = json!(0.3);
    let (status, body) = app.post("/api/v1/coupons", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation failed.");
    assert_eq!(body["details"]["discountValue"], "The minimum allowed discount is 0.5.");
}

#[tokio::test]
async fn test_discount_just_below_minimum_is_rejected() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_raw(
            "/api/v1/coupons",
            r#"{"code":"EDGE01","description":"Edge","discountValue":0.49999999999999999,"expirationDate":"2099-01-01"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST, "unexpected body: {body}");
    assert_eq!(body["details"]["discountValue"], "The minimum allowed discount is 0.5.");
    assert_eq!(app.count_rows().await, 0);
}

#[tokio::test]
async fn test_large_discount_round_trips_exactly() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_raw(
            "/api/v1/coupons",
            r#"{"code":"BIG001","description":"Large","discountValue":12345678901234567.25,"expirationDate":"2099-01-01"}"#,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {body}");
    assert_eq!(body["discountValue"].to_string(), "12345678901234567.25");

    let (_, body) = app.get("/api/v1/coupons").await;
    assert_eq!(body[0]["discountValue"].to_string(), "12345678901234567.25");
}

#[tokio::test]
async fn test_create_empty_body_reports_all_fields() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/api/v1/coupons", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["error"], "Bad Request");
    let details = body["details"].as_object().expect("details");
    for field in ["code", "description", "discountValue", "expirationDate"] {
        assert!(details.contains_key(field), "missing detail for {field}");
    }
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_create_malformed_json() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/coupons")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"code\": "))
        .unwrap();

    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_create_invalid_date_format() {
    let app = TestApp::new().await;

    let mut body = coupon_body("DATE01");
    body["expirationDate"] = json!("28/11/2099");
    let (status, _) = app.post("/api/v1/coupons", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_coupon() {
    let app = TestApp::new().await;
    let id = create(&app, "GET001").await;

    let (status, body) = app.get(&format!("/api/v1/coupons/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["code"], "GET001");
}

#[tokio::test]
async fn test_get_unknown_coupon() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/coupons/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Coupon with id 999 not found or already removed.");
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/api/v1/coupons/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.delete("/api/v1/coupons/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_newest_first_without_deleted() {
    let app = TestApp::new().await;
    let first = create(&app, "LIST01").await;
    let second = create(&app, "LIST02").await;
    let third = create(&app, "LIST03").await;
    app.delete(&format!("/api/v1/coupons/{second}")).await;

    let (status, body) = app.get("/api/v1/coupons").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![third, first]);
}

#[tokio::test]
async fn test_list_empty() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/coupons").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_delete_twice() {
    let app = TestApp::new().await;
    let id = create(&app, "DEL001").await;
    let uri = format!("/api/v1/coupons/{id}");

    let (status, body) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["message"],
        format!("The coupon with id {id} has already been removed.")
    );

    let (status, _) = app.get(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(app.count_rows().await, 1);
}

#[tokio::test]
async fn test_delete_unknown_coupon() {
    let app = TestApp::new().await;

    let (status, body) = app.delete("/api/v1/coupons/424242").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .uri("/api/v1/coupons")
        .header("x-request-id", "req-123")
        .body(Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app.router.clone(), request)
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-123");
}

#[tokio::test]
async fn test_body_over_limit_is_payload_too_large() {
    let config = ServerConfig {
        max_body_size: 256,
        ..ServerConfig::default()
    };
    let app = TestApp::with_server_config(&config).await;

    let mut body = coupon_body("BIGBODY");
    body["description"] = json!("x".repeat(1024));
    let (status, body) = app.post("/api/v1/coupons", body).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["status"], 413);
    assert_eq!(body["error"], "Payload Too Large");
    assert_eq!(body["message"], "Request body is too large.");
    assert_eq!(app.count_rows().await, 0);
}

#[tokio::test]
async fn test_unknown_path_returns_error_envelope() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/vouchers").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["message"], "No resource found at /api/v1/vouchers.");
    assert!(body["timestamp"].is_string());

    let (status, body) = app.get("/api/v1/coupons/1/extra").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_wrong_method_returns_error_envelope() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request(Method::PUT, "/api/v1/coupons/1", Some(coupon_body("PUT001")))
        .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["status"], 405);
    assert_eq!(body["error"], "Method Not Allowed");
    assert_eq!(body["message"], "Method PUT is not allowed for /api/v1/coupons/1.");

    let (status, body) = app.delete("/api/v1/coupons").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["status"], 405);
}
