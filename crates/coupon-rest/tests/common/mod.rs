//! Shared helpers for HTTP integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use coupon_config::ServerConfig;
use coupon_repository::{
    CouponRepository, CouponRepositoryImpl, DatabaseHealthCheck, DatabasePool,
    DatabasePoolInterface, SqliteCouponDaoImpl,
};
use coupon_rest::{create_router, AppState};
use coupon_service::{
    CouponCreationServiceImpl, CouponDeletionServiceImpl, CouponQueryServiceImpl,
    CouponServiceImpl, CouponValidationServiceImpl,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Router wired to a private in-memory database.
pub struct TestApp {
    pub router: Router,
    pub pool: Arc<dyn DatabasePoolInterface>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_server_config(&ServerConfig::default()).await
    }

    pub async fn with_server_config(server_config: &ServerConfig) -> Self {
        let pool = DatabasePool::in_memory().await.expect("in-memory database");
        pool.run_migrations().await.expect("migrations");
        let pool: Arc<dyn DatabasePoolInterface> = Arc::new(pool);

        let dao = Arc::new(SqliteCouponDaoImpl::new(pool.clone()));
        let repo: Arc<dyn CouponRepository> = Arc::new(CouponRepositoryImpl::new(dao));
        let validation = Arc::new(CouponValidationServiceImpl::new(repo.clone()));
        let service = Arc::new(CouponServiceImpl::new(
            Arc::new(CouponCreationServiceImpl::new(repo.clone(), validation)),
            Arc::new(CouponQueryServiceImpl::new(repo.clone())),
            Arc::new(CouponDeletionServiceImpl::new(repo)),
        ));

        let state = AppState::new(service, "test")
            .with_health_check(Arc::new(DatabaseHealthCheck::new(pool.clone())));
        let router = create_router(state, server_config);

        Self { router, pool }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.send(builder.body(body).expect("request")).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    /// Posts a body exactly as written, for payloads `json!` cannot express.
    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        self.send(request).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// Counts stored rows, soft-deleted ones included.
    pub async fn count_rows(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM coupons")
            .fetch_one(self.pool.inner())
            .await
            .expect("count")
    }
}
