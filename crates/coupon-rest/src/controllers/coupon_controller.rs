//! Coupon controller.

use super::fallback::method_not_allowed;
use crate::{
    extractors::{CouponIdPath, ValidatedJson},
    responses::{created, no_content, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use coupon_service::{CouponResponse, CreateCouponRequest};
use tracing::debug;

/// Creates the coupon router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_coupons)
                .post(create_coupon)
                .fallback(method_not_allowed),
        )
        .route(
            "/:id",
            get(get_coupon)
                .delete(delete_coupon)
                .fallback(method_not_allowed),
        )
}

/// Create a new coupon.
async fn create_coupon(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCouponRequest>,
) -> Result<(StatusCode, Json<CouponResponse>), AppError> {
    debug!("Create coupon request: {:?}", request.code);

    let response = state.coupon_service.create(request).await?;
    Ok(created(response))
}

/// List active coupons, newest first.
async fn list_coupons(State(state): State<AppState>) -> ApiResult<Vec<CouponResponse>> {
    debug!("List coupons request");

    let response = state.coupon_service.find_all().await?;
    ok(response)
}

/// Get an active coupon by ID.
async fn get_coupon(
    State(state): State<AppState>,
    CouponIdPath(id): CouponIdPath,
) -> ApiResult<CouponResponse> {
    debug!("Get coupon request: {}", id);

    let response = state.coupon_service.find_by_id(id).await?;
    ok(response)
}

/// Soft-delete a coupon.
async fn delete_coupon(
    State(state): State<AppState>,
    CouponIdPath(id): CouponIdPath,
) -> Result<StatusCode, AppError> {
    debug!("Delete coupon request: {}", id);

    state.coupon_service.delete(id).await?;
    Ok(no_content())
}
