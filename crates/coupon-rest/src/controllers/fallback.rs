//! Fallback handlers for unmatched requests.

use crate::responses::AppError;
use axum::{extract::OriginalUri, http::Method};
use coupon_core::CouponError;

/// Answers requests whose path matches no route.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError(CouponError::RouteNotFound(uri.path().to_string()))
}

/// Answers requests whose path matches but whose method does not.
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError(CouponError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    })
}
