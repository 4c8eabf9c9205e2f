//! Coupon ID path extractor.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use coupon_core::{CouponError, CouponId};

/// Extracts a numeric coupon ID from the `:id` path segment.
///
/// Non-numeric values are rejected with 400 Bad Request.
#[derive(Debug, Clone, Copy)]
pub struct CouponIdPath(pub CouponId);

#[async_trait]
impl<S> FromRequestParts<S> for CouponIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError(CouponError::validation(e.body_text())))?;

        CouponId::parse(&raw)
            .map(CouponIdPath)
            .map_err(|_| AppError(CouponError::validation(format!("Invalid coupon ID: {raw}"))))
    }
}
