//! Coupon query service trait definition.

use crate::dto::CouponResponse;
use async_trait::async_trait;
use coupon_core::{CouponId, CouponResult, Interface};

/// Read-only coupon use cases. Soft-deleted coupons are invisible here.
#[async_trait]
pub trait CouponQueryService: Interface + Send + Sync {
    /// Gets an active coupon by ID.
    async fn find_by_id(&self, id: CouponId) -> CouponResult<CouponResponse>;

    /// Lists active coupons, newest first.
    async fn find_all(&self) -> CouponResult<Vec<CouponResponse>>;
}
