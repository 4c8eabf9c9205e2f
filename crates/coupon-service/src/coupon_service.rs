//! Coupon service facade trait definition.

use crate::dto::{CouponResponse, CreateCouponRequest};
use async_trait::async_trait;
use coupon_core::{CouponId, CouponResult, Interface};

/// Coupon service trait.
///
/// Single entry point for the REST layer.
#[async_trait]
pub trait CouponService: Interface + Send + Sync {
    /// Creates a new coupon.
    async fn create(&self, request: CreateCouponRequest) -> CouponResult<CouponResponse>;

    /// Gets an active coupon by ID.
    async fn find_by_id(&self, id: CouponId) -> CouponResult<CouponResponse>;

    /// Lists all active coupons.
    async fn find_all(&self) -> CouponResult<Vec<CouponResponse>>;

    /// Soft-deletes a coupon.
    async fn delete(&self, id: CouponId) -> CouponResult<()>;
}
