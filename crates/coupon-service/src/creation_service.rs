//! Coupon creation service trait definition.

use crate::dto::{CouponResponse, CreateCouponRequest};
use async_trait::async_trait;
use coupon_core::{CouponResult, Interface};

/// Coupon creation use case.
#[async_trait]
pub trait CouponCreationService: Interface + Send + Sync {
    /// Validates the request and persists a new coupon.
    ///
    /// Stops at the first broken rule; nothing is written in that case.
    async fn create(&self, request: CreateCouponRequest) -> CouponResult<CouponResponse>;
}
