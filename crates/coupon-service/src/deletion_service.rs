//! Coupon deletion service trait definition.

use async_trait::async_trait;
use coupon_core::{CouponId, CouponResult, Interface};

/// Coupon soft-delete use case.
#[async_trait]
pub trait CouponDeletionService: Interface + Send + Sync {
    /// Soft-deletes a coupon.
    ///
    /// Fails with not found when the ID never existed and with a business
    /// rule violation when the coupon was already deleted.
    async fn delete(&self, id: CouponId) -> CouponResult<()>;
}
