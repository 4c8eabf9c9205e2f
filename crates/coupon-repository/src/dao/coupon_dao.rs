//! CouponDao trait: low-level coupon data access abstraction.
//!
//! [`CouponRepository`] uses a `CouponDao` to fulfil domain-level operations.
//!
//! [`CouponRepository`]: crate::traits::CouponRepository

use async_trait::async_trait;
use coupon_core::{Coupon, CouponId, CouponResult, Interface, NewCoupon};

/// Low-level coupon data access object.
///
/// Every write runs in its own transaction inside the implementation.
#[async_trait]
pub trait CouponDao: Interface + Send + Sync {
    /// Finds a coupon by ID, whether active or soft-deleted.
    async fn find_by_id(&self, id: CouponId) -> CouponResult<Option<Coupon>>;

    /// Finds a coupon by ID only if it is active.
    async fn find_active_by_id(&self, id: CouponId) -> CouponResult<Option<Coupon>>;

    /// Lists active coupons, newest first.
    async fn find_all_active(&self) -> CouponResult<Vec<Coupon>>;

    /// Checks whether any row, active or deleted, uses the code.
    async fn exists_by_code(&self, code: &str) -> CouponResult<bool>;

    /// Inserts a coupon, stamping its creation time.
    async fn insert(&self, coupon: &NewCoupon) -> CouponResult<Coupon>;

    /// Writes the mutable columns of an active coupon.
    async fn update(&self, coupon: &Coupon) -> CouponResult<Coupon>;
}
