//! Repository traits defining data access contracts.

use async_trait::async_trait;
use coupon_core::{Coupon, CouponId, CouponResult, Interface, NewCoupon};

/// Coupon repository trait.
///
/// Lookups come in two scopes. `find_active_by_id` and `find_all_active`
/// only see coupons that have not been soft-deleted, while `find_by_id` and
/// `exists_by_code` also see deleted rows.
#[async_trait]
pub trait CouponRepository: Interface + Send + Sync {
    /// Finds a coupon by ID, including soft-deleted ones.
    async fn find_by_id(&self, id: CouponId) -> CouponResult<Option<Coupon>>;

    /// Finds an active coupon by ID.
    async fn find_active_by_id(&self, id: CouponId) -> CouponResult<Option<Coupon>>;

    /// Lists all active coupons, newest first.
    async fn find_all_active(&self) -> CouponResult<Vec<Coupon>>;

    /// Checks whether a code is used by any coupon, active or deleted.
    async fn exists_by_code(&self, code: &str) -> CouponResult<bool>;

    /// Persists a new coupon.
    async fn save(&self, coupon: NewCoupon) -> CouponResult<Coupon>;

    /// Persists changes to an existing coupon.
    async fn update(&self, coupon: &Coupon) -> CouponResult<Coupon>;
}
