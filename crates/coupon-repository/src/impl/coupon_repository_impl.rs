//! `CouponRepositoryImpl`, the repository layer implementation.
//!
//! Implements the [`CouponRepository`] domain interface on top of a
//! [`CouponDao`].
//!
//! ```text
//! Service
//!   ↓ Arc<dyn CouponRepository>
//! CouponRepositoryImpl        ← applies domain checks before writes
//!   ↓ Arc<dyn CouponDao>
//! SqliteCouponDaoImpl
//!   ↓
//! SQLite
//! ```
//!
//! [`CouponRepository`]: crate::traits::CouponRepository
//! [`CouponDao`]: crate::dao::CouponDao

use crate::{dao::CouponDao, traits::CouponRepository};
use async_trait::async_trait;
use coupon_core::{Coupon, CouponCode, CouponId, CouponResult, NewCoupon};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// Repository implementation that orchestrates [`CouponDao`] access.
///
/// [`CouponDao`]: crate::dao::CouponDao
#[derive(Component)]
#[shaku(interface = CouponRepository)]
pub struct CouponRepositoryImpl {
    /// Primary data access object.
    #[shaku(inject)]
    coupon_dao: Arc<dyn CouponDao>,
}

impl CouponRepositoryImpl {
    /// Creates a new `CouponRepositoryImpl` with the given DAO.
    #[must_use]
    pub fn new(coupon_dao: Arc<dyn CouponDao>) -> Self {
        Self { coupon_dao }
    }
}

#[async_trait]
impl CouponRepository for CouponRepositoryImpl {
    async fn find_by_id(&self, id: CouponId) -> CouponResult<Option<Coupon>> {
        debug!("Repository: find_by_id {}", id);
        self.coupon_dao.find_by_id(id).await
    }

    async fn find_active_by_id(&self, id: CouponId) -> CouponResult<Option<Coupon>> {
        debug!("Repository: find_active_by_id {}", id);
        self.coupon_dao.find_active_by_id(id).await
    }

    async fn find_all_active(&self) -> CouponResult<Vec<Coupon>> {
        debug!("Repository: find_all_active");
        self.coupon_dao.find_all_active().await
    }

    async fn exists_by_code(&self, code: &str) -> CouponResult<bool> {
        debug!("Repository: exists_by_code {}", code);
        self.coupon_dao.exists_by_code(code).await
    }

    async fn save(&self, coupon: NewCoupon) -> CouponResult<Coupon> {
        debug!("Repository: save {}", coupon.code);
        CouponCode::validate(coupon.code.as_str())?;
        self.coupon_dao.insert(&coupon).await
    }

    async fn update(&self, coupon: &Coupon) -> CouponResult<Coupon> {
        debug!("Repository: update {}", coupon.id);
        self.coupon_dao.update(coupon).await
    }
}
