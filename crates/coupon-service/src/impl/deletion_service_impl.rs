//! Coupon deletion service implementation.

use crate::deletion_service::CouponDeletionService;
use async_trait::async_trait;
use coupon_core::{CouponError, CouponId, CouponResult};
use coupon_repository::CouponRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Component)]
#[shaku(interface = CouponDeletionService)]
pub struct CouponDeletionServiceImpl {
    #[shaku(inject)]
    coupon_repository: Arc<dyn CouponRepository>,
}

impl CouponDeletionServiceImpl {
    /// Creates a new deletion service.
    #[must_use]
    pub fn new(coupon_repository: Arc<dyn CouponRepository>) -> Self {
        Self { coupon_repository }
    }
}

#[async_trait]
impl CouponDeletionService for CouponDeletionServiceImpl {
    async fn delete(&self, id: CouponId) -> CouponResult<()> {
        debug!("Deleting coupon: {}", id);

        // deleted rows are included so a second delete reports 422, not 404
        let mut coupon = self
            .coupon_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CouponError::not_found("Coupon", id))?;

        coupon.soft_delete()?;
        self.coupon_repository.update(&coupon).await?;

        info!("Coupon soft-deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for CouponDeletionServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CouponDeletionServiceImpl").finish_non_exhaustive()
    }
}
