//! Coupon query service implementation.

use crate::dto::CouponResponse;
use crate::query_service::CouponQueryService;
use async_trait::async_trait;
use coupon_core::{CouponError, CouponId, CouponResult};
use coupon_repository::CouponRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

#[derive(Component)]
#[shaku(interface = CouponQueryService)]
pub struct CouponQueryServiceImpl {
    #[shaku(inject)]
    coupon_repository: Arc<dyn CouponRepository>,
}

impl CouponQueryServiceImpl {
    /// Creates a new query service.
    #[must_use]
    pub fn new(coupon_repository: Arc<dyn CouponRepository>) -> Self {
        Self { coupon_repository }
    }
}

#[async_trait]
impl CouponQueryService for CouponQueryServiceImpl {
    async fn find_by_id(&self, id: CouponId) -> CouponResult<CouponResponse> {
        debug!("Getting coupon: {}", id);

        let coupon = self
            .coupon_repository
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| CouponError::not_found("Coupon", id))?;

        Ok(CouponResponse::from(coupon))
    }

    async fn find_all(&self) -> CouponResult<Vec<CouponResponse>> {
        debug!("Listing active coupons");

        let coupons = self.coupon_repository.find_all_active().await?;
        Ok(coupons.into_iter().map(CouponResponse::from).collect())
    }
}

impl std::fmt::Debug for CouponQueryServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CouponQueryServiceImpl").finish_non_exhaustive()
    }
}
