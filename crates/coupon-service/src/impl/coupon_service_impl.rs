//! Coupon service facade implementation.

use crate::coupon_service::CouponService;
use crate::creation_service::CouponCreationService;
use crate::deletion_service::CouponDeletionService;
use crate::dto::{CouponResponse, CreateCouponRequest};
use crate::query_service::CouponQueryService;
use async_trait::async_trait;
use coupon_core::{CouponId, CouponResult};
use shaku::Component;
use std::sync::Arc;

/// Facade over the coupon use cases. Holds no logic of its own.
#[derive(Component)]
#[shaku(interface = CouponService)]
pub struct CouponServiceImpl {
    #[shaku(inject)]
    creation_service: Arc<dyn CouponCreationService>,
    #[shaku(inject)]
    query_service: Arc<dyn CouponQueryService>,
    #[shaku(inject)]
    deletion_service: Arc<dyn CouponDeletionService>,
}

impl CouponServiceImpl {
    /// Creates a new coupon service facade.
    #[must_use]
    pub fn new(
        creation_service: Arc<dyn CouponCreationService>,
        query_service: Arc<dyn CouponQueryService>,
        deletion_service: Arc<dyn CouponDeletionService>,
    ) -> Self {
        Self {
            creation_service,
            query_service,
            deletion_service,
        }
    }
}

#[async_trait]
impl CouponService for CouponServiceImpl {
    async fn create(&self, request: CreateCouponRequest) -> CouponResult<CouponResponse> {
        self.creation_service.create(request).await
    }

    async fn find_by_id(&self, id: CouponId) -> CouponResult<CouponResponse> {
        self.query_service.find_by_id(id).await
    }

    async fn find_all(&self) -> CouponResult<Vec<CouponResponse>> {
        self.query_service.find_all().await
    }

    async fn delete(&self, id: CouponId) -> CouponResult<()> {
        self.deletion_service.delete(id).await
    }
}

impl std::fmt::Debug for CouponServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CouponServiceImpl").finish_non_exhaustive()
    }
}
