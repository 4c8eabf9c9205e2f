//! Coupon creation service implementation.

use crate::creation_service::CouponCreationService;
use crate::dto::{CouponResponse, CreateCouponRequest};
use crate::validation_service::CouponValidationService;
use async_trait::async_trait;
use coupon_core::{Coupon, CouponError, CouponResult, ValidateExt};
use coupon_repository::CouponRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Component)]
#[shaku(interface = CouponCreationService)]
pub struct CouponCreationServiceImpl {
    #[shaku(inject)]
    coupon_repository: Arc<dyn CouponRepository>,
    #[shaku(inject)]
    validation_service: Arc<dyn CouponValidationService>,
}

impl CouponCreationServiceImpl {
    /// Creates a new creation service.
    #[must_use]
    pub fn new(
        coupon_repository: Arc<dyn CouponRepository>,
        validation_service: Arc<dyn CouponValidationService>,
    ) -> Self {
        Self {
            coupon_repository,
            validation_service,
        }
    }
}

fn required<T>(value: Option<T>, field: &str) -> CouponResult<T> {
    value.ok_or_else(|| CouponError::validation(format!("The '{field}' field is required.")))
}

#[async_trait]
impl CouponCreationService for CouponCreationServiceImpl {
    async fn create(&self, request: CreateCouponRequest) -> CouponResult<CouponResponse> {
        debug!("Creating coupon: {:?}", request.code);

        request.validate_request()?;

        let CreateCouponRequest {
            code,
            description,
            discount_value,
            expiration_date,
            published,
        } = request;
        let raw_code = required(code, "code")?;
        let description = required(description, "description")?;
        let discount_value = required(discount_value, "discountValue")?;
        let expiration_date = required(expiration_date, "expirationDate")?;

        let code = self
            .validation_service
            .sanitize_and_validate_code(&raw_code)
            .await?;
        self.validation_service.validate_discount_value(discount_value)?;
        self.validation_service.validate_expiration_date(expiration_date)?;

        let new_coupon = Coupon::builder()
            .code(code)
            .description(description)
            .discount_value(discount_value)
            .expiration_date(expiration_date)
            .published(published)
            .build()?;

        let saved = self.coupon_repository.save(new_coupon).await?;

        info!("Coupon created: id={}, code={}", saved.id, saved.code);
        Ok(CouponResponse::from(saved))
    }
}

impl std::fmt::Debug for CouponCreationServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CouponCreationServiceImpl").finish_non_exhaustive()
    }
}
