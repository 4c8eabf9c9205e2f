//! Coupon validation service implementation.

use crate::validation_service::CouponValidationService;
use async_trait::async_trait;
use chrono::NaiveDate;
use coupon_core::{today, Coupon, CouponCode, CouponError, CouponResult};
use coupon_repository::CouponRepository;
use rust_decimal::Decimal;
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// Validation service backed by the coupon repository for uniqueness checks.
#[derive(Component)]
#[shaku(interface = CouponValidationService)]
pub struct CouponValidationServiceImpl {
    #[shaku(inject)]
    coupon_repository: Arc<dyn CouponRepository>,
}

impl CouponValidationServiceImpl {
    /// Creates a new validation service.
    #[must_use]
    pub fn new(coupon_repository: Arc<dyn CouponRepository>) -> Self {
        Self { coupon_repository }
    }
}

#[async_trait]
impl CouponValidationService for CouponValidationServiceImpl {
    async fn sanitize_and_validate_code(&self, raw_code: &str) -> CouponResult<CouponCode> {
        let code = CouponCode::parse(raw_code)?;
        debug!("Sanitized coupon code '{}' -> '{}'", raw_code, code);

        if self.coupon_repository.exists_by_code(code.as_str()).await? {
            return Err(CouponError::duplicate_code(code.as_str()));
        }

        Ok(code)
    }

    fn validate_discount_value(&self, value: Decimal) -> CouponResult<()> {
        Coupon::validate_discount_value(value)
    }

    fn validate_expiration_date(&self, date: NaiveDate) -> CouponResult<()> {
        Coupon::validate_expiration_date(date, today())
    }
}

impl std::fmt::Debug for CouponValidationServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CouponValidationServiceImpl").finish_non_exhaustive()
    }
}
