//! Coupon validation service trait definition.

use async_trait::async_trait;
use chrono::NaiveDate;
use coupon_core::{CouponCode, CouponResult, Interface};
use rust_decimal::Decimal;

/// Business rule checks applied before a coupon is written.
#[async_trait]
pub trait CouponValidationService: Interface + Send + Sync {
    /// Sanitizes a raw code, checks its length and makes sure no coupon,
    /// active or deleted, already uses it.
    async fn sanitize_and_validate_code(&self, raw_code: &str) -> CouponResult<CouponCode>;

    /// Rejects discounts below the minimum.
    fn validate_discount_value(&self, value: Decimal) -> CouponResult<()>;

    /// Rejects expiration dates before the current UTC date.
    fn validate_expiration_date(&self, date: NaiveDate) -> CouponResult<()>;
}
