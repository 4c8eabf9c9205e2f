//! Coupon entity.

use super::super::value_objects::CouponCode;
use crate::{CouponError, CouponId, CouponResult};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Persisted discount coupon.
///
/// A coupon is active while `deleted_at` is `None`. Once set, `deleted_at`
/// is never cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    /// Storage-generated identifier.
    pub id: CouponId,

    /// Sanitized six character code, unique across active and deleted coupons.
    pub code: CouponCode,

    /// Free-form description.
    pub description: String,

    /// Discount amount, never below [`Coupon::MIN_DISCOUNT`].
    pub discount_value: Decimal,

    /// Last day on which the coupon is valid.
    pub expiration_date: NaiveDate,

    /// Whether the coupon is published.
    pub published: bool,

    /// Persistence timestamp.
    pub created_at: DateTime<Utc>,

    /// Soft-delete timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Coupon {
    /// Smallest accepted discount value (0.5).
    pub const MIN_DISCOUNT: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

    /// Number of decimal places kept for discount values.
    pub const DISCOUNT_SCALE: u32 = 2;

    /// Starts building a new, not yet persisted coupon.
    #[must_use]
    pub fn builder() -> CouponBuilder {
        CouponBuilder::new()
    }

    /// Rejects discounts below [`Coupon::MIN_DISCOUNT`]. The minimum itself is accepted.
    pub fn validate_discount_value(value: Decimal) -> CouponResult<()> {
        if value < Self::MIN_DISCOUNT {
            return Err(CouponError::business_rule(format!(
                "The minimum allowed discount is {}.",
                Self::MIN_DISCOUNT
            )));
        }
        Ok(())
    }

    /// Rejects expiration dates strictly before `today`.
    pub fn validate_expiration_date(date: NaiveDate, today: NaiveDate) -> CouponResult<()> {
        if date < today {
            return Err(CouponError::business_rule(
                "The expiration date cannot be in the past.",
            ));
        }
        Ok(())
    }

    /// Rounds a discount to the stored scale, half away from zero.
    #[must_use]
    pub fn normalize_discount(value: Decimal) -> Decimal {
        value.round_dp_with_strategy(Self::DISCOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Checks whether the coupon has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Checks whether the coupon is still active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.is_deleted()
    }

    /// Marks the coupon as deleted.
    ///
    /// # Errors
    ///
    /// Fails if the coupon was already deleted; `deleted_at` is left untouched.
    pub fn soft_delete(&mut self) -> CouponResult<()> {
        if self.is_deleted() {
            return Err(CouponError::already_removed(self.id));
        }
        self.deleted_at = Some(Utc::now());
        Ok(())
    }
}

/// Validated coupon that has not been written to storage yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCoupon {
    pub code: CouponCode,
    pub description: String,
    pub discount_value: Decimal,
    pub expiration_date: NaiveDate,
    pub published: bool,
}

impl NewCoupon {
    /// Attaches the values assigned by storage.
    #[must_use]
    pub fn into_coupon(self, id: CouponId, created_at: DateTime<Utc>) -> Coupon {
        Coupon {
            id,
            code: self.code,
            description: self.description,
            discount_value: self.discount_value,
            expiration_date: self.expiration_date,
            published: self.published,
            created_at,
            deleted_at: None,
        }
    }
}

/// Builder for creating [`NewCoupon`] instances.
#[derive(Debug, Default)]
pub struct CouponBuilder {
    code: Option<String>,
    description: Option<String>,
    discount_value: Option<Decimal>,
    expiration_date: Option<NaiveDate>,
    published: bool,
}

impl CouponBuilder {
    /// Creates a new coupon builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the code. Raw codes are sanitized on build.
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the discount value.
    #[must_use]
    pub fn discount_value(mut self, value: Decimal) -> Self {
        self.discount_value = Some(value);
        self
    }

    /// Sets the expiration date.
    #[must_use]
    pub fn expiration_date(mut self, date: NaiveDate) -> Self {
        self.expiration_date = Some(date);
        self
    }

    /// Sets the published flag.
    #[must_use]
    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// Builds the coupon, enforcing the code and discount invariants.
    ///
    /// The expiration rule depends on the current date and is checked by the
    /// creation flow, not here.
    pub fn build(self) -> CouponResult<NewCoupon> {
        let code = self
            .code
            .ok_or_else(|| CouponError::validation("code is required"))?;
        let description = self
            .description
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| CouponError::validation("description is required"))?;
        let discount_value = self
            .discount_value
            .ok_or_else(|| CouponError::validation("discountValue is required"))?;
        let expiration_date = self
            .expiration_date
            .ok_or_else(|| CouponError::validation("expirationDate is required"))?;

        let code = CouponCode::parse(&code)?;
        Coupon::validate_discount_value(discount_value)?;

        Ok(NewCoupon {
            code,
            description,
            discount_value: Coupon::normalize_discount(discount_value),
            expiration_date,
            published: self.published,
        })
    }
}
