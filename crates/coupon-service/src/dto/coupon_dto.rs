//! Coupon-related DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use coupon_core::{rules, Coupon, CouponId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Request to create a new coupon.
///
/// Every field is optional at the serde level so that a missing field is
/// reported as a field error instead of a deserialization failure.
/// `discountValue` accepts a JSON number or a numeric string and is read
/// digit for digit, never through `f64`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCouponRequest {
    #[validate(
        required(message = "The 'code' field is required."),
        custom(function = "code_not_blank"),
        length(max = 20, message = "The 'code' field must have at most 20 characters.")
    )]
    pub code: Option<String>,

    #[validate(
        required(message = "The 'description' field is required."),
        custom(function = "description_not_blank")
    )]
    pub description: Option<String>,

    #[validate(
        required(message = "The 'discountValue' field is required."),
        custom(function = "min_discount")
    )]
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub discount_value: Option<Decimal>,

    #[validate(required(message = "The 'expirationDate' field is required."))]
    pub expiration_date: Option<NaiveDate>,

    #[serde(default)]
    pub published: bool,
}

fn code_not_blank(code: &str) -> Result<(), ValidationError> {
    rules::not_blank(code)
        .map_err(|e| e.with_message(Cow::Borrowed("The 'code' field is required.")))
}

fn description_not_blank(description: &str) -> Result<(), ValidationError> {
    rules::not_blank(description)
        .map_err(|e| e.with_message(Cow::Borrowed("The 'description' field is required.")))
}

fn min_discount(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Coupon::MIN_DISCOUNT {
        return Err(ValidationError::new("min_discount").with_message(Cow::Owned(format!(
            "The minimum allowed discount is {}.",
            Coupon::MIN_DISCOUNT
        ))));
    }
    Ok(())
}

/// Coupon response DTO.
///
/// The soft-delete timestamp is never exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponResponse {
    pub id: CouponId,
    pub code: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub discount_value: Decimal,
    pub expiration_date: NaiveDate,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}
