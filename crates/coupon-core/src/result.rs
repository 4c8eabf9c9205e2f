//! Result type aliases for the coupon service.

use crate::CouponError;

/// A specialized `Result` type for coupon operations.
pub type CouponResult<T> = Result<T, CouponError>;
