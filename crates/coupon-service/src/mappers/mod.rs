//! Entity-DTO mappers.

use crate::dto::CouponResponse;
use coupon_core::Coupon;

impl From<Coupon> for CouponResponse {
    fn from(coupon: Coupon) -> Self {
        Self {
            id: coupon.id,
            code: coupon.code.into(),
            description: coupon.description,
            discount_value: coupon.discount_value,
            expiration_date: coupon.expiration_date,
            published: coupon.published,
            created_at: coupon.created_at,
        }
    }
}
