//! Repository implementations.

mod coupon_repository_impl;

pub use coupon_repository_impl::CouponRepositoryImpl;
