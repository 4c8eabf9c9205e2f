//! Coupon service implementations.
//!
//! This module contains the concrete implementations of service traits.
//! Trait definitions live in the parent module (e.g. `coupon_service.rs`).

pub mod coupon_service_impl;
pub mod creation_service_impl;
pub mod deletion_service_impl;
pub mod query_service_impl;
pub mod validation_service_impl;

pub use coupon_service_impl::CouponServiceImpl;
pub use creation_service_impl::CouponCreationServiceImpl;
pub use deletion_service_impl::CouponDeletionServiceImpl;
pub use query_service_impl::CouponQueryServiceImpl;
pub use validation_service_impl::CouponValidationServiceImpl;
