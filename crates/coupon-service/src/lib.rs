//! # Coupon Service
//!
//! Business logic service layer for the coupon service.
//! Contains the request/response DTOs and the coupon use cases.
//!
//! ```text
//! CouponService (facade)
//!   ├─ CouponCreationService ── CouponValidationService
//!   ├─ CouponQueryService
//!   └─ CouponDeletionService
//!         ↓ Arc<dyn CouponRepository>
//! ```

pub mod coupon_service;
pub mod creation_service;
pub mod deletion_service;
pub mod dto;
pub mod mappers;
pub mod query_service;
pub mod validation_service;
pub mod r#impl;

#[cfg(test)]
pub(crate) mod testing;

pub use coupon_service::*;
pub use creation_service::*;
pub use deletion_service::*;
pub use dto::*;
pub use query_service::*;
pub use validation_service::*;
pub use r#impl::{
    CouponCreationServiceImpl, CouponDeletionServiceImpl, CouponQueryServiceImpl,
    CouponServiceImpl, CouponValidationServiceImpl,
};
