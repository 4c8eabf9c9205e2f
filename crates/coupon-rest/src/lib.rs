//! # Coupon REST
//!
//! REST API layer using Axum for the coupon service.
//! Provides the coupon endpoints under `/api/v1/coupons` and health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
