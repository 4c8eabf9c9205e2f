//! # Coupon Server Library
//!
//! Dependency injection configuration and server startup utilities for the
//! coupon service binary.

pub mod di;
pub mod startup;
