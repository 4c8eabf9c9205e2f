//! REST API controllers.

pub mod coupon_controller;
pub mod fallback;
pub mod health_controller;

pub use health_controller::*;
