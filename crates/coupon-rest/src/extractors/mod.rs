//! Custom Axum extractors.

mod coupon_id;
mod validated;

pub use coupon_id::*;
pub use validated::*;
