//! Domain entities.

mod coupon;

pub use coupon::*;
