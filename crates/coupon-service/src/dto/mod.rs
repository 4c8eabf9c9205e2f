//! Data Transfer Objects (DTOs).

mod coupon_dto;

pub use coupon_dto::*;
