//! SQLite implementations backed by `sqlx`.

mod coupon_dao_impl;

pub use coupon_dao_impl::SqliteCouponDaoImpl;
