//! Common test infrastructure for database integration tests.

use coupon_core::{Coupon, NewCoupon};
use coupon_repository::{
    CouponRepository, CouponRepositoryImpl, DatabasePool, DatabasePoolInterface, SqliteCouponDaoImpl,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

/// Test database wrapper.
///
/// Owns a migrated in-memory SQLite database.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh, migrated database.
    pub async fn new() -> Self {
        let pool = DatabasePool::in_memory()
            .await
            .expect("Failed to open in-memory database");

        pool.run_migrations()
            .await
            .expect("Failed to run migrations");

        Self { pool: Arc::new(pool) }
    }

    /// Returns the pool as the injectable interface.
    pub fn pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.pool.clone()
    }

    /// Builds the full repository stack over this database.
    pub fn repository(&self) -> Arc<dyn CouponRepository> {
        let dao = Arc::new(SqliteCouponDaoImpl::new(self.pool()));
        Arc::new(CouponRepositoryImpl::new(dao))
    }
}

/// Builds a valid coupon that expires far in the future.
pub fn new_coupon(code: &str) -> NewCoupon {
    Coupon::builder()
        .code(code)
        .description(format!("Coupon {code}"))
        .discount_value(Decimal::from_str("15.00").expect("valid decimal"))
        .expiration_date(NaiveDate::from_ymd_opt(2099, 12, 31).expect("valid date"))
        .build()
        .expect("valid coupon")
}
