//! # Coupon Repository
//!
//! Four-layer data access hierarchy:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn CouponRepository>  (domain interface)
//! CouponRepositoryImpl            (repository impl)
//!   ↓  Arc<dyn CouponDao>         (DAO interface)
//! SqliteCouponDaoImpl             (DAO impl, SQLite / SQLx)
//!   ↓
//! SQLite
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   traits.rs                    ← CouponRepository trait
//!   impl/
//!     coupon_repository_impl.rs  ← CouponRepositoryImpl
//!   dao/
//!     coupon_dao.rs              ← CouponDao trait
//!   sqlite/
//!     coupon_dao_impl.rs         ← SqliteCouponDaoImpl
//!   pool.rs                      ← DatabasePool, migrations, health check
//! ```

pub mod dao;
pub mod pool;
pub mod sqlite;
pub mod traits;
pub mod r#impl;

pub use dao::CouponDao;
pub use pool::*;
pub use r#impl::CouponRepositoryImpl;
pub use sqlite::SqliteCouponDaoImpl;
pub use traits::*;

pub use sqlx::sqlite::SqlitePool;
