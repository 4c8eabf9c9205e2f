//! Dependency injection module using Shaku.
//!
//! `CouponModule` holds the whole stack for a single-process deployment:
//! database pool, DAO, repository, the coupon use cases and their facade.

use coupon_config::DatabaseConfig;
use coupon_core::CouponResult;
use coupon_repository::{
    CouponRepository, CouponRepositoryImpl, DatabasePool, DatabasePoolInterface,
    DatabasePoolParameters, SqliteCouponDaoImpl, SqlitePool,
};
use coupon_service::{
    CouponCreationServiceImpl, CouponDeletionServiceImpl, CouponQueryServiceImpl, CouponService,
    CouponServiceImpl, CouponValidationServiceImpl,
};
use shaku::{module, HasComponent};
use std::sync::Arc;

module! {
    pub CouponModule {
        components = [
            DatabasePool,
            SqliteCouponDaoImpl,
            CouponRepositoryImpl,
            CouponValidationServiceImpl,
            CouponCreationServiceImpl,
            CouponQueryServiceImpl,
            CouponDeletionServiceImpl,
            CouponServiceImpl,
        ],
        providers = [],
    }
}

/// Builds the module around an existing pool.
#[must_use]
pub fn build_coupon_module(pool: SqlitePool) -> Arc<CouponModule> {
    let module = CouponModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters { pool })
        .build();

    Arc::new(module)
}

/// Connects to the configured database and builds the module.
pub async fn connect_coupon_module(db_config: &DatabaseConfig) -> CouponResult<Arc<CouponModule>> {
    let db_pool = DatabasePool::connect(db_config).await?;
    Ok(build_coupon_module(db_pool.inner().clone()))
}

/// Resolves the commonly used components from a module.
pub trait CouponResolver {
    /// Resolves the coupon service facade.
    fn coupon_service(&self) -> Arc<dyn CouponService>;

    /// Resolves the coupon repository.
    fn coupon_repository(&self) -> Arc<dyn CouponRepository>;

    /// Resolves the database pool.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl CouponResolver for CouponModule {
    fn coupon_service(&self) -> Arc<dyn CouponService> {
        self.resolve()
    }

    fn coupon_repository(&self) -> Arc<dyn CouponRepository> {
        self.resolve()
    }

    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}
