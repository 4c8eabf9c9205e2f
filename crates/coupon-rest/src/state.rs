//! Application state for Axum handlers.

use coupon_core::HealthCheck;
use coupon_repository::{DatabaseHealthCheck, DatabasePoolInterface};
use coupon_service::CouponService;
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub coupon_service: Arc<dyn CouponService>,
    /// Checks run by the readiness endpoint.
    pub health_checks: Vec<Arc<dyn HealthCheck>>,
    pub version: String,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(coupon_service: Arc<dyn CouponService>, version: impl Into<String>) -> Self {
        Self {
            coupon_service,
            health_checks: Vec::new(),
            version: version.into(),
        }
    }

    /// Adds a readiness check.
    #[must_use]
    pub fn with_health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_checks.push(check);
        self
    }

    /// Resolves the services from a Shaku module.
    ///
    /// The database pool is registered as a readiness check.
    pub fn from_module<M>(module: &M, version: impl Into<String>) -> Self
    where
        M: Module + HasComponent<dyn CouponService> + HasComponent<dyn DatabasePoolInterface>,
    {
        let coupon_service = HasComponent::<dyn CouponService>::resolve(module);
        let pool = HasComponent::<dyn DatabasePoolInterface>::resolve(module);

        Self::new(coupon_service, version)
            .with_health_check(Arc::new(DatabaseHealthCheck::new(pool)))
    }
}
