//! In-memory repository used by the service unit tests.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use coupon_core::{Coupon, CouponError, CouponId, CouponResult, NewCoupon};
use coupon_repository::CouponRepository;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryCouponRepository {
    coupons: Mutex<HashMap<CouponId, Coupon>>,
}

impl InMemoryCouponRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coupons(coupons: impl IntoIterator<Item = Coupon>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.coupons.lock().unwrap();
            for coupon in coupons {
                map.insert(coupon.id, coupon);
            }
        }
        repo
    }

    pub fn get(&self, id: CouponId) -> Option<Coupon> {
        self.coupons.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.coupons.lock().unwrap().len()
    }
}

#[async_trait]
impl CouponRepository for InMemoryCouponRepository {
    async fn find_by_id(&self, id: CouponId) -> CouponResult<Option<Coupon>> {
        Ok(self.get(id))
    }

    async fn find_active_by_id(&self, id: CouponId) -> CouponResult<Option<Coupon>> {
        Ok(self.get(id).filter(Coupon::is_active))
    }

    async fn find_all_active(&self) -> CouponResult<Vec<Coupon>> {
        let mut coupons: Vec<Coupon> = self
            .coupons
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.is_active())
            .cloned()
            .collect();
        coupons.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(coupons)
    }

    async fn exists_by_code(&self, code: &str) -> CouponResult<bool> {
        Ok(self
            .coupons
            .lock()
            .unwrap()
            .values()
            .any(|c| c.code.as_str() == code))
    }

    async fn save(&self, coupon: NewCoupon) -> CouponResult<Coupon> {
        let mut coupons = self.coupons.lock().unwrap();
        if coupons.values().any(|c| c.code == coupon.code) {
            return Err(CouponError::duplicate_code(coupon.code.as_str()));
        }
        let id = CouponId(coupons.keys().map(|id| id.into_inner()).max().unwrap_or(0) + 1);
        let saved = coupon.into_coupon(id, Utc::now());
        coupons.insert(id, saved.clone());
        Ok(saved)
    }

    async fn update(&self, coupon: &Coupon) -> CouponResult<Coupon> {
        let mut coupons = self.coupons.lock().unwrap();
        match coupons.get(&coupon.id) {
            None => Err(CouponError::not_found("Coupon", coupon.id)),
            Some(stored) if stored.is_deleted() => Err(CouponError::already_removed(coupon.id)),
            Some(_) => {
                coupons.insert(coupon.id, coupon.clone());
                Ok(coupon.clone())
            }
        }
    }
}

/// Builds a stored coupon whose creation time grows with its id.
pub fn stored_coupon(id: i64, code: &str) -> Coupon {
    let created_at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(id);
    Coupon::builder()
        .code(code)
        .description(format!("Coupon {code}"))
        .discount_value(Decimal::TEN)
        .expiration_date(NaiveDate::from_ymd_opt(2099, 12, 31).unwrap())
        .build()
        .unwrap()
        .into_coupon(CouponId(id), created_at)
}

pub fn deleted_coupon(id: i64, code: &str) -> Coupon {
    let mut coupon = stored_coupon(id, code);
    coupon.soft_delete().unwrap();
    coupon
}
