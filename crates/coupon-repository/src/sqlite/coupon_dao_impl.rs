//! SQLite coupon DAO implementation.

use crate::{dao::CouponDao, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use coupon_core::{Coupon, CouponCode, CouponError, CouponId, CouponResult, NewCoupon};
use rust_decimal::Decimal;
use shaku::Component;
use sqlx::{FromRow, SqliteConnection};
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

const SELECT_COLUMNS: &str = r#"
    SELECT id, code, description, discount_value, expiration_date,
           published, created_at, deleted_at
    FROM coupons
"#;

/// SQLite coupon DAO implementation.
#[derive(Component, Clone)]
#[shaku(interface = CouponDao)]
pub struct SqliteCouponDaoImpl {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteCouponDaoImpl {
    /// Creates a new SQLite coupon DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    async fn fetch_by_id(conn: &mut SqliteConnection, id: i64) -> CouponResult<Coupon> {
        let row = sqlx::query_as::<_, CouponRow>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_one(conn)
            .await?;

        Coupon::try_from(row)
    }
}

impl std::fmt::Debug for SqliteCouponDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteCouponDaoImpl").finish_non_exhaustive()
    }
}

/// Database row representation of a coupon.
#[derive(Debug, FromRow)]
struct CouponRow {
    id: i64,
    code: String,
    description: String,
    discount_value: String, // stored as TEXT to keep exact decimals
    expiration_date: NaiveDate,
    published: bool,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<CouponRow> for Coupon {
    type Error = CouponError;

    fn try_from(row: CouponRow) -> Result<Self, Self::Error> {
        let discount_value = Decimal::from_str(&row.discount_value).map_err(|e| {
            CouponError::Internal(format!(
                "Invalid discount value '{}' in database: {}",
                row.discount_value, e
            ))
        })?;

        Ok(Coupon {
            id: CouponId::from_i64(row.id),
            code: CouponCode::new_unchecked(row.code),
            description: row.description,
            discount_value,
            expiration_date: row.expiration_date,
            published: row.published,
            created_at: row.created_at,
            deleted_at: row.deleted_at,
        })
    }
}

#[async_trait]
impl CouponDao for SqliteCouponDaoImpl {
    async fn find_by_id(&self, id: CouponId) -> CouponResult<Option<Coupon>> {
        debug!("Finding coupon by id (any state): {}", id);

        let row = sqlx::query_as::<_, CouponRow>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Coupon::try_from).transpose()
    }

    async fn find_active_by_id(&self, id: CouponId) -> CouponResult<Option<Coupon>> {
        debug!("Finding active coupon by id: {}", id);

        let row = sqlx::query_as::<_, CouponRow>(&format!(
            "{SELECT_COLUMNS} WHERE id = ? AND deleted_at IS NULL"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Coupon::try_from).transpose()
    }

    async fn find_all_active(&self) -> CouponResult<Vec<Coupon>> {
        debug!("Listing active coupons");

        let rows = sqlx::query_as::<_, CouponRow>(&format!(
            "{SELECT_COLUMNS} WHERE deleted_at IS NULL ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Coupon::try_from).collect()
    }

    async fn exists_by_code(&self, code: &str) -> CouponResult<bool> {
        let exists: Option<i64> = sqlx::query_scalar("SELECT 1 FROM coupons WHERE code = ? LIMIT 1")
            .bind(code)
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(exists.is_some())
    }

    async fn insert(&self, coupon: &NewCoupon) -> CouponResult<Coupon> {
        debug!("Inserting coupon with code: {}", coupon.code);

        let mut tx = self.pool.inner().begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO coupons (code, description, discount_value, expiration_date, published, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(coupon.code.as_str())
        .bind(&coupon.description)
        .bind(coupon.discount_value.to_string())
        .bind(coupon.expiration_date)
        .bind(coupon.published)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            // the unique constraint catches races the service-level check cannot
            if CouponError::is_unique_violation(&e) {
                CouponError::duplicate_code(coupon.code.as_str())
            } else {
                CouponError::from(e)
            }
        })?;

        let created = Self::fetch_by_id(&mut tx, result.last_insert_rowid()).await?;
        tx.commit().await?;

        Ok(created)
    }

    async fn update(&self, coupon: &Coupon) -> CouponResult<Coupon> {
        debug!("Updating coupon: {}", coupon.id);

        let id = coupon.id.into_inner();
        let mut tx = self.pool.inner().begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE coupons
            SET description = ?, published = ?, deleted_at = ?
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&coupon.description)
        .bind(coupon.published)
        .bind(coupon.deleted_at)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            let deleted_at: Option<Option<DateTime<Utc>>> =
                sqlx::query_scalar("SELECT deleted_at FROM coupons WHERE id = ?")
                    .bind(id)
                    .fetch_optional(&mut *tx)
                    .await?;

            return Err(match deleted_at {
                None => CouponError::not_found("Coupon", coupon.id),
                Some(_) => CouponError::already_removed(coupon.id),
            });
        }

        let updated = Self::fetch_by_id(&mut tx, id).await?;
        tx.commit().await?;

        Ok(updated)
    }
}
