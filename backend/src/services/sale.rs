//! Sale (stock-out) recording service
//!
//! Sale creation is the only guarded write: the stock check and the insert
//! run in one transaction holding a row lock on the product, so concurrent
//! sales of the same product are validated one at a time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::{validate_quantity, StockLevel};

/// Sale service for recording outgoing stock
#[derive(Clone)]
pub struct SaleService {
    db: PgPool,
}

/// Sale record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Sale {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub sale_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input for recording a sale
#[derive(Debug, Deserialize)]
pub struct CreateSaleInput {
    pub product_id: Uuid,
    pub quantity: i32,
    pub sale_date: DateTime<Utc>,
}

impl SaleService {
    /// Create a new SaleService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a sale, rejecting it if the product lacks the stock
    pub async fn create_sale(&self, input: CreateSaleInput) -> AppResult<Sale> {
        validate_quantity(input.quantity).map_err(|message| AppError::Validation {
            field: "quantity".to_string(),
            message: message.to_string(),
        })?;

        let mut tx = self.db.begin().await?;

        // Lock the product row so the aggregate reads and the insert see a
        // stable stock level even under concurrent sales
        let locked = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM products WHERE id = $1 FOR UPDATE",
        )
        .bind(input.product_id)
        .fetch_optional(&mut *tx)
        .await?;

        if locked.is_none() {
            return Err(AppError::Validation {
                field: "product_id".to_string(),
                message: "Referenced product does not exist".to_string(),
            });
        }

        let purchased = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(quantity), 0) FROM purchases WHERE product_id = $1",
        )
        .bind(input.product_id)
        .fetch_one(&mut *tx)
        .await?;

        let sold = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(quantity), 0) FROM sales WHERE product_id = $1",
        )
        .bind(input.product_id)
        .fetch_one(&mut *tx)
        .await?;

        let level = StockLevel::new(purchased, sold);
        if !level.admits(i64::from(input.quantity)) {
            // Dropping the transaction rolls it back
            return Err(AppError::StockExceeded);
        }

        let sale = sqlx::query_as::<_, Sale>(
            r#"
            INSERT INTO sales (product_id, quantity, sale_date)
            VALUES ($1, $2, $3)
            RETURNING id, product_id, quantity, sale_date, created_at
            "#,
        )
        .bind(input.product_id)
        .bind(input.quantity)
        .bind(input.sale_date)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(sale)
    }
}
