//! Purchase (stock-in) recording service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::validate_quantity;

/// Purchase service for recording incoming stock
#[derive(Clone)]
pub struct PurchaseService {
    db: PgPool,
}

/// Purchase record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Purchase {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub purchase_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input for recording a purchase
#[derive(Debug, Deserialize)]
pub struct CreatePurchaseInput {
    pub product_id: Uuid,
    pub quantity: i32,
    pub purchase_date: DateTime<Utc>,
}

impl PurchaseService {
    /// Create a new PurchaseService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a purchase
    pub async fn create_purchase(&self, input: CreatePurchaseInput) -> AppResult<Purchase> {
        validate_quantity(input.quantity).map_err(|message| AppError::Validation {
            field: "quantity".to_string(),
            message: message.to_string(),
        })?;

        // A purchase must reference an existing product
        let product_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(input.product_id)
                .fetch_one(&self.db)
                .await?;

        if !product_exists {
            return Err(AppError::Validation {
                field: "product_id".to_string(),
                message: "Referenced product does not exist".to_string(),
            });
        }

        let purchase = sqlx::query_as::<_, Purchase>(
            r#"
            INSERT INTO purchases (product_id, quantity, purchase_date)
            VALUES ($1, $2, $3)
            RETURNING id, product_id, quantity, purchase_date, created_at
            "#,
        )
        .bind(input.product_id)
        .bind(input.quantity)
        .bind(input.purchase_date)
        .fetch_one(&self.db)
        .await?;

        Ok(purchase)
    }
}
