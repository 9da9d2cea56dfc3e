//! Inventory history service
//!
//! Builds the per-product movement history from the purchase and sale
//! records, and exposes the aggregate stock balance behind the sale check.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::{order_chronologically, EventKind, InventoryEvent, StockLevel};

/// Inventory service for derived stock views
#[derive(Clone)]
pub struct InventoryService {
    db: PgPool,
}

/// Row for purchase/sale movement queries
#[derive(Debug, FromRow)]
struct MovementRow {
    id: Uuid,
    quantity: i32,
    occurred_at: DateTime<Utc>,
}

/// Aggregate stock position for a product
#[derive(Debug, Clone, Serialize)]
pub struct StockBalance {
    pub product_id: Uuid,
    pub purchased: i64,
    pub sold: i64,
    pub available: i64,
}

/// Row for the balance query
#[derive(Debug, FromRow)]
struct BalanceRow {
    id: Uuid,
    total_purchased: i64,
    total_sold: i64,
}

impl InventoryService {
    /// Create a new InventoryService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Build the movement history for a product, oldest event first
    ///
    /// The history is recomputed from the records on every call. Every
    /// event carries the product's price as it stands now, not the price
    /// at the time the movement happened. An unknown product id reads as
    /// an empty history.
    pub async fn get_timeline(&self, product_id: Uuid) -> AppResult<Vec<InventoryEvent>> {
        let price = sqlx::query_scalar::<_, Decimal>("SELECT price FROM products WHERE id = $1")
            .bind(product_id)
            .fetch_optional(&self.db)
            .await?;

        let Some(unit_price) = price else {
            return Ok(Vec::new());
        };

        let purchases = sqlx::query_as::<_, MovementRow>(
            r#"
            SELECT id, quantity, purchase_date AS occurred_at
            FROM purchases
            WHERE product_id = $1
            ORDER BY purchase_date ASC, id ASC
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.db)
        .await?;

        let sales = sqlx::query_as::<_, MovementRow>(
            r#"
            SELECT id, quantity, sale_date AS occurred_at
            FROM sales
            WHERE product_id = $1
            ORDER BY sale_date ASC, id ASC
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.db)
        .await?;

        let mut events: Vec<InventoryEvent> = purchases
            .into_iter()
            .map(|row| Self::to_event(row, EventKind::Purchase, unit_price))
            .chain(
                sales
                    .into_iter()
                    .map(|row| Self::to_event(row, EventKind::Sale, unit_price)),
            )
            .collect();

        order_chronologically(&mut events);

        Ok(events)
    }

    /// Get the aggregate stock balance for a product
    pub async fn get_balance(&self, product_id: Uuid) -> AppResult<StockBalance> {
        let row = sqlx::query_as::<_, BalanceRow>(
            r#"
            SELECT p.id,
                   COALESCE((SELECT SUM(pu.quantity) FROM purchases pu WHERE pu.product_id = p.id), 0) AS total_purchased,
                   COALESCE((SELECT SUM(s.quantity) FROM sales s WHERE s.product_id = p.id), 0) AS total_sold
            FROM products p
            WHERE p.id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        let level = StockLevel::new(row.total_purchased, row.total_sold);

        Ok(StockBalance {
            product_id: row.id,
            purchased: level.purchased,
            sold: level.sold,
            available: level.available(),
        })
    }

    fn to_event(row: MovementRow, kind: EventKind, unit_price: Decimal) -> InventoryEvent {
        InventoryEvent {
            id: row.id,
            kind,
            quantity: row.quantity,
            unit_price,
            occurred_at: row.occurred_at,
        }
    }
}
