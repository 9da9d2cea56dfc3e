//! Product management service

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::{validate_price, validate_product_name};

/// Product service for managing the product catalogue
#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

/// Product record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a product
#[derive(Debug, Deserialize)]
pub struct CreateProductInput {
    pub name: String,
    pub price: Decimal,
}

/// Input for updating a product (full replacement)
#[derive(Debug, Deserialize)]
pub struct UpdateProductInput {
    pub name: String,
    pub price: Decimal,
}

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all products
    pub async fn get_products(&self) -> AppResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, created_at, updated_at
            FROM products
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(products)
    }

    /// Get a product by id
    pub async fn get_product(&self, product_id: Uuid) -> AppResult<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        Ok(product)
    }

    /// Create a new product
    pub async fn create_product(&self, input: CreateProductInput) -> AppResult<Product> {
        validate_product_name(&input.name).map_err(|message| AppError::Validation {
            field: "name".to_string(),
            message: message.to_string(),
        })?;
        validate_price(input.price).map_err(|message| AppError::Validation {
            field: "price".to_string(),
            message: message.to_string(),
        })?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price)
            VALUES ($1, $2)
            RETURNING id, name, price, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(input.price)
        .fetch_one(&self.db)
        .await?;

        Ok(product)
    }

    /// Update a product
    pub async fn update_product(
        &self,
        product_id: Uuid,
        input: UpdateProductInput,
    ) -> AppResult<Product> {
        validate_product_name(&input.name).map_err(|message| AppError::Validation {
            field: "name".to_string(),
            message: message.to_string(),
        })?;
        validate_price(input.price).map_err(|message| AppError::Validation {
            field: "price".to_string(),
            message: message.to_string(),
        })?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $1, price = $2, updated_at = NOW()
            WHERE id = $3
            RETURNING id, name, price, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        Ok(product)
    }

    /// Delete a product
    pub async fn delete_product(&self, product_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Product".to_string()));
        }

        Ok(())
    }
}
