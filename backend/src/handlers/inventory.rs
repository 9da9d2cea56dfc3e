//! HTTP handlers for inventory history endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use shared::InventoryEvent;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::inventory::{InventoryService, StockBalance};
use crate::AppState;

/// Get the movement history for a product
pub async fn get_inventory(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> AppResult<Json<Vec<InventoryEvent>>> {
    let service = InventoryService::new(state.db);
    let events = service.get_timeline(product_id).await?;
    Ok(Json(events))
}

/// Reject history requests that do not name a product
pub async fn get_inventory_index() -> AppResult<Json<Vec<InventoryEvent>>> {
    Err(AppError::Validation {
        field: "product_id".to_string(),
        message: "Product id is required".to_string(),
    })
}

/// Get the aggregate stock balance for a product
pub async fn get_stock_balance(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> AppResult<Json<StockBalance>> {
    let service = InventoryService::new(state.db);
    let balance = service.get_balance(product_id).await?;
    Ok(Json(balance))
}
