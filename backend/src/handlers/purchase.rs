//! HTTP handlers for purchase recording endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::purchase::{CreatePurchaseInput, Purchase, PurchaseService};
use crate::AppState;

/// Record a purchase
pub async fn create_purchase(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreatePurchaseInput>,
) -> AppResult<(StatusCode, Json<Purchase>)> {
    let service = PurchaseService::new(state.db);
    let purchase = service.create_purchase(input).await?;

    tracing::info!(
        user_id = %current_user.0.user_id,
        purchase_id = %purchase.id,
        product_id = %purchase.product_id,
        "purchase recorded"
    );

    Ok((StatusCode::CREATED, Json(purchase)))
}
