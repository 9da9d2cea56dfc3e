//! Validation utilities for the Stockroom inventory backend

use rust_decimal::Decimal;

/// Maximum accepted length for a product name
pub const MAX_PRODUCT_NAME_LEN: usize = 100;

/// Validate a product name (non-empty, bounded length)
pub fn validate_product_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Product name cannot be empty");
    }
    if name.len() > MAX_PRODUCT_NAME_LEN {
        return Err("Product name must be at most 100 characters");
    }
    Ok(())
}

/// Validate a product price (zero allowed, negative rejected)
pub fn validate_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Price cannot be negative");
    }
    Ok(())
}

/// Validate a movement quantity (strictly positive)
pub fn validate_quantity(quantity: i32) -> Result<(), &'static str> {
    if quantity <= 0 {
        return Err("Quantity must be positive");
    }
    Ok(())
}
