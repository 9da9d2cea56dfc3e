//! Stock admission rule
//!
//! A sale is only admitted while cumulative sold quantity stays within
//! cumulative purchased quantity for the product.

/// Rejection reason surfaced to clients when a sale would over-sell
pub const STOCK_EXCEEDED_REASON: &str = "stock quantity would be exceeded";

/// Aggregate stock position for a single product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockLevel {
    pub purchased: i64,
    pub sold: i64,
}

impl StockLevel {
    pub fn new(purchased: i64, sold: i64) -> Self {
        Self { purchased, sold }
    }

    /// Units still on hand
    pub fn available(&self) -> i64 {
        self.purchased - self.sold
    }

    /// Whether a sale of `quantity` units fits the remaining stock.
    /// The boundary is inclusive: stock may reach exactly zero.
    pub fn admits(&self, quantity: i64) -> bool {
        self.sold + quantity <= self.purchased
    }

    /// Record an admitted sale
    pub fn apply_sale(&mut self, quantity: i64) {
        self.sold += quantity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admits_within_stock() {
        let level = StockLevel::new(10, 7);
        assert!(level.admits(1));
        assert!(level.admits(2));
    }

    #[test]
    fn test_admits_down_to_exactly_zero() {
        let level = StockLevel::new(10, 7);
        assert!(level.admits(3));
        assert!(!level.admits(4));
    }

    #[test]
    fn test_rejects_when_nothing_purchased() {
        let level = StockLevel::new(0, 0);
        assert!(!level.admits(1));
    }

    #[test]
    fn test_available_tracks_applied_sales() {
        let mut level = StockLevel::new(10, 0);
        level.apply_sale(4);
        level.apply_sale(3);
        assert_eq!(level.available(), 3);
        assert_eq!(level, StockLevel::new(10, 7));
    }
}
