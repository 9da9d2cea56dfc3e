//! Inventory timeline models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of stock movement behind an inventory event
///
/// Variant order matters: `Purchase` sorts before `Sale`, so events that
/// share a timestamp list the incoming stock first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Purchase,
    Sale,
}

/// A single movement in a product's inventory history
///
/// Derived on demand from the purchase and sale records; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEvent {
    /// Id of the purchase or sale record this event was derived from
    pub id: Uuid,
    pub kind: EventKind,
    pub quantity: i32,
    /// The product's price at the time the history is read
    pub unit_price: Decimal,
    pub occurred_at: DateTime<Utc>,
}

/// Sort events into timeline order: ascending by timestamp, purchases
/// before sales when timestamps tie.
pub fn order_chronologically(events: &mut [InventoryEvent]) {
    events.sort_by_key(|e| (e.occurred_at, e.kind));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(kind: EventKind, quantity: i32, occurred_at: DateTime<Utc>) -> InventoryEvent {
        InventoryEvent {
            id: Uuid::new_v4(),
            kind,
            quantity,
            unit_price: Decimal::from(100),
            occurred_at,
        }
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_orders_by_timestamp_ascending() {
        let mut events = vec![
            event(EventKind::Sale, 2, at(12)),
            event(EventKind::Purchase, 10, at(8)),
            event(EventKind::Purchase, 5, at(10)),
        ];
        order_chronologically(&mut events);

        let times: Vec<_> = events.iter().map(|e| e.occurred_at).collect();
        assert_eq!(times, vec![at(8), at(10), at(12)]);
    }

    #[test]
    fn test_purchase_sorts_before_sale_on_equal_timestamp() {
        let mut events = vec![
            event(EventKind::Sale, 3, at(9)),
            event(EventKind::Purchase, 3, at(9)),
        ];
        order_chronologically(&mut events);

        assert_eq!(events[0].kind, EventKind::Purchase);
        assert_eq!(events[1].kind, EventKind::Sale);
    }

    #[test]
    fn test_ordering_is_idempotent() {
        let mut events = vec![
            event(EventKind::Sale, 1, at(9)),
            event(EventKind::Purchase, 4, at(9)),
            event(EventKind::Purchase, 2, at(7)),
        ];
        order_chronologically(&mut events);
        let first_pass = events.clone();
        order_chronologically(&mut events);

        assert_eq!(events, first_pass);
    }

    #[test]
    fn test_event_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EventKind::Purchase).unwrap(),
            "\"purchase\""
        );
        assert_eq!(serde_json::to_string(&EventKind::Sale).unwrap(), "\"sale\"");
    }
}
