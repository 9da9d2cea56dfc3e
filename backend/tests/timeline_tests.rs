//! Inventory history tests
//!
//! Covers the derived movement history:
//! - Events are ordered by timestamp, purchases before sales on ties
//! - Rebuilding the history without new records changes nothing
//! - The event wire format uses lowercase kind tags

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::{order_chronologically, EventKind, InventoryEvent};
use uuid::Uuid;

fn event(kind: EventKind, quantity: i32, occurred_at: DateTime<Utc>) -> InventoryEvent {
    InventoryEvent {
        id: Uuid::new_v4(),
        kind,
        quantity,
        unit_price: Decimal::new(1250, 2),
        occurred_at,
    }
}

fn hour(offset: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, offset, 0, 0).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Events come back oldest first
    #[test]
    fn test_events_sorted_ascending() {
        let mut events = vec![
            event(EventKind::Sale, 5, hour(15)),
            event(EventKind::Purchase, 20, hour(3)),
            event(EventKind::Sale, 2, hour(9)),
            event(EventKind::Purchase, 10, hour(12)),
        ];
        order_chronologically(&mut events);

        let times: Vec<_> = events.iter().map(|e| e.occurred_at).collect();
        assert_eq!(times, vec![hour(3), hour(9), hour(12), hour(15)]);
    }

    /// A purchase and a sale at the same instant list the purchase first
    #[test]
    fn test_purchase_before_sale_on_tie() {
        let mut events = vec![
            event(EventKind::Sale, 5, hour(8)),
            event(EventKind::Purchase, 5, hour(8)),
            event(EventKind::Sale, 1, hour(8)),
        ];
        order_chronologically(&mut events);

        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![EventKind::Purchase, EventKind::Sale, EventKind::Sale]
        );
    }

    /// Rebuilding the history from the same records yields the same output
    #[test]
    fn test_rebuild_is_idempotent() {
        let mut events = vec![
            event(EventKind::Purchase, 10, hour(2)),
            event(EventKind::Sale, 4, hour(2)),
            event(EventKind::Purchase, 8, hour(1)),
        ];
        order_chronologically(&mut events);
        let first_build = events.clone();

        order_chronologically(&mut events);
        assert_eq!(events, first_build);
    }

    #[test]
    fn test_empty_history_stays_empty() {
        let mut events: Vec<InventoryEvent> = Vec::new();
        order_chronologically(&mut events);
        assert!(events.is_empty());
    }

    /// Wire format: lowercase kind tag, RFC 3339 timestamp, all fields present
    #[test]
    fn test_event_wire_format() {
        let sale = event(EventKind::Sale, 3, hour(0));
        let json = serde_json::to_value(&sale).unwrap();

        assert_eq!(json["kind"], "sale");
        assert_eq!(json["quantity"], 3);
        assert_eq!(json["occurred_at"], "2024-06-01T00:00:00Z");
        assert!(json.get("id").is_some());
        assert!(json.get("unit_price").is_some());

        let purchase = event(EventKind::Purchase, 3, hour(0));
        let json = serde_json::to_value(&purchase).unwrap();
        assert_eq!(json["kind"], "purchase");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn kind_strategy() -> impl Strategy<Value = EventKind> {
        prop_oneof![Just(EventKind::Purchase), Just(EventKind::Sale)]
    }

    /// Events with a small timestamp range so ties actually happen
    fn events_strategy() -> impl Strategy<Value = Vec<InventoryEvent>> {
        prop::collection::vec((kind_strategy(), 1i32..1_000, 0u32..8), 0..40).prop_map(|entries| {
            entries
                .into_iter()
                .map(|(kind, quantity, offset)| event(kind, quantity, hour(offset)))
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Ordering law: ascending timestamps, purchases first on ties
        #[test]
        fn prop_ordering_law(mut events in events_strategy()) {
            order_chronologically(&mut events);

            for pair in events.windows(2) {
                prop_assert!(pair[0].occurred_at <= pair[1].occurred_at);
                if pair[0].occurred_at == pair[1].occurred_at {
                    prop_assert!(pair[0].kind <= pair[1].kind);
                }
            }
        }

        /// Ordering rearranges events but never adds, drops, or edits them
        #[test]
        fn prop_ordering_preserves_events(mut events in events_strategy()) {
            let mut expected: Vec<Uuid> = events.iter().map(|e| e.id).collect();
            expected.sort();

            order_chronologically(&mut events);

            let mut actual: Vec<Uuid> = events.iter().map(|e| e.id).collect();
            actual.sort();
            prop_assert_eq!(actual, expected);
        }

        /// Sorting an already sorted history is a no-op
        #[test]
        fn prop_ordering_idempotent(mut events in events_strategy()) {
            order_chronologically(&mut events);
            let first_pass = events.clone();

            order_chronologically(&mut events);
            prop_assert_eq!(events, first_pass);
        }
    }
}
