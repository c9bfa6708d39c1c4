//! In-memory ledger for the order saga.
//!
//! The ledger is the sole source of truth: keyed lookup and mutation for
//! users, inventory items, and promo codes, plus an append-only ordered
//! log of event strings. There is no locking; exactly one logical writer
//! is assumed (see the orchestrator crate for the execution model).
//!
//! The ledger never composes domain log lines on behalf of callers:
//! every service that mutates state appends its own descriptive entry.

use std::collections::HashMap;

use domain::{InventoryItem, Money, OrderId, PromoCode, Sku, User, UserId};
use serde::{Deserialize, Serialize};

/// Authoritative in-memory state plus the audit log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    users: HashMap<UserId, User>,
    items: HashMap<Sku, InventoryItem>,
    promos: HashMap<String, PromoCode>,
    log: Vec<String>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    // Seed helpers, used by the entry point and tests.

    /// Adds a user with the given starting balance.
    pub fn add_user(&mut self, id: UserId, balance: Money) {
        self.users.insert(id, User { id, balance });
    }

    /// Adds an inventory item.
    pub fn add_item(&mut self, sku: impl Into<Sku>, price: Money, on_hand: u32) {
        let sku = sku.into();
        self.items.insert(
            sku.clone(),
            InventoryItem {
                sku,
                price,
                on_hand,
            },
        );
    }

    /// Adds a promo code.
    pub fn add_promo(&mut self, code: impl Into<String>, remaining_uses: u32, discount_amount: Money) {
        let code = code.into();
        self.promos.insert(
            code.clone(),
            PromoCode {
                code,
                remaining_uses,
                discount_amount,
            },
        );
    }

    // Keyed access.

    /// Looks up a user by ID.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// Looks up a user for mutation.
    pub fn user_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.get_mut(&id)
    }

    /// Looks up an item by SKU.
    pub fn item(&self, sku: &Sku) -> Option<&InventoryItem> {
        self.items.get(sku)
    }

    /// Looks up an item for mutation.
    pub fn item_mut(&mut self, sku: &Sku) -> Option<&mut InventoryItem> {
        self.items.get_mut(sku)
    }

    /// Looks up a promo code.
    pub fn promo(&self, code: &str) -> Option<&PromoCode> {
        self.promos.get(code)
    }

    /// Looks up a promo code for mutation.
    pub fn promo_mut(&mut self, code: &str) -> Option<&mut PromoCode> {
        self.promos.get_mut(code)
    }

    // Audit log.

    /// Appends a log entry and mirrors it as a tracing event.
    pub fn log(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{message}");
        self.log.push(message);
    }

    /// Returns the full ordered log.
    pub fn logs(&self) -> &[String] {
        &self.log
    }

    /// Returns the log entries tagged with the given order ID, in order.
    pub fn logs_for_order(&self, order_id: OrderId) -> Vec<&str> {
        let tag = format!("[order={order_id}]");
        self.log
            .iter()
            .filter(|line| line.contains(&tag))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_user(UserId::new(1), Money::from_dollars(1000));
        ledger.add_item("ITEM001", Money::from_dollars(100), 10);
        ledger.add_promo("DISCOUNT10", 5, Money::from_dollars(10));
        ledger
    }

    #[test]
    fn seeded_entities_are_retrievable() {
        let ledger = ledger();
        assert_eq!(
            ledger.user(UserId::new(1)).unwrap().balance,
            Money::from_dollars(1000)
        );
        assert_eq!(ledger.item(&Sku::new("ITEM001")).unwrap().on_hand, 10);
        assert_eq!(ledger.promo("DISCOUNT10").unwrap().remaining_uses, 5);
        assert!(ledger.user(UserId::new(99)).is_none());
        assert!(ledger.promo("NOPE").is_none());
    }

    #[test]
    fn mutation_through_keyed_access() {
        let mut ledger = ledger();
        ledger.item_mut(&Sku::new("ITEM001")).unwrap().on_hand -= 2;
        assert_eq!(ledger.item(&Sku::new("ITEM001")).unwrap().on_hand, 8);
    }

    #[test]
    fn log_preserves_append_order() {
        let mut ledger = ledger();
        ledger.log("[order=1] first");
        ledger.log("[order=2] other");
        ledger.log("[order=1] second");
        assert_eq!(
            ledger.logs(),
            &["[order=1] first", "[order=2] other", "[order=1] second"]
        );
        assert_eq!(
            ledger.logs_for_order(OrderId::new(1)),
            vec!["[order=1] first", "[order=1] second"]
        );
    }

    #[test]
    fn ledger_serializes_to_json() {
        let ledger = ledger();
        let json = serde_json::to_value(&ledger).unwrap();
        assert!(json.get("users").is_some());
        assert!(json.get("items").is_some());
        assert!(json.get("promos").is_some());
    }
}
