//! Ledger-owned entities.
//!
//! These are created once at seed time and mutated only by domain
//! services while a saga runs. There is deliberately no `Order` entity:
//! an order exists only as a sequence of effects against these three.

use serde::{Deserialize, Serialize};

use crate::ids::{Sku, UserId};
use crate::money::Money;

/// A user account with a spendable balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub balance: Money,
}

/// A stocked item with a unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub sku: Sku,
    pub price: Money,
    /// Units on hand; the type keeps it non-negative.
    pub on_hand: u32,
}

/// A promotion code with a limited number of uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoCode {
    pub code: String,
    pub remaining_uses: u32,
    pub discount_amount: Money,
}
