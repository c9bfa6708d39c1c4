//! Transient order types.

use serde::{Deserialize, Serialize};

use crate::ids::{OrderId, Sku, UserId};
use crate::money::Money;

/// Caller-supplied request that triggers one saga run.
///
/// Never persisted; the ledger only records the effects the request
/// causes against users, items, and promos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub order_id: OrderId,
    pub user_id: UserId,
    pub sku: Sku,
    pub qty: u32,
    pub promo_code: Option<String>,
}

impl OrderRequest {
    /// Creates a request without a promo code.
    pub fn new(order_id: OrderId, user_id: UserId, sku: impl Into<Sku>, qty: u32) -> Self {
        Self {
            order_id,
            user_id,
            sku: sku.into(),
            qty,
            promo_code: None,
        }
    }

    /// Attaches a promo code to the request.
    pub fn with_promo(mut self, code: impl Into<String>) -> Self {
        self.promo_code = Some(code.into());
        self
    }
}

/// Amounts computed by the orchestrator before any step runs.
///
/// Derived, never stored: `final_amount = base_amount - discount_amount`,
/// all three exact under cent quantization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAmounts {
    pub base_amount: Money,
    pub discount_amount: Money,
    pub final_amount: Money,
}
