//! Inventory service: stock reservation and release.

use domain::{OrderId, Sku};
use ledger::Ledger;

use crate::error::StepError;

/// Operations over inventory items.
pub struct InventoryService;

impl InventoryService {
    /// Takes `qty` units of a SKU off hand.
    pub fn reserve_inventory(
        ledger: &mut Ledger,
        order_id: OrderId,
        sku: &Sku,
        qty: u32,
    ) -> Result<(), StepError> {
        let item = ledger
            .item_mut(sku)
            .ok_or_else(|| StepError::ItemNotFound(sku.clone()))?;
        if item.on_hand < qty {
            return Err(StepError::InsufficientInventory {
                sku: sku.clone(),
                on_hand: item.on_hand,
                requested: qty,
            });
        }
        item.on_hand -= qty;
        let on_hand = item.on_hand;
        ledger.log(format!(
            "[order={order_id}] inventory reserved: {sku} qty={qty} (on_hand={on_hand})"
        ));
        Ok(())
    }

    /// Puts `qty` units of a SKU back on hand; no-op when the SKU is unknown.
    pub fn release_inventory(ledger: &mut Ledger, order_id: OrderId, sku: &Sku, qty: u32) {
        let Some(item) = ledger.item_mut(sku) else {
            return;
        };
        item.on_hand += qty;
        let on_hand = item.on_hand;
        ledger.log(format!(
            "[order={order_id}] inventory released: {sku} qty={qty} (on_hand={on_hand})"
        ));
    }
}
