//! Saga steps: a closed set of named forward/compensate pairs.

use std::str::FromStr;

use domain::{Money, OrderId, Sku, UserId};
use ledger::Ledger;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::StepError;
use crate::services::{BillingService, DiscountService, InventoryService};

/// Names of the saga steps, used for log bracketing and fault injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepName {
    ReservePromoUse,
    ReserveInventory,
    ChargeUserBalance,
    FinalizeOrder,
}

impl StepName {
    /// Returns the step name as it appears in log entries.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepName::ReservePromoUse => "ReservePromoUse",
            StepName::ReserveInventory => "ReserveInventory",
            StepName::ChargeUserBalance => "ChargeUserBalance",
            StepName::FinalizeOrder => "FinalizeOrder",
        }
    }
}

impl std::fmt::Display for StepName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string does not name a saga step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown step name: {0:?}")]
pub struct UnknownStep(String);

impl FromStr for StepName {
    type Err = UnknownStep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ReservePromoUse" => Ok(StepName::ReservePromoUse),
            "ReserveInventory" => Ok(StepName::ReserveInventory),
            "ChargeUserBalance" => Ok(StepName::ChargeUserBalance),
            "FinalizeOrder" => Ok(StepName::FinalizeOrder),
            other => Err(UnknownStep(other.to_string())),
        }
    }
}

/// One unit of the saga: a forward action paired with its inverse.
///
/// Each variant is bound at construction to its parameters and to exactly
/// one domain service call. The orchestrator, not the step, emits the
/// `STEP`/`COMPENSATE` bracketing log lines around each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Consume one promo use; inverse gives it back.
    ReservePromoUse { code: String },
    /// Take units off hand; inverse puts them back.
    ReserveInventory { sku: Sku, qty: u32 },
    /// Deduct the final amount; inverse refunds it.
    ChargeUserBalance { user_id: UserId, amount: Money },
    /// Record that the order went through. No real inverse exists; the
    /// compensation only logs that fact.
    FinalizeOrder,
}

impl Step {
    /// Returns this step's name.
    pub fn name(&self) -> StepName {
        match self {
            Step::ReservePromoUse { .. } => StepName::ReservePromoUse,
            Step::ReserveInventory { .. } => StepName::ReserveInventory,
            Step::ChargeUserBalance { .. } => StepName::ChargeUserBalance,
            Step::FinalizeOrder => StepName::FinalizeOrder,
        }
    }

    /// Runs the forward action against the ledger.
    pub fn execute(&self, ledger: &mut Ledger, order_id: OrderId) -> Result<(), StepError> {
        match self {
            Step::ReservePromoUse { code } => {
                DiscountService::reserve_promo_use(ledger, order_id, code)
            }
            Step::ReserveInventory { sku, qty } => {
                InventoryService::reserve_inventory(ledger, order_id, sku, *qty)
            }
            Step::ChargeUserBalance { user_id, amount } => {
                BillingService::charge_user(ledger, order_id, *user_id, *amount)
            }
            Step::FinalizeOrder => {
                ledger.log(format!("[order={order_id}] order finalized"));
                Ok(())
            }
        }
    }

    /// Runs the compensating action against the ledger.
    pub fn compensate(&self, ledger: &mut Ledger, order_id: OrderId) -> Result<(), StepError> {
        match self {
            Step::ReservePromoUse { code } => {
                DiscountService::release_promo_use(ledger, order_id, code);
                Ok(())
            }
            Step::ReserveInventory { sku, qty } => {
                InventoryService::release_inventory(ledger, order_id, sku, *qty);
                Ok(())
            }
            Step::ChargeUserBalance { user_id, amount } => {
                BillingService::refund_user(ledger, order_id, *user_id, *amount);
                Ok(())
            }
            Step::FinalizeOrder => {
                ledger.log(format!("[order={order_id}] finalize has no compensation"));
                Ok(())
            }
        }
    }
}
