//! Saga error types.
//!
//! Failures come in two tiers. [`ValidationError`] is raised before any
//! step runs and is returned to the caller directly; nothing needs
//! compensation. [`StepError`] happens inside a step, is caught by the
//! orchestrator, drives the compensation path, and reaches the caller
//! only as a `false` outcome plus log entries.

use domain::{Money, Sku, UserId};
use thiserror::Error;

use crate::step::StepName;

/// Pre-saga validation failure; a hard error, distinct from a failed saga.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Quantity must be greater than zero.
    #[error("qty must be > 0")]
    InvalidQuantity(u32),

    /// The requesting user does not exist.
    #[error("User {0} not found")]
    UserNotFound(UserId),

    /// The requested item does not exist, so no base amount can be computed.
    #[error("Item {0} not found")]
    ItemNotFound(Sku),
}

/// Failure inside a saga step; triggers reverse compensation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// The promo code is unknown.
    #[error("Promo {0} not found")]
    PromoNotFound(String),

    /// The promo code has no remaining uses.
    #[error("Promo {0} has no remaining uses")]
    PromoExhausted(String),

    /// The SKU is unknown.
    #[error("Item {0} not found")]
    ItemNotFound(Sku),

    /// Not enough units on hand.
    #[error("Insufficient inventory for {sku}: have={on_hand}, need={requested}")]
    InsufficientInventory {
        sku: Sku,
        on_hand: u32,
        requested: u32,
    },

    /// The user to charge is unknown.
    #[error("User {0} not found")]
    UserNotFound(UserId),

    /// The user balance does not cover the final amount.
    #[error("Insufficient balance for user {user_id}: have={balance}, need={required}")]
    InsufficientBalance {
        user_id: UserId,
        balance: Money,
        required: Money,
    },

    /// A test-only injected fault fired before the step ran.
    #[error("Artificial failure at step {0}")]
    InjectedFault(StepName),
}
