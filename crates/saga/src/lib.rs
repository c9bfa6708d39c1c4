//! Saga pattern implementation for order placement.
//!
//! This crate provides the orchestrated Saga at the heart of the system:
//! a multi-step order transaction composed of local mutations against the
//! shared [`ledger::Ledger`], each paired with a compensating action.
//!
//! The order saga runs these steps in sequence:
//! 1. Reserve a promo use (only when the request carries a promo code)
//! 2. Reserve inventory
//! 3. Charge the user balance
//! 4. Finalize the order
//!
//! If any step fails, previously completed steps are compensated in
//! reverse order and the saga reports failure through its boolean
//! outcome; pre-saga validation problems are surfaced as hard errors
//! instead.

pub mod error;
pub mod fault;
pub mod orchestrator;
pub mod services;
pub mod state;
pub mod step;

pub use error::{StepError, ValidationError};
pub use fault::Fault;
pub use orchestrator::SagaOrchestrator;
pub use services::{BillingService, DiscountService, InventoryService};
pub use state::SagaState;
pub use step::{Step, StepName, UnknownStep};
