//! Domain layer for the order saga.
//!
//! This crate provides the building blocks the ledger and the saga
//! orchestrator operate on:
//! - identifier newtypes (`OrderId`, `UserId`, `Sku`)
//! - the `Money` fixed-point value object
//! - ledger-owned entities (`User`, `InventoryItem`, `PromoCode`)
//! - transient order types (`OrderRequest`, `OrderAmounts`)

pub mod entities;
pub mod ids;
pub mod money;
pub mod request;

pub use entities::{InventoryItem, PromoCode, User};
pub use ids::{OrderId, Sku, UserId};
pub use money::{Money, ParseMoneyError};
pub use request::{OrderAmounts, OrderRequest};
