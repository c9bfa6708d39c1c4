//! Domain services: validated single mutations against the ledger.
//!
//! Each service wraps one resource type and offers a forward/inverse pair.
//! A forward call either fails without touching the ledger or mutates it
//! and appends exactly one `[order=<id>] <description>` log line. Inverse
//! calls tolerate resources that no longer (or never) existed, because
//! compensation must not fail on a since-removed entity.

pub mod billing;
pub mod discount;
pub mod inventory;

pub use billing::BillingService;
pub use discount::DiscountService;
pub use inventory::InventoryService;
