//! Inventory query store.
//!
//! Holds the working set of inventory items, a free-text filter over title and
//! SKU, and derives aggregate stock statistics. Pure in-memory state; every
//! operation runs to completion synchronously.

pub mod change;
pub mod confirm;
pub mod item;
pub mod stats;
pub mod store;

pub use change::InventoryChange;
pub use confirm::{ConfirmDelete, DeleteOutcome};
pub use item::{InventoryItem, ItemPatch};
pub use stats::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStats};
pub use store::InventoryQueryStore;
