//! Confirmation gate for destructive actions.

use crate::item::InventoryItem;

/// Blocking yes/no prompt consulted before an item is removed.
///
/// Any `Fn(&InventoryItem) -> bool` closure works as a gate.
pub trait ConfirmDelete {
    fn confirm(&self, item: &InventoryItem) -> bool;
}

impl<F> ConfirmDelete for F
where
    F: Fn(&InventoryItem) -> bool,
{
    fn confirm(&self, item: &InventoryItem) -> bool {
        self(item)
    }
}

/// Result of [`crate::InventoryQueryStore::delete_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user confirmed; the removed item is handed back.
    Removed(InventoryItem),
    /// The user declined; nothing changed.
    Declined,
}

impl DeleteOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, DeleteOutcome::Removed(_))
    }
}
