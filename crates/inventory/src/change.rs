use chrono::{DateTime, Utc};

use stockroom_core::ItemId;
use stockroom_events::Event;

/// Notification published by [`crate::InventoryQueryStore`] after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryChange {
    ItemAdded {
        item_id: ItemId,
        occurred_at: DateTime<Utc>,
    },
    ItemUpdated {
        item_id: ItemId,
        occurred_at: DateTime<Utc>,
    },
    ItemRemoved {
        item_id: ItemId,
        occurred_at: DateTime<Utc>,
    },
    StockAdjusted {
        item_id: ItemId,
        delta: i64,
        occurred_at: DateTime<Utc>,
    },
}

impl InventoryChange {
    pub fn item_id(&self) -> ItemId {
        match self {
            InventoryChange::ItemAdded { item_id, .. }
            | InventoryChange::ItemUpdated { item_id, .. }
            | InventoryChange::ItemRemoved { item_id, .. }
            | InventoryChange::StockAdjusted { item_id, .. } => *item_id,
        }
    }
}

impl Event for InventoryChange {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryChange::ItemAdded { .. } => "inventory.item.added",
            InventoryChange::ItemUpdated { .. } => "inventory.item.updated",
            InventoryChange::ItemRemoved { .. } => "inventory.item.removed",
            InventoryChange::StockAdjusted { .. } => "inventory.item.stock_adjusted",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryChange::ItemAdded { occurred_at, .. }
            | InventoryChange::ItemUpdated { occurred_at, .. }
            | InventoryChange::ItemRemoved { occurred_at, .. }
            | InventoryChange::StockAdjusted { occurred_at, .. } => *occurred_at,
        }
    }
}
