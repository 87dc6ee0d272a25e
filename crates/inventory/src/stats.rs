//! Aggregate figures over the full inventory collection.

use serde::{Deserialize, Serialize};

use crate::item::InventoryItem;

/// Items with fewer available units than this count as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 10;

/// Derived inventory statistics. Never stored; recomputed on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    /// `Σ price × quantity`, saturating.
    pub total_value: u64,
    pub low_stock_count: usize,
    pub total_items: usize,
}

impl InventoryStats {
    pub fn compute<'a>(items: impl IntoIterator<Item = &'a InventoryItem>, low_stock_threshold: u64) -> Self {
        items.into_iter().fold(Self::default(), |mut acc, item| {
            acc.total_value = acc.total_value.saturating_add(item.line_value());
            if item.available_quantity < low_stock_threshold {
                acc.low_stock_count += 1;
            }
            acc.total_items += 1;
            acc
        })
    }
}
