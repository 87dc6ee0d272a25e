use chrono::Utc;

use stockroom_core::{DomainError, DomainResult, ItemId, Needle};
use stockroom_events::{EventBus, InMemoryEventBus, Subscription};

use crate::change::InventoryChange;
use crate::confirm::{ConfirmDelete, DeleteOutcome};
use crate::item::{InventoryItem, ItemPatch};
use crate::stats::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStats};

/// Working set of inventory items plus the active text filter.
///
/// Constructed once per session from seed data and handed to consumers by
/// reference. Observers call [`InventoryQueryStore::subscribe`] and re-read the
/// derived views when a change arrives.
///
/// Invariants:
/// - `filtered_items` preserves insertion order
/// - `stats` always covers the whole collection, never the filtered subset
/// - a failed or declined operation leaves the collection untouched
#[derive(Debug)]
pub struct InventoryQueryStore<B = InMemoryEventBus<InventoryChange>>
where
    B: EventBus<InventoryChange>,
{
    items: Vec<InventoryItem>,
    search_term: String,
    low_stock_threshold: u64,
    bus: B,
}

impl InventoryQueryStore {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self::with_bus(items, InMemoryEventBus::new())
    }
}

impl Default for InventoryQueryStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<B> InventoryQueryStore<B>
where
    B: EventBus<InventoryChange>,
{
    pub fn with_bus(items: Vec<InventoryItem>, bus: B) -> Self {
        Self {
            items,
            search_term: String::new(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            bus,
        }
    }

    pub fn with_low_stock_threshold(mut self, threshold: u64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn low_stock_threshold(&self) -> u64 {
        self.low_stock_threshold
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> Subscription<InventoryChange> {
        self.bus.subscribe()
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Replace the active filter. Empty matches everything.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        tracing::debug!(term = %self.search_term, "inventory search term set");
    }

    /// Items whose title or SKU contains the search term, in insertion order.
    pub fn filtered_items(&self) -> Vec<&InventoryItem> {
        let needle = Needle::new(&self.search_term);
        self.items.iter().filter(|item| item.matches(&needle)).collect()
    }

    /// Statistics over the whole collection (the search term is ignored).
    pub fn stats(&self) -> InventoryStats {
        InventoryStats::compute(&self.items, self.low_stock_threshold)
    }

    /// Prepend a new item (newest first).
    pub fn add_item(&mut self, item: InventoryItem) {
        let item_id = item.id;
        self.items.insert(0, item);
        tracing::info!(%item_id, total = self.items.len(), "inventory item added");
        self.notify(InventoryChange::ItemAdded {
            item_id,
            occurred_at: Utc::now(),
        });
    }

    /// Merge `patch` into the item with `id`.
    pub fn update_item(&mut self, id: ItemId, patch: ItemPatch) -> DomainResult<&InventoryItem> {
        let idx = self.position(id)?;
        if patch.is_empty() {
            tracing::debug!(item_id = %id, "empty inventory patch ignored");
            return Ok(&self.items[idx]);
        }
        patch.apply_to(&mut self.items[idx]);
        tracing::info!(item_id = %id, "inventory item updated");
        self.notify(InventoryChange::ItemUpdated {
            item_id: id,
            occurred_at: Utc::now(),
        });
        Ok(&self.items[idx])
    }

    /// Remove the item with `id` once `gate` confirms.
    ///
    /// The gate is not consulted for unknown ids.
    pub fn delete_item<G>(&mut self, id: ItemId, gate: &G) -> DomainResult<DeleteOutcome>
    where
        G: ConfirmDelete + ?Sized,
    {
        let idx = self.position(id)?;
        if !gate.confirm(&self.items[idx]) {
            tracing::debug!(item_id = %id, "inventory delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        let removed = self.items.remove(idx);
        tracing::info!(item_id = %id, total = self.items.len(), "inventory item removed");
        self.notify(InventoryChange::ItemRemoved {
            item_id: id,
            occurred_at: Utc::now(),
        });
        Ok(DeleteOutcome::Removed(removed))
    }

    /// Add `delta` to both on-hand and available quantity in one step.
    ///
    /// Rejected with `OutOfBounds` if either quantity would drop below zero.
    pub fn adjust_stock(&mut self, id: ItemId, delta: i64) -> DomainResult<&InventoryItem> {
        let idx = self.position(id)?;
        let item = &self.items[idx];

        let quantity = item.quantity.checked_add_signed(delta).ok_or_else(|| {
            DomainError::out_of_bounds(format!("quantity {} cannot change by {delta}", item.quantity))
        })?;
        let available = item.available_quantity.checked_add_signed(delta).ok_or_else(|| {
            DomainError::out_of_bounds(format!(
                "available quantity {} cannot change by {delta}",
                item.available_quantity
            ))
        })?;

        let item = &mut self.items[idx];
        item.quantity = quantity;
        item.available_quantity = available;
        tracing::info!(item_id = %id, delta, quantity, available, "inventory stock adjusted");

        self.notify(InventoryChange::StockAdjusted {
            item_id: id,
            delta,
            occurred_at: Utc::now(),
        });
        Ok(&self.items[idx])
    }

    fn position(&self, id: ItemId) -> DomainResult<usize> {
        self.items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| DomainError::not_found(format!("inventory item {id}")))
    }

    fn notify(&self, change: InventoryChange) {
        if let Err(err) = self.bus.publish(change) {
            tracing::warn!(?err, "failed to publish inventory change");
        }
    }
}
