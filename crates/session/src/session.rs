use stockroom_ai::{Assistant, AssistantBackend};
use stockroom_core::{CategoryId, ItemId};
use stockroom_inventory::{InventoryItem, InventoryQueryStore};
use stockroom_marketplace::{CategoryTree, MarketplaceQueryStore};

use crate::config::SessionConfig;
use crate::seed::SeedData;

/// The two query stores for one dashboard session.
///
/// Stores are independent; the session only builds them and offers flows that
/// touch the AI assistant.
#[derive(Debug)]
pub struct Session {
    inventory: InventoryQueryStore,
    marketplace: MarketplaceQueryStore,
}

impl Session {
    /// Load seed data as configured and build the stores.
    pub fn open(config: &SessionConfig) -> anyhow::Result<Self> {
        let seed = match &config.seed_path {
            Some(path) => SeedData::load(path)?,
            None => SeedData::demo()?,
        };
        Ok(Self::from_seed(seed, config))
    }

    pub fn from_seed(seed: SeedData, config: &SessionConfig) -> Self {
        let SeedData {
            categories,
            items,
            listings,
        } = seed;

        tracing::info!(
            items = items.len(),
            listings = listings.len(),
            categories = categories.len(),
            "session opened"
        );

        let inventory =
            InventoryQueryStore::new(items).with_low_stock_threshold(config.low_stock_threshold);
        let marketplace = MarketplaceQueryStore::new(listings, CategoryTree::new(categories))
            .with_defaults(config.default_filters());

        Self {
            inventory,
            marketplace,
        }
    }

    pub fn inventory(&self) -> &InventoryQueryStore {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut InventoryQueryStore {
        &mut self.inventory
    }

    pub fn marketplace(&self) -> &MarketplaceQueryStore {
        &self.marketplace
    }

    pub fn marketplace_mut(&mut self) -> &mut MarketplaceQueryStore {
        &mut self.marketplace
    }

    /// AI-assisted intake: identify the item, ask for a SKU, and add it to the
    /// inventory (newest first). Assistant failures fall back to placeholder
    /// values, so intake always produces an item.
    pub fn intake_item<B>(&mut self, assistant: &Assistant<B>, description: &str, quantity: u64) -> ItemId
    where
        B: AssistantBackend,
    {
        let draft = assistant.identify_item(description);
        let sku = assistant.generate_sku(&draft.title, draft.category.as_deref());

        let mut item = InventoryItem::new(
            ItemId::new(),
            draft.title,
            sku,
            draft.estimated_price.unwrap_or(0),
            quantity,
        );
        if !draft.description.is_empty() {
            item.description = Some(draft.description);
        }
        if let Some(category_id) = draft.category.as_deref().and_then(|name| self.category_by_name(name)) {
            item = item.with_category(category_id);
        }

        let id = item.id;
        self.inventory.add_item(item);
        id
    }

    fn category_by_name(&self, name: &str) -> Option<CategoryId> {
        let name = name.trim();
        self.marketplace
            .categories()
            .categories()
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .map(|c| c.id)
    }
}
