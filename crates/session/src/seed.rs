//! Seed data loading.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use stockroom_core::Entity;
use stockroom_inventory::InventoryItem;
use stockroom_marketplace::{Category, MarketplaceListing};

const DEMO_SEED: &str = include_str!("../seed/demo.json");

/// Everything a session starts from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub categories: Vec<Category>,
    pub items: Vec<InventoryItem>,
    pub listings: Vec<MarketplaceListing>,
}

impl SeedData {
    /// Bundled demo fixtures.
    pub fn demo() -> anyhow::Result<Self> {
        Self::from_json(DEMO_SEED).context("bundled demo seed is invalid")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid seed file {}", path.display()))
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let seed: Self = serde_json::from_str(text).context("failed to parse seed JSON")?;
        seed.validate()?;
        Ok(seed)
    }

    /// Reject duplicate ids; warn about listings pointing at unknown categories.
    fn validate(&self) -> anyhow::Result<()> {
        if let Some(id) = first_duplicate(&self.items) {
            bail!("duplicate inventory item id {id}");
        }
        if let Some(id) = first_duplicate(&self.listings) {
            bail!("duplicate listing id {id}");
        }
        if let Some(id) = first_duplicate(&self.categories) {
            bail!("duplicate category id {id}");
        }

        let known: HashSet<_> = self.categories.iter().map(|c| c.id).collect();
        for listing in &self.listings {
            if !known.contains(&listing.category_id) {
                tracing::warn!(
                    listing_id = %listing.id,
                    category_id = %listing.category_id,
                    "listing references unknown category"
                );
            }
        }
        Ok(())
    }
}

fn first_duplicate<E: Entity>(records: &[E]) -> Option<&E::Id> {
    let mut seen = HashSet::new();
    records.iter().map(Entity::id).find(|id| !seen.insert(*id))
}
