use serde::{Deserialize, Serialize};

use stockroom_core::{CategoryId, Entity, ItemId, Needle};

/// A stocked item.
///
/// `available_quantity <= quantity` is expected but deliberately not enforced:
/// reserved/allocated stock is tracked elsewhere and patches are applied as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    pub title: String,
    /// SKU.
    pub inventory_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price in smallest currency unit.
    pub price: u64,
    pub quantity: u64,
    pub available_quantity: u64,
    /// Warehouse zone / bin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

impl InventoryItem {
    /// New item with equal on-hand and available quantity.
    pub fn new(
        id: ItemId,
        title: impl Into<String>,
        inventory_number: impl Into<String>,
        price: u64,
        quantity: u64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            inventory_number: inventory_number.into(),
            description: None,
            price,
            quantity,
            available_quantity: quantity,
            location: None,
            category_id: None,
        }
    }

    pub fn with_available(mut self, available_quantity: u64) -> Self {
        self.available_quantity = available_quantity;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Title or SKU contains the needle.
    pub fn matches(&self, needle: &Needle) -> bool {
        needle.matches_any([self.title.as_str(), self.inventory_number.as_str()])
    }

    /// Stock value of this line (`price × quantity`, saturating).
    pub fn line_value(&self) -> u64 {
        self.price.saturating_mul(self.quantity)
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Partial update merged into an existing item. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub inventory_number: Option<String>,
    pub description: Option<String>,
    pub price: Option<u64>,
    pub quantity: Option<u64>,
    pub available_quantity: Option<u64>,
    pub location: Option<String>,
    pub category_id: Option<CategoryId>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `item`. No cross-field validation happens here.
    pub fn apply_to(self, item: &mut InventoryItem) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(sku) = self.inventory_number {
            item.inventory_number = sku;
        }
        if let Some(description) = self.description {
            item.description = Some(description);
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(available) = self.available_quantity {
            item.available_quantity = available;
        }
        if let Some(location) = self.location {
            item.location = Some(location);
        }
        if let Some(category_id) = self.category_id {
            item.category_id = Some(category_id);
        }
    }
}
