use serde::{Deserialize, Serialize};

use stockroom_core::{CategoryId, Entity, ItemId};

/// Physical condition of the offered goods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    LikeNew,
    Used,
    Refurbished,
    /// Any value not listed above. Never matches a condition filter.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SellerType {
    Individual,
    Enterprise,
}

/// Listing lifecycle. Only `Active` listings are ever displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Draft,
    Active,
    Sold,
    Archived,
    /// Unrecognised status; treated as not active.
    #[serde(other)]
    Other,
}

/// Marketplace-facing projection of an inventory item, with seller metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceListing {
    pub id: ItemId,
    pub title: String,
    pub inventory_number: String,
    #[serde(default)]
    pub description: String,
    /// Unit price in smallest currency unit.
    pub price: u64,
    #[serde(default)]
    pub quantity: u64,
    #[serde(default)]
    pub available_quantity: u64,
    pub category_id: CategoryId,
    pub condition: Condition,
    pub seller_name: String,
    /// 0 to 5; absent ratings rank as 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_type: Option<SellerType>,
    pub status: ListingStatus,
}

impl MarketplaceListing {
    pub fn rating(&self) -> f32 {
        self.seller_rating.unwrap_or(0.0)
    }

    pub fn is_active(&self) -> bool {
        self.status == ListingStatus::Active
    }
}

impl Entity for MarketplaceListing {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
