//! User-selected constraints over the catalog.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::{CategoryId, DomainError};

use crate::listing::{Condition, SellerType};

/// Category constraint: everything, or one category plus its direct children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(CategoryId),
}

impl From<CategoryId> for CategoryFilter {
    fn from(id: CategoryId) -> Self {
        CategoryFilter::Category(id)
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    /// Accepts `"all"` or a numeric category id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<CategoryId>().map(CategoryFilter::Category)
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Category(id) => core::fmt::Display::fmt(id, f),
        }
    }
}

/// Inclusive price bounds in smallest currency unit.
///
/// A range with `min > max` is accepted and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub const FULL: PriceRange = PriceRange { min: 0, max: u64::MAX };

    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Everything from zero up to and including `max`.
    pub fn up_to(max: u64) -> Self {
        Self { min: 0, max }
    }

    pub fn contains(&self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Listing order. `Newest` keeps catalog order, which is newest-first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "rating")]
    Rating,
    #[default]
    #[serde(rename = "newest")]
    Newest,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
        }
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "rating" => Ok(SortKey::Rating),
            "newest" => Ok(SortKey::Newest),
            other => Err(DomainError::validation(format!("unknown sort key: {other}"))),
        }
    }
}

/// The full set of constraints applied to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub search_query: String,
    pub price_range: PriceRange,
    pub min_rating: f32,
    /// Empty means unconstrained.
    pub conditions: BTreeSet<Condition>,
    /// Empty means unconstrained.
    pub seller_types: BTreeSet<SellerType>,
    pub sort_by: SortKey,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            search_query: String::new(),
            price_range: PriceRange::FULL,
            min_rating: 0.0,
            conditions: BTreeSet::new(),
            seller_types: BTreeSet::new(),
            sort_by: SortKey::Newest,
        }
    }
}

impl FilterState {
    /// No constraint narrows the catalog beyond the status gate.
    pub fn is_unconstrained(&self) -> bool {
        let defaults = Self::default();
        self.category == defaults.category
            && self.search_query.is_empty()
            && self.price_range == defaults.price_range
            && self.min_rating <= 0.0
            && self.conditions.is_empty()
            && self.seller_types.is_empty()
    }
}

/// Merge-style update of a [`FilterState`]. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub category: Option<CategoryFilter>,
    pub search_query: Option<String>,
    pub price_range: Option<PriceRange>,
    pub min_rating: Option<f32>,
    pub conditions: Option<BTreeSet<Condition>>,
    pub seller_types: Option<BTreeSet<SellerType>>,
    pub sort_by: Option<SortKey>,
}

impl FilterPatch {
    pub fn sort_by(sort_by: SortKey) -> Self {
        Self {
            sort_by: Some(sort_by),
            ..Self::default()
        }
    }

    pub fn price_range(range: PriceRange) -> Self {
        Self {
            price_range: Some(range),
            ..Self::default()
        }
    }

    pub fn apply_to(self, state: &mut FilterState) {
        if let Some(category) = self.category {
            state.category = category;
        }
        if let Some(query) = self.search_query {
            state.search_query = query;
        }
        if let Some(range) = self.price_range {
            state.price_range = range;
        }
        if let Some(rating) = self.min_rating {
            state.min_rating = rating;
        }
        if let Some(conditions) = self.conditions {
            state.conditions = conditions;
        }
        if let Some(seller_types) = self.seller_types {
            state.seller_types = seller_types;
        }
        if let Some(sort_by) = self.sort_by {
            state.sort_by = sort_by;
        }
    }
}
