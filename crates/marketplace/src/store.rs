use chrono::Utc;

use stockroom_events::{EventBus, InMemoryEventBus, Subscription};

use crate::category::CategoryTree;
use crate::change::MarketplaceChange;
use crate::filter::{CategoryFilter, FilterPatch, FilterState};
use crate::listing::MarketplaceListing;
use crate::query::{self, visible_indices};

/// Static catalog plus the user's current [`FilterState`].
///
/// Every criteria update recomputes the visible view from scratch; there is no
/// incremental index. The catalog never changes after construction.
#[derive(Debug)]
pub struct MarketplaceQueryStore<B = InMemoryEventBus<MarketplaceChange>>
where
    B: EventBus<MarketplaceChange>,
{
    catalog: Vec<MarketplaceListing>,
    categories: CategoryTree,
    defaults: FilterState,
    filters: FilterState,
    visible: Vec<usize>,
    bus: B,
}

impl MarketplaceQueryStore {
    pub fn new(catalog: Vec<MarketplaceListing>, categories: CategoryTree) -> Self {
        Self::with_bus(catalog, categories, InMemoryEventBus::new())
    }
}

impl<B> MarketplaceQueryStore<B>
where
    B: EventBus<MarketplaceChange>,
{
    pub fn with_bus(catalog: Vec<MarketplaceListing>, categories: CategoryTree, bus: B) -> Self {
        let defaults = FilterState::default();
        let visible = visible_indices(&catalog, &categories, &defaults);
        Self {
            catalog,
            categories,
            filters: defaults.clone(),
            defaults,
            visible,
            bus,
        }
    }

    /// Replace the state [`Self::reset_all_filters`] restores, and apply it now.
    pub fn with_defaults(mut self, defaults: FilterState) -> Self {
        self.defaults = defaults.clone();
        self.filters = defaults;
        self.visible = visible_indices(&self.catalog, &self.categories, &self.filters);
        self
    }

    pub fn subscribe(&self) -> Subscription<MarketplaceChange> {
        self.bus.subscribe()
    }

    pub fn catalog(&self) -> &[MarketplaceListing] {
        &self.catalog
    }

    pub fn categories(&self) -> &CategoryTree {
        &self.categories
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn defaults(&self) -> &FilterState {
        &self.defaults
    }

    /// The current filtered and sorted view.
    pub fn listings(&self) -> Vec<&MarketplaceListing> {
        self.visible.iter().map(|&idx| &self.catalog[idx]).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Evaluate an arbitrary filter against this catalog without touching the
    /// store's own criteria.
    pub fn query(&self, filter: &FilterState) -> Vec<&MarketplaceListing> {
        query::query(&self.catalog, &self.categories, filter)
    }

    pub fn set_category_filter(&mut self, category: impl Into<CategoryFilter>) {
        self.filters.category = category.into();
        self.recompute();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filters.search_query = query.into();
        self.recompute();
    }

    pub fn update_filters(&mut self, patch: FilterPatch) {
        patch.apply_to(&mut self.filters);
        self.recompute();
    }

    pub fn reset_all_filters(&mut self) {
        self.filters = self.defaults.clone();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.visible = visible_indices(&self.catalog, &self.categories, &self.filters);
        tracing::debug!(
            category = %self.filters.category,
            sort_by = self.filters.sort_by.as_str(),
            visible = self.visible.len(),
            "marketplace view recomputed"
        );

        let change = MarketplaceChange::ViewRecomputed {
            visible: self.visible.len(),
            occurred_at: Utc::now(),
        };
        if let Err(err) = self.bus.publish(change) {
            tracing::warn!(?err, "failed to publish marketplace change");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::filter::{PriceRange, SortKey};
    use crate::listing::{Condition, ListingStatus, SellerType};
    use stockroom_core::{CategoryId, ItemId};

    fn listing(n: u128, title: &str, category: u32, price: u64, rating: f32) -> MarketplaceListing {
        MarketplaceListing {
            id: ItemId::from_u128(n),
            title: title.to_string(),
            inventory_number: format!("MK-{n:02}"),
            description: String::new(),
            price,
            quantity: 3,
            available_quantity: 3,
            category_id: CategoryId(category),
            condition: Condition::New,
            seller_name: "Warehouse Direct".to_string(),
            seller_rating: Some(rating),
            seller_type: Some(SellerType::Enterprise),
            status: ListingStatus::Active,
        }
    }

    fn store() -> MarketplaceQueryStore {
        MarketplaceQueryStore::new(
            vec![
                listing(1, "Bosch Professional Drill 18V", 10, 15_000, 4.5),
                listing(2, "Pallet Rack", 2, 60_000, 3.0),
                listing(3, "Drill Bit Set", 10, 2_500, 4.9),
                listing(4, "Shrink Wrap", 2, 1_200, 2.0),
            ],
            CategoryTree::new(vec![
                Category::root(1, "Tools"),
                Category::child(10, "Power tools", 1),
                Category::root(2, "Warehouse"),
            ]),
        )
    }

    fn visible_ids(store: &MarketplaceQueryStore) -> Vec<u128> {
        store.listings().iter().map(|l| l.id.as_uuid().as_u128()).collect()
    }

    #[test]
    fn starts_with_every_active_listing_in_catalog_order() {
        let store = store();
        assert_eq!(visible_ids(&store), vec![1, 2, 3, 4]);
        assert_eq!(store.filters(), &FilterState::default());
    }

    #[test]
    fn setters_recompute_view() {
        let mut store = store();
        store.set_category_filter(CategoryId(1));
        assert_eq!(visible_ids(&store), vec![1, 3]);

        store.set_search_query("DRILL BIT");
        assert_eq!(visible_ids(&store), vec![3]);
        assert_eq!(store.visible_count(), 1);
    }

    #[test]
    fn update_filters_merges_and_sorts() {
        let mut store = store();
        store.update_filters(FilterPatch {
            min_rating: Some(3.0),
            sort_by: Some(SortKey::PriceDesc),
            ..FilterPatch::default()
        });
        assert_eq!(visible_ids(&store), vec![2, 1, 3]);

        store.update_filters(FilterPatch::sort_by(SortKey::Rating));
        assert_eq!(visible_ids(&store), vec![3, 1, 2]);
        assert_eq!(store.filters().min_rating, 3.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut store = store();
        store.set_category_filter(CategoryId(2));
        store.set_search_query("wrap");
        store.update_filters(FilterPatch::price_range(PriceRange::new(0, 10)));
        assert!(store.listings().is_empty());

        store.reset_all_filters();
        assert_eq!(store.filters(), &FilterState::default());
        assert_eq!(visible_ids(&store), vec![1, 2, 3, 4]);
    }

    #[test]
    fn custom_defaults_apply_on_construction_and_reset() {
        let defaults = FilterState {
            price_range: PriceRange::up_to(20_000),
            ..FilterState::default()
        };
        let mut store = store().with_defaults(defaults.clone());
        assert_eq!(visible_ids(&store), vec![1, 3, 4]);

        store.update_filters(FilterPatch::price_range(PriceRange::FULL));
        assert_eq!(store.visible_count(), 4);

        store.reset_all_filters();
        assert_eq!(store.filters(), &defaults);
        assert_eq!(visible_ids(&store), vec![1, 3, 4]);
    }

    #[test]
    fn ad_hoc_query_leaves_store_criteria_alone() {
        let store = store();
        let filter = FilterState {
            sort_by: SortKey::PriceAsc,
            ..FilterState::default()
        };
        let prices: Vec<u64> = store.query(&filter).iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![1_200, 2_500, 15_000, 60_000]);
        assert_eq!(store.filters().sort_by, SortKey::Newest);
    }

    #[test]
    fn each_recompute_is_published() {
        let mut store = store();
        let changes = store.subscribe();
        store.set_category_filter(CategoryFilter::All);
        store.set_search_query("pallet");

        let visible: Vec<usize> = changes
            .drain()
            .into_iter()
            .map(|c| match c {
                MarketplaceChange::ViewRecomputed { visible, .. } => visible,
            })
            .collect();
        assert_eq!(visible, vec![4, 1]);
    }
}
