//! Filter pipeline and sort over the catalog.
//!
//! All predicates are ANDed; a predicate whose constraint is empty (or `All`)
//! is vacuously true. The status gate is always on.

use std::cmp::Ordering;

use stockroom_core::Needle;

use crate::category::CategoryTree;
use crate::filter::{CategoryFilter, FilterState, SortKey};
use crate::listing::{Condition, MarketplaceListing};

/// Ordered listings matching `filter`.
pub fn query<'a>(
    catalog: &'a [MarketplaceListing],
    categories: &CategoryTree,
    filter: &FilterState,
) -> Vec<&'a MarketplaceListing> {
    visible_indices(catalog, categories, filter)
        .into_iter()
        .map(|idx| &catalog[idx])
        .collect()
}

/// Catalog positions of matching listings, sorted per `filter.sort_by`.
pub(crate) fn visible_indices(
    catalog: &[MarketplaceListing],
    categories: &CategoryTree,
    filter: &FilterState,
) -> Vec<usize> {
    let needle = Needle::new(&filter.search_query);
    let mut visible: Vec<usize> = catalog
        .iter()
        .enumerate()
        .filter(|(_, listing)| matches(listing, categories, filter, &needle))
        .map(|(idx, _)| idx)
        .collect();

    // `sort_by` is stable: ties keep catalog order.
    if let Some(cmp) = comparator(filter.sort_by) {
        visible.sort_by(|&a, &b| cmp(&catalog[a], &catalog[b]));
    }
    visible
}

fn matches(
    listing: &MarketplaceListing,
    categories: &CategoryTree,
    filter: &FilterState,
    needle: &Needle,
) -> bool {
    let in_category = match filter.category {
        CategoryFilter::All => true,
        CategoryFilter::Category(id) => categories.is_within(listing.category_id, id),
    };

    in_category
        && needle.matches_any([
            listing.title.as_str(),
            listing.seller_name.as_str(),
            listing.description.as_str(),
            listing.inventory_number.as_str(),
        ])
        && filter.price_range.contains(listing.price)
        && listing.rating() >= filter.min_rating
        && (filter.conditions.is_empty()
            || (listing.condition != Condition::Other
                && filter.conditions.contains(&listing.condition)))
        && (filter.seller_types.is_empty()
            || listing
                .seller_type
                .is_some_and(|t| filter.seller_types.contains(&t)))
        && listing.is_active()
}

type Comparator = fn(&MarketplaceListing, &MarketplaceListing) -> Ordering;

fn comparator(sort_by: SortKey) -> Option<Comparator> {
    match sort_by {
        SortKey::PriceAsc => Some(price_ascending as Comparator),
        SortKey::PriceDesc => Some(price_descending as Comparator),
        SortKey::Rating => Some(rating_descending as Comparator),
        SortKey::Newest => None,
    }
}

fn price_ascending(a: &MarketplaceListing, b: &MarketplaceListing) -> Ordering {
    a.price.cmp(&b.price)
}

fn price_descending(a: &MarketplaceListing, b: &MarketplaceListing) -> Ordering {
    b.price.cmp(&a.price)
}

// Absent ratings rank as 0.
fn rating_descending(a: &MarketplaceListing, b: &MarketplaceListing) -> Ordering {
    b.rating().total_cmp(&a.rating())
}
