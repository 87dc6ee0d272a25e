//! Marketplace query store.
//!
//! Given a static catalog and a [`FilterState`], produces the ordered subset of
//! listings to display. The filter pipeline and sort are pure functions
//! ([`query`]); [`MarketplaceQueryStore`] keeps the current criteria and the
//! derived view in sync.

pub mod category;
pub mod change;
pub mod filter;
pub mod listing;
pub mod query;
pub mod store;

pub use category::{Category, CategoryTree};
pub use change::MarketplaceChange;
pub use filter::{CategoryFilter, FilterPatch, FilterState, PriceRange, SortKey};
pub use listing::{Condition, ListingStatus, MarketplaceListing, SellerType};
pub use query::query;
pub use store::MarketplaceQueryStore;
