//! Session configuration from environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use stockroom_inventory::DEFAULT_LOW_STOCK_THRESHOLD;
use stockroom_marketplace::{FilterState, PriceRange};

pub const SEED_VAR: &str = "STOCKROOM_SEED";
pub const LOW_STOCK_THRESHOLD_VAR: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";
pub const MAX_PRICE_VAR: &str = "STOCKROOM_MAX_PRICE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed JSON to load; the bundled demo seed when `None`.
    pub seed_path: Option<PathBuf>,
    pub low_stock_threshold: u64,
    /// Upper bound of the default marketplace price range; unbounded when `None`.
    pub max_price: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            max_price: None,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unparseable values are logged
    /// and replaced by defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed_path = lookup(SEED_VAR)
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let low_stock_threshold = lookup(LOW_STOCK_THRESHOLD_VAR)
            .and_then(|raw| parse_or_warn(LOW_STOCK_THRESHOLD_VAR, &raw))
            .unwrap_or(defaults.low_stock_threshold);

        let max_price = lookup(MAX_PRICE_VAR).and_then(|raw| parse_or_warn(MAX_PRICE_VAR, &raw));

        Self {
            seed_path,
            low_stock_threshold,
            max_price,
        }
    }

    /// Marketplace criteria restored by "reset all filters".
    pub fn default_filters(&self) -> FilterState {
        FilterState {
            price_range: self.max_price.map(PriceRange::up_to).unwrap_or_default(),
            ..FilterState::default()
        }
    }
}

fn parse_or_warn<T: FromStr>(var: &str, raw: &str) -> Option<T> {
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(var, value = raw, "ignoring unparseable setting; using default");
            None
        }
    }
}
