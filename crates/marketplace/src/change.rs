use chrono::{DateTime, Utc};

use stockroom_events::Event;

/// Notification published by [`crate::MarketplaceQueryStore`] after the
/// visible view was recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketplaceChange {
    ViewRecomputed {
        visible: usize,
        occurred_at: DateTime<Utc>,
    },
}

impl Event for MarketplaceChange {
    fn event_type(&self) -> &'static str {
        match self {
            MarketplaceChange::ViewRecomputed { .. } => "marketplace.view.recomputed",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            MarketplaceChange::ViewRecomputed { occurred_at, .. } => *occurred_at,
        }
    }
}
