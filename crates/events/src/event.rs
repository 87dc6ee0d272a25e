use chrono::{DateTime, Utc};

/// A store change notification.
///
/// Events are facts about a mutation that already happened. They carry just
/// enough to let an observer decide whether to refresh.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name (e.g. "inventory.item.added").
    fn event_type(&self) -> &'static str;

    /// When the mutation was applied.
    fn occurred_at(&self) -> DateTime<Utc>;
}
