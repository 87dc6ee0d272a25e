//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Both inventory items and marketplace listings are entities: two records with
/// the same id refer to the same thing even when every other field differs.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
