//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of an inventory item or marketplace listing.
///
/// Listings are projections of inventory items, so both share one id space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Deterministic id derived from a small integer (seed fixtures, tests).
    pub fn from_u128(n: u128) -> Self {
        Self(Uuid::from_u128(n))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for ItemId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s).map_err(|e| DomainError::invalid_id(format!("ItemId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// Identifier of a catalog category.
///
/// Category ids are small integers assigned by the catalog fixtures.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

impl CategoryId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for CategoryId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for CategoryId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|e| DomainError::invalid_id(format!("CategoryId: {e}")))
    }
}
