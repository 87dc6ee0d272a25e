//! `stockroom-core`: shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod text;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, ItemId};
pub use text::Needle;
