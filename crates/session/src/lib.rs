//! Per-session wiring for the dashboard query layer.
//!
//! A [`Session`] is built once (configuration from the environment, seed data
//! from JSON) and handed to consumers by reference. It owns one
//! `InventoryQueryStore` and one `MarketplaceQueryStore`.

pub mod config;
pub mod seed;
pub mod session;

pub use config::SessionConfig;
pub use seed::SeedData;
pub use session::Session;
