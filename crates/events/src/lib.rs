//! Change notifications for store observers.
//!
//! Stores publish a small event after every successful mutation; display
//! components subscribe and re-read whatever derived view they need.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
