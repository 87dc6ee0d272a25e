//! `stockroom-ai`
//!
//! **Responsibility:** request/response contract for the AI-assisted authoring
//! tools (item intake, SKU generation, chat replies).
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on the inventory or marketplace stores.
//! - Every call settles to a single value: the parsed reply, or a fixed
//!   fallback on any failure. No retries, no timeouts, no streaming.

pub mod assistant;
pub mod backend;
pub mod request;
pub mod result;

pub use assistant::{Assistant, ChatMessage, ChatRole, FALLBACK_CHAT_REPLY, FALLBACK_SKU, ItemDraft};
pub use backend::{AssistantBackend, ScriptedBackend};
pub use request::{AssistRequest, AssistTask};
pub use result::AiError;
