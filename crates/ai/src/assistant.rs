use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::backend::AssistantBackend;
use crate::request::{AssistRequest, AssistTask};
use crate::result::AiError;

/// SKU handed out when generation fails; the user is expected to edit it.
pub const FALLBACK_SKU: &str = "SKU-PENDING";

pub const FALLBACK_CHAT_REPLY: &str =
    "Sorry, I can't answer right now. Please try again in a moment.";

const MAX_SKU_LEN: usize = 32;

/// Item fields suggested by the intake tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Smallest currency unit.
    #[serde(default)]
    pub estimated_price: Option<u64>,
}

impl ItemDraft {
    pub fn fallback() -> Self {
        Self {
            title: "Unidentified item".to_string(),
            description: String::new(),
            category: None,
            estimated_price: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SkuReply {
    sku: String,
}

/// Prompt builder + reply parser over an opaque backend.
///
/// Every method returns a usable value: on any failure the fixed fallback
/// for that tool is returned and the cause is logged.
#[derive(Debug, Clone)]
pub struct Assistant<B> {
    backend: B,
}

impl<B> Assistant<B>
where
    B: AssistantBackend,
{
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Suggest item fields from a free-form description (photo caption, notes).
    pub fn identify_item(&self, description: &str) -> ItemDraft {
        let request = AssistRequest::json(
            AssistTask::IdentifyItem,
            format!(
                "You are a warehouse intake assistant. Identify the item described below and \
                 suggest a short product title, a one-paragraph description, a category name \
                 and an estimated unit price in cents.\n\nDescription: {description}"
            ),
            json!({
                "type": "object",
                "properties": {
                    "title": { "type": "string" },
                    "description": { "type": "string" },
                    "category": { "type": "string" },
                    "estimatedPrice": { "type": "integer", "minimum": 0 }
                },
                "required": ["title"]
            }),
        );

        self.settle(request, |text| {
            let draft: ItemDraft = parse_json(&text)?;
            if draft.title.trim().is_empty() {
                return Err(AiError::EmptyResponse);
            }
            Ok(draft)
        })
        .unwrap_or_else(ItemDraft::fallback)
    }

    /// Propose a SKU (`[A-Z0-9-]`, at most 32 chars) for a new item.
    pub fn generate_sku(&self, title: &str, category: Option<&str>) -> String {
        let category = category.unwrap_or("uncategorized");
        let request = AssistRequest::json(
            AssistTask::GenerateSku,
            format!(
                "Generate a concise inventory SKU for the product below. Use uppercase letters, \
                 digits and dashes only.\n\nProduct: {title}\nCategory: {category}"
            ),
            json!({
                "type": "object",
                "properties": { "sku": { "type": "string" } },
                "required": ["sku"]
            }),
        );

        self.settle(request, |text| {
            let reply: SkuReply = parse_json(&text)?;
            normalize_sku(&reply.sku)
        })
        .unwrap_or_else(|| FALLBACK_SKU.to_string())
    }

    /// Reply to `message` given the prior conversation.
    pub fn chat_reply(&self, history: &[ChatMessage], message: &str) -> String {
        let mut prompt = String::from(
            "You are a helpful assistant for a warehouse marketplace. Answer briefly.\n\n",
        );
        for turn in history {
            let speaker = match turn.role {
                ChatRole::User => "User",
                ChatRole::Assistant => "Assistant",
            };
            prompt.push_str(speaker);
            prompt.push_str(": ");
            prompt.push_str(&turn.content);
            prompt.push('\n');
        }
        prompt.push_str("User: ");
        prompt.push_str(message);
        prompt.push_str("\nAssistant:");

        let request = AssistRequest::text(AssistTask::ChatReply, prompt);
        self.settle(request, |text| {
            let reply = text.trim();
            if reply.is_empty() {
                return Err(AiError::EmptyResponse);
            }
            Ok(reply.to_string())
        })
        .unwrap_or_else(|| FALLBACK_CHAT_REPLY.to_string())
    }

    fn settle<T>(
        &self,
        request: AssistRequest,
        parse: impl FnOnce(String) -> Result<T, AiError>,
    ) -> Option<T> {
        let task = request.task;
        match self.backend.complete(&request).and_then(parse) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(task = task.as_str(), error = %err, "assistant call failed; using fallback");
                None
            }
        }
    }
}

/// Parse a JSON reply, tolerating a surrounding markdown code fence.
fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, AiError> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(AiError::EmptyResponse);
    }
    Ok(serde_json::from_str(body)?)
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") up to the first newline.
    let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

fn normalize_sku(raw: &str) -> Result<String, AiError> {
    let sku = raw.trim().to_ascii_uppercase();
    if sku.is_empty() {
        return Err(AiError::EmptyResponse);
    }
    if sku.len() > MAX_SKU_LEN || !sku.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(AiError::MalformedResponse(format!("unusable sku: {raw}")));
    }
    Ok(sku)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ScriptedBackend;

    #[test]
    fn identify_item_parses_fenced_json() {
        let backend = ScriptedBackend::new().reply(
            "```json\n{\"title\":\"Cordless Drill\",\"description\":\"18V drill\",\"category\":\"Power tools\",\"estimatedPrice\":14999}\n```",
        );
        let assistant = Assistant::new(backend);
        let draft = assistant.identify_item("yellow drill with two batteries");
        assert_eq!(draft.title, "Cordless Drill");
        assert_eq!(draft.category.as_deref(), Some("Power tools"));
        assert_eq!(draft.estimated_price, Some(14_999));

        let seen = assistant.backend().seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].task, AssistTask::IdentifyItem);
        assert!(seen[0].prompt.contains("yellow drill with two batteries"));
        assert!(seen[0].expects_json());
        assert_eq!(seen[0].response_schema["required"], json!(["title"]));
    }

    #[test]
    fn identify_item_falls_back_on_garbage_or_blank_title() {
        let assistant = Assistant::new(
            ScriptedBackend::new()
                .reply("I think it's a drill")
                .reply(r#"{"title": "  "}"#),
        );
        assert_eq!(assistant.identify_item("?"), ItemDraft::fallback());
        assert_eq!(assistant.identify_item("?"), ItemDraft::fallback());
    }

    #[test]
    fn generate_sku_normalizes_and_validates() {
        let assistant = Assistant::new(
            ScriptedBackend::new()
                .reply(r#"{"sku": " bsh-drl-18v "}"#)
                .reply(r#"{"sku": "BAD SKU!"}"#)
                .fail("quota exceeded"),
        );
        assert_eq!(assistant.generate_sku("Bosch drill", Some("Tools")), "BSH-DRL-18V");
        assert_eq!(assistant.generate_sku("x", None), FALLBACK_SKU);
        assert_eq!(assistant.generate_sku("x", None), FALLBACK_SKU);

        let first = &assistant.backend().seen()[0];
        assert_eq!(first.task, AssistTask::GenerateSku);
        assert!(first.prompt.contains("Product: Bosch drill"));
        assert!(first.prompt.contains("Category: Tools"));
        assert_eq!(first.response_schema["required"], json!(["sku"]));
    }

    #[test]
    fn chat_reply_trims_and_falls_back_when_empty() {
        let assistant = Assistant::new(ScriptedBackend::new().reply("  Yes, it ships Monday.  ").reply("   "));
        let history = [
            ChatMessage::user("Is the pallet rack still available?"),
            ChatMessage::assistant("It is."),
        ];
        assert_eq!(assistant.chat_reply(&history, "When does it ship?"), "Yes, it ships Monday.");
        assert_eq!(assistant.chat_reply(&history, "And the price?"), FALLBACK_CHAT_REPLY);

        let first = &assistant.backend().seen()[0];
        assert!(!first.expects_json());
        assert!(first.prompt.contains("User: Is the pallet rack still available?\nAssistant: It is.\n"));
        assert!(first.prompt.ends_with("User: When does it ship?\nAssistant:"));
    }

    #[test]
    fn exhausted_backend_still_settles() {
        let assistant = Assistant::new(ScriptedBackend::new());
        assert_eq!(assistant.chat_reply(&[], "hello"), FALLBACK_CHAT_REPLY);
        let tasks: Vec<AssistTask> = assistant.backend().seen().iter().map(|r| r.task).collect();
        assert_eq!(tasks, vec![AssistTask::ChatReply]);
    }

    #[test]
    fn code_fence_stripping() {
        assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n[1]\n```\n"), "[1]");
    }
}
