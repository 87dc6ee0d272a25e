use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Which authoring tool a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistTask {
    IdentifyItem,
    GenerateSku,
    ChatReply,
}

impl AssistTask {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssistTask::IdentifyItem => "identify_item",
            AssistTask::GenerateSku => "generate_sku",
            AssistTask::ChatReply => "chat_reply",
        }
    }
}

/// One prompt sent to the backend, with the JSON shape the reply must take.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistRequest {
    pub task: AssistTask,
    pub prompt: String,
    /// JSON schema for the expected reply; `Null` means free text.
    pub response_schema: JsonValue,
}

impl AssistRequest {
    pub fn text(task: AssistTask, prompt: impl Into<String>) -> Self {
        Self {
            task,
            prompt: prompt.into(),
            response_schema: JsonValue::Null,
        }
    }

    pub fn json(task: AssistTask, prompt: impl Into<String>, response_schema: JsonValue) -> Self {
        Self {
            task,
            prompt: prompt.into(),
            response_schema,
        }
    }

    pub fn expects_json(&self) -> bool {
        !self.response_schema.is_null()
    }
}
