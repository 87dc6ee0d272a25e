use thiserror::Error;

/// Failure talking to, or interpreting, the generative backend.
///
/// Never escapes [`crate::Assistant`]; it is logged and replaced by a fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    #[error("backend failed: {0}")]
    Backend(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("empty response")]
    EmptyResponse,
}

impl From<serde_json::Error> for AiError {
    fn from(err: serde_json::Error) -> Self {
        AiError::MalformedResponse(err.to_string())
    }
}
