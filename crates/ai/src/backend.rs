use std::collections::VecDeque;
use std::sync::Mutex;

use crate::request::AssistRequest;
use crate::result::AiError;

/// Opaque generative text service.
pub trait AssistantBackend: Send + Sync {
    /// Raw reply text for `request`.
    fn complete(&self, request: &AssistRequest) -> Result<String, AiError>;
}

impl<B> AssistantBackend for std::sync::Arc<B>
where
    B: AssistantBackend + ?Sized,
{
    fn complete(&self, request: &AssistRequest) -> Result<String, AiError> {
        (**self).complete(request)
    }
}

/// In-process backend that replays canned replies in order (tests/dev).
///
/// Once the script runs out every call fails with `AiError::Backend`.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<String, AiError>>>,
    seen: Mutex<Vec<AssistRequest>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()))
    }

    pub fn fail(self, reason: impl Into<String>) -> Self {
        self.push(Err(AiError::Backend(reason.into())))
    }

    fn push(self, reply: Result<String, AiError>) -> Self {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
        self
    }

    /// Every request received so far, in order.
    pub fn seen(&self) -> Vec<AssistRequest> {
        self.seen.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl AssistantBackend for ScriptedBackend {
    fn complete(&self, request: &AssistRequest) -> Result<String, AiError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(request.clone());
        }
        self.replies
            .lock()
            .map_err(|_| AiError::Backend("script lock poisoned".to_string()))?
            .pop_front()
            .unwrap_or_else(|| Err(AiError::Backend("script exhausted".to_string())))
    }
}
