use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single conversation turn, as received from the client and as forwarded
/// upstream. Role is passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Interface to an upstream chat-completion provider.
///
/// Returns the provider's raw JSON response. Field extraction happens at the
/// call site: a response missing the expected fields is not a provider error,
/// only transport and decode failures are.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, messages: Vec<ChatMessage>) -> anyhow::Result<serde_json::Value>;
}
