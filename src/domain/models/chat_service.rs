use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub session_id: Option<String>,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub session_id: Option<String>,
    pub bot_response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSessionResponse {
    pub session_id: String,
}

#[async_trait]
pub trait ChatService {
    /// Posts a user message to the chat server. Any transport error, non
    /// success status, or body without a bot response is an error.
    async fn send_message(&self, request: ChatRequest) -> Result<ChatResponse>;

    /// Asks the chat server to open a fresh conversation.
    async fn new_session(&self) -> Result<NewSessionResponse>;
}

pub type ChatServiceBox = Box<dyn ChatService + Send + Sync>;
