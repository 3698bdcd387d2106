#[cfg(test)]
#[path = "chat_server_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ChatRequest;
use crate::domain::models::ChatResponse;
use crate::domain::models::ChatService;
use crate::domain::models::NewSessionResponse;

/// HTTP client for the travel planner chat server.
pub struct ChatServer {
    url: String,
    client: reqwest::Client,
}

impl Default for ChatServer {
    fn default() -> ChatServer {
        return ChatServer::new(&Config::get(ConfigKey::ServerURL));
    }
}

impl ChatServer {
    pub fn new(url: &str) -> ChatServer {
        return ChatServer {
            url: url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        };
    }
}

#[async_trait]
impl ChatService for ChatServer {
    #[allow(clippy::implicit_return)]
    async fn send_message(&self, request: ChatRequest) -> Result<ChatResponse> {
        let res = self
            .client
            .post(format!("{url}/api/chat/", url = self.url))
            .json(&request)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to send chat message to the chat server"
            );
            bail!(
                "Chat server responded with status {} to a chat message",
                res.status()
            );
        }

        let body = res.json::<ChatResponse>().await?;
        tracing::debug!(body = ?body, "Chat response");

        return Ok(body);
    }

    #[allow(clippy::implicit_return)]
    async fn new_session(&self) -> Result<NewSessionResponse> {
        let res = self
            .client
            .post(format!("{url}/api/sessions/new/", url = self.url))
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to create a session on the chat server"
            );
            bail!(
                "Chat server responded with status {} to a new session request",
                res.status()
            );
        }

        let body = res.json::<NewSessionResponse>().await?;
        tracing::debug!(body = ?body, "New session response");

        return Ok(body);
    }
}
