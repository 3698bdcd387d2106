#[cfg(test)]
#[path = "session_controller_test.rs"]
mod tests;

use anyhow::Result;

use super::MessageLog;
use crate::domain::models::Author;
use crate::domain::models::ChatMessage;
use crate::domain::models::ChatRequest;
use crate::domain::models::ChatResponse;
use crate::domain::models::ChatService;
use crate::domain::models::NewSessionResponse;
use crate::domain::models::Session;

pub const CHAT_ERROR_TEXT: &str = "Sorry, I encountered an error. Please try again.";
pub const NEW_SESSION_TEXT: &str = "✨ New conversation started! How can I help you?";
pub const NEW_SESSION_ERROR_TEXT: &str = "Failed to create new session. Please try again.";

/// Why a send attempt was dropped without reaching the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum SendSkip {
    EmptyMessage,
    AwaitingResponse,
}

impl std::error::Error for SendSkip {}

/// Owns the conversation identity, the in flight flag, and the message log.
///
/// At most one chat request is outstanding at a time: while one is awaited,
/// further sends are dropped. New session requests are not gated by the
/// flag.
#[derive(Debug, Default)]
pub struct SessionController {
    session: Session,
    awaiting_response: bool,
    log: MessageLog,
}

impl SessionController {
    pub fn with_session(session: Session) -> SessionController {
        return SessionController {
            session,
            ..SessionController::default()
        };
    }

    pub fn session(&self) -> &Session {
        return &self.session;
    }

    pub fn is_awaiting_response(&self) -> bool {
        return self.awaiting_response;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        return self.log.messages();
    }

    pub fn add_message(&mut self, message: ChatMessage) {
        self.log.push(message);
    }

    /// Validates the input, flags the request as in flight and shows the
    /// user's message. The returned request is what has to reach the server.
    pub fn begin_send(&mut self, raw_text: &str) -> Result<ChatRequest, SendSkip> {
        let text = raw_text.trim();
        let skip = if text.is_empty() {
            Some(SendSkip::EmptyMessage)
        } else if self.awaiting_response {
            Some(SendSkip::AwaitingResponse)
        } else {
            None
        };

        if let Some(reason) = skip {
            tracing::debug!(reason = %reason, "Skipped sending chat message");
            return Err(reason);
        }

        self.awaiting_response = true;
        self.log.push(ChatMessage::new(Author::User, text));

        return Ok(ChatRequest {
            session_id: self.session.id().map(|id| return id.to_string()),
            message: text.to_string(),
        });
    }

    pub fn complete_send(&mut self, res: Result<ChatResponse>) {
        self.awaiting_response = false;

        match res {
            Ok(response) => {
                if self.session.adopt(response.session_id.as_deref()) {
                    tracing::info!(session_id = ?self.session.id(), "Adopted session id");
                }

                self.log.push(ChatMessage::new_with_intent(
                    Author::Bot,
                    response.intent,
                    &response.bot_response,
                ));
            }
            Err(err) => {
                tracing::error!(error = ?err, "Failed to send chat message");
                self.log.push(ChatMessage::error(CHAT_ERROR_TEXT));
            }
        }
    }

    pub async fn send_message(
        &mut self,
        service: &dyn ChatService,
        raw_text: &str,
    ) -> Result<(), SendSkip> {
        let request = self.begin_send(raw_text)?;
        let res = service.send_message(request).await;
        self.complete_send(res);

        return Ok(());
    }

    pub fn complete_new_session(&mut self, res: Result<NewSessionResponse>) {
        match res {
            Ok(response) => {
                self.session.replace(&response.session_id);
                let removed = self.log.retain_permanent();
                tracing::info!(
                    session_id = %response.session_id,
                    removed,
                    "Started new session"
                );

                self.log.push(ChatMessage::new(Author::Bot, NEW_SESSION_TEXT));
            }
            Err(err) => {
                tracing::error!(error = ?err, "Failed to create new session");
                self.log.push(ChatMessage::error(NEW_SESSION_ERROR_TEXT));
            }
        }
    }

    pub async fn start_new_session(&mut self, service: &dyn ChatService) {
        let res = service.new_session().await;
        self.complete_new_session(res);
    }
}
