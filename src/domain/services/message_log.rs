#[cfg(test)]
#[path = "message_log_test.rs"]
mod tests;

use crate::domain::models::ChatMessage;

/// Ordered, append only record of everything shown in the chat window.
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Vec<ChatMessage>,
    last_id: u64,
}

impl MessageLog {
    /// Appends a message and returns the id assigned to it.
    pub fn push(&mut self, message: ChatMessage) -> u64 {
        self.last_id += 1;
        self.messages.push(message.with_id(self.last_id));
        return self.last_id;
    }

    /// Drops every message that isn't permanent. Returns how many were
    /// removed.
    pub fn retain_permanent(&mut self) -> usize {
        let before = self.messages.len();
        self.messages.retain(|message| return message.is_permanent());
        return before - self.messages.len();
    }

    pub fn messages(&self) -> &[ChatMessage] {
        return &self.messages;
    }
}
