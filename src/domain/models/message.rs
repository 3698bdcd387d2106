#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use super::Author;

/// Intent tag the client attaches to bubbles reporting a failed request.
pub const ERROR_INTENT: &str = "error";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    id: u64,
    pub author: Author,
    pub text: String,
    pub intent: Option<String>,
    permanent: bool,
}

impl ChatMessage {
    pub fn new(author: Author, text: &str) -> ChatMessage {
        return ChatMessage {
            id: 0,
            author,
            text: text.replace('\t', "  "),
            intent: None,
            permanent: false,
        };
    }

    pub fn new_with_intent(author: Author, intent: Option<String>, text: &str) -> ChatMessage {
        let mut message = ChatMessage::new(author, text);
        message.intent = intent.filter(|intent| return !intent.is_empty());
        return message;
    }

    pub fn error(text: &str) -> ChatMessage {
        return ChatMessage::new_with_intent(Author::Bot, Some(ERROR_INTENT.to_string()), text);
    }

    /// Marks the message as introductory, surviving new session resets.
    pub fn into_permanent(mut self) -> ChatMessage {
        self.permanent = true;
        return self;
    }

    pub(crate) fn with_id(mut self, id: u64) -> ChatMessage {
        self.id = id;
        return self;
    }

    pub fn id(&self) -> u64 {
        return self.id;
    }

    pub fn is_permanent(&self) -> bool {
        return self.permanent;
    }

    pub fn is_error(&self) -> bool {
        return self.intent.as_deref() == Some(ERROR_INTENT);
    }
}
