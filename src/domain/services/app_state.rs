#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::BubbleList;
use super::Scroll;
use super::SessionController;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::ChatMessage;
use crate::domain::models::ChatResponse;
use crate::domain::models::NewSessionResponse;
use crate::domain::models::QuickPrompts;
use crate::domain::models::Session;
use crate::domain::models::SlashCommand;
use crate::domain::models::TypingIndicator;

pub const WELCOME_TEXT: &str = "Hi! I can plan trips between cities and answer questions about the map.\n\nType **/help** for commands or **/suggest** for ideas.";

/// Outcome of submitting the composer's text.
#[derive(Debug, PartialEq, Eq)]
pub enum Submission {
    /// Handled. The composer should be cleared.
    Accepted,
    /// Dropped without side effects. The composer keeps its text.
    Rejected,
    Quit,
}

pub struct AppState {
    pub bubble_list: BubbleList,
    pub controller: SessionController,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub scroll: Scroll,
    pub typing: TypingIndicator,
}

impl AppState {
    pub fn new(session: Session) -> AppState {
        let mut app_state = AppState {
            bubble_list: BubbleList::new(),
            controller: SessionController::with_session(session),
            last_known_height: 0,
            last_known_width: 0,
            scroll: Scroll::default(),
            typing: TypingIndicator::default(),
        };

        app_state
            .controller
            .add_message(ChatMessage::new(Author::Bot, WELCOME_TEXT).into_permanent());

        return app_state;
    }

    pub fn help_text() -> String {
        return [
            "**Commands:**",
            "• /new (/n) starts a new conversation",
            "• /suggest (/s) lists example questions, /suggest NUMBER sends one",
            "• /session shows the current session id",
            "• /quit (/q, /exit) closes the chat",
            "",
            "**Keys:**",
            "• Enter sends, Alt+Enter or Shift+Enter adds a new line",
            "• Up, Down, PageUp, PageDown, CTRL+U and CTRL+D scroll",
            "• CTRL+N starts a new conversation, CTRL+C exits",
        ]
        .join("\n");
    }

    /// Header text describing the current conversation.
    pub fn session_label(&self) -> String {
        if let Some(short_id) = self.controller.session().short_id() {
            return format!("Session {short_id}");
        }

        return "New session".to_string();
    }

    pub fn submit(&mut self, text: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<Submission> {
        if let Some(command) = SlashCommand::parse(text) {
            return self.handle_slash_command(command, tx);
        }

        return self.send(text, tx);
    }

    fn handle_slash_command(
        &mut self,
        command: SlashCommand,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<Submission> {
        if command.is_quit() {
            return Ok(Submission::Quit);
        }

        if command.is_new_session() {
            self.request_new_session(tx)?;
            return Ok(Submission::Accepted);
        }

        if command.is_help() {
            self.add_notice(&AppState::help_text());
            return Ok(Submission::Accepted);
        }

        if command.is_session() {
            let text = match self.controller.session().id() {
                Some(id) => format!("**Session:** {id}"),
                None => "No session yet. One is assigned with the first reply.".to_string(),
            };
            self.add_notice(&text);
            return Ok(Submission::Accepted);
        }

        if command.is_suggest() {
            let Some(arg) = command.args.first() else {
                self.add_notice(&QuickPrompts::list_text());
                return Ok(Submission::Accepted);
            };

            let prompt = arg
                .parse::<usize>()
                .ok()
                .and_then(|number| return QuickPrompts::get(number));
            if let Some(prompt) = prompt {
                return self.send(prompt, tx);
            }

            self.add_message(ChatMessage::error(&format!(
                "There's no suggestion {arg}. Use /suggest to list them."
            )));
            return Ok(Submission::Accepted);
        }

        return Ok(Submission::Rejected);
    }

    fn send(&mut self, text: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<Submission> {
        let request = match self.controller.begin_send(text) {
            Ok(request) => request,
            Err(_) => return Ok(Submission::Rejected),
        };

        tx.send(Action::ChatRequest(request))?;
        self.sync_dependants();
        self.scroll.last();

        return Ok(Submission::Accepted);
    }

    pub fn request_new_session(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        tx.send(Action::NewSession())?;
        return Ok(());
    }

    pub fn handle_chat_response(&mut self, res: Result<ChatResponse>) {
        self.controller.complete_send(res);
        self.sync_dependants();
    }

    pub fn handle_new_session_response(&mut self, res: Result<NewSessionResponse>) {
        self.controller.complete_new_session(res);
        self.sync_dependants();
        self.scroll.last();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    pub fn add_message(&mut self, message: ChatMessage) {
        self.controller.add_message(message);
        self.sync_dependants();
        self.scroll.last();
    }

    fn add_notice(&mut self, text: &str) {
        self.add_message(ChatMessage::new(Author::Bot, text));
    }

    fn sync_dependants(&mut self) {
        self.bubble_list.set_messages(
            self.controller.messages(),
            usize::from(self.last_known_width),
        );

        let list_length = u16::try_from(self.bubble_list.len()).unwrap_or(u16::MAX);
        self.scroll.set_state(list_length, self.last_known_height);
    }
}
