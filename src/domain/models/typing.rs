#[cfg(test)]
#[path = "typing_test.rs"]
mod tests;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Author;

const DOTS: [&str; 3] = [".", "..", "..."];

/// Shown while a chat request is in flight.
#[derive(Default)]
pub struct TypingIndicator {
    tick: usize,
}

impl TypingIndicator {
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn text(&self) -> String {
        return format!(
            "{} is typing{}",
            Author::Bot,
            DOTS[self.tick % DOTS.len()]
        );
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect) {
        frame.render_widget(
            Paragraph::new(self.text()).style(Style::default().add_modifier(Modifier::ITALIC)),
            rect,
        );
    }
}
