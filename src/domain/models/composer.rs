#[cfg(test)]
#[path = "composer_test.rs"]
mod tests;

use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use tui_textarea::TextArea;

/// Most text rows the composer grows to before it starts scrolling.
pub const COMPOSER_MAX_ROWS: u16 = 6;

pub struct Composer {}

impl<'a> Composer {
    pub fn build(awaiting_response: bool) -> TextArea<'a> {
        let mut textarea = TextArea::default();
        Composer::set_title(&mut textarea, awaiting_response);

        return textarea;
    }

    pub fn set_title(textarea: &mut TextArea<'a>, awaiting_response: bool) {
        let mut title = "Ask about routes, paths or cities (Enter to send, /help)";
        if awaiting_response {
            title = "Waiting for a reply...";
        }

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(title)
                .padding(Padding::new(1, 1, 0, 0)),
        );
    }

    /// Height of the composer including its borders, growing with the text.
    pub fn height(textarea: &TextArea<'a>) -> u16 {
        let rows = u16::try_from(textarea.lines().len()).unwrap_or(u16::MAX);
        return rows.clamp(1, COMPOSER_MAX_ROWS) + 2;
    }
}
