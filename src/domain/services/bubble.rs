#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use super::Formatter;
use crate::domain::models::Author;
use crate::domain::models::ChatMessage;
use crate::domain::models::DisplayLine;
use crate::domain::models::Inline;

const BULLET: &str = "• ";
const BULLET_INDENT: &str = "  ";

#[derive(PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct Bubble<'a> {
    alignment: BubbleAlignment,
    message: &'a ChatMessage,
    window_max_width: usize,
}

pub struct BubbleConfig {
    /// Left border + left padding + (text, not counted) + right padding +
    /// right border.
    pub border_elements_length: usize,
    pub outer_padding_percentage: f32,
}

struct Word {
    text: String,
    style: Style,
    space_before: bool,
}

fn display_width(spans: &[Span]) -> usize {
    return spans.iter().map(|span| return span.width()).sum();
}

/// Splits a word wider than `max_width` into chunks that each fit.
fn split_wide_word(word: &str, max_width: usize) -> Vec<String> {
    let mut chunks: Vec<String> = vec![];
    let mut chunk = String::new();
    let mut chunk_width = 0;

    for c in word.chars() {
        let char_width = c.width().unwrap_or(0);
        if chunk_width + char_width > max_width && !chunk.is_empty() {
            chunks.push(std::mem::take(&mut chunk));
            chunk_width = 0;
        }
        chunk.push(c);
        chunk_width += char_width;
    }

    if !chunk.is_empty() {
        chunks.push(chunk);
    }

    return chunks;
}

impl<'a> Bubble<'a> {
    pub fn new(
        message: &'a ChatMessage,
        alignment: BubbleAlignment,
        window_max_width: usize,
    ) -> Bubble<'a> {
        return Bubble {
            alignment,
            message,
            window_max_width,
        };
    }

    pub fn style_config() -> BubbleConfig {
        return BubbleConfig {
            border_elements_length: 4,
            outer_padding_percentage: 0.04,
        };
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let display_lines = Formatter::format(&self.message.text).display_lines();
        let max_line_length = self.get_max_line_length(&display_lines);

        let mut rows: Vec<Vec<Span<'static>>> = vec![];
        for display_line in &display_lines {
            rows.extend(self.wrap_display_line(display_line, max_line_length));
        }

        if rows.is_empty() {
            rows.push(vec![]);
        }

        let lines = rows
            .into_iter()
            .map(|spans| {
                return self.spans_to_line(spans, max_line_length);
            })
            .collect();

        return self.wrap_lines_in_bubble(lines, max_line_length);
    }

    fn words(&self, display_line: &DisplayLine) -> Vec<Word> {
        let mut words: Vec<Word> = vec![];
        let mut pending_space = false;

        for inline in &display_line.content {
            let style = match inline {
                Inline::Text(_) => Style::default(),
                Inline::Strong(_) => Style::default().add_modifier(Modifier::BOLD),
            };

            for (idx, piece) in inline.text().split(' ').enumerate() {
                if idx > 0 {
                    pending_space = true;
                }
                if piece.is_empty() {
                    continue;
                }

                words.push(Word {
                    text: piece.to_string(),
                    style,
                    space_before: pending_space && !words.is_empty(),
                });
                pending_space = false;
            }
        }

        return words;
    }

    fn wrap_display_line(
        &self,
        display_line: &DisplayLine,
        max_line_length: usize,
    ) -> Vec<Vec<Span<'static>>> {
        let mut rows: Vec<Vec<Span<'static>>> = vec![];
        let mut row: Vec<Span<'static>> = vec![];
        let mut indent = 0;

        if display_line.bullet {
            row.push(Span::styled(BULLET, self.accent_style()));
            indent = BULLET.width();
        }

        let mut row_width = indent;
        for word in self.words(display_line) {
            for (idx, chunk) in split_wide_word(&word.text, max_line_length.saturating_sub(indent).max(1))
                .into_iter()
                .enumerate()
            {
                let chunk_width = chunk.width();
                let mut separator = usize::from(idx == 0 && word.space_before);

                if row_width + separator + chunk_width > max_line_length && row_width > indent {
                    rows.push(std::mem::take(&mut row));
                    if display_line.bullet {
                        row.push(Span::from(BULLET_INDENT));
                    }
                    row_width = indent;
                    separator = 0;
                }

                if separator == 1 {
                    row.push(Span::from(" "));
                }
                row.push(Span::styled(chunk, word.style));
                row_width += separator + chunk_width;
            }
        }

        rows.push(row);
        return rows;
    }

    fn spans_to_line(&self, mut spans: Vec<Span<'static>>, max_line_length: usize) -> Line<'static> {
        let fill = " ".repeat(max_line_length.saturating_sub(display_width(&spans)));

        let mut wrapped_spans = vec![self.highlight_span("│ ".to_string())];
        wrapped_spans.append(&mut spans);
        wrapped_spans.push(Span::from(fill));
        wrapped_spans.push(self.highlight_span(" │".to_string()));

        let outer_padding = self.outer_padding(max_line_length);
        if self.alignment == BubbleAlignment::Left {
            wrapped_spans.push(Span::from(outer_padding));
            return Line::from(wrapped_spans);
        }

        let mut line_spans = vec![Span::from(outer_padding)];
        line_spans.extend(wrapped_spans);

        return Line::from(line_spans);
    }

    fn outer_padding(&self, max_line_length: usize) -> String {
        let bubble_width = max_line_length + Bubble::style_config().border_elements_length;
        return " ".repeat(self.window_max_width.saturating_sub(bubble_width));
    }

    fn natural_width(&self, display_line: &DisplayLine) -> usize {
        let words = self.words(display_line);
        let mut width: usize = words
            .iter()
            .map(|word| {
                return word.text.width() + usize::from(word.space_before);
            })
            .sum();

        if display_line.bullet {
            width += BULLET.width();
        }

        return width;
    }

    fn get_max_line_length(&self, display_lines: &[DisplayLine]) -> usize {
        let style_config = Bubble::style_config();
        // Keep a minimum 4% of padding on the side.
        let min_bubble_padding_length = ((self.window_max_width as f32
            * style_config.outer_padding_percentage)
            .ceil()) as usize;
        let line_border_width = style_config.border_elements_length + min_bubble_padding_length;

        let mut max_line_length = display_lines
            .iter()
            .map(|line| {
                return self.natural_width(line);
            })
            .max()
            .unwrap_or(0);

        let available = self
            .window_max_width
            .saturating_sub(line_border_width)
            .max(1);
        if max_line_length > available {
            max_line_length = available;
        }

        let username_width = self.message.author.to_string().width();
        if max_line_length < username_width {
            max_line_length = username_width;
        }

        return max_line_length;
    }

    fn wrap_lines_in_bubble(
        &self,
        lines: Vec<Line<'static>>,
        max_line_length: usize,
    ) -> Vec<Line<'static>> {
        let username = self.message.author.to_string();
        // Add 2 for the padding next to the vertical bars.
        let bar_length = max_line_length + 2;
        let top_bar = format!(
            "╭{username}{}╮",
            "─".repeat(bar_length.saturating_sub(username.width()))
        );
        let bottom_bar = format!("╰{}╯", "─".repeat(bar_length));
        let outer_padding = self.outer_padding(max_line_length);

        let mut res = vec![];
        if self.alignment == BubbleAlignment::Left {
            res.push(self.highlight_line(format!("{top_bar}{outer_padding}")));
            res.extend(lines);
            res.push(self.highlight_line(format!("{bottom_bar}{outer_padding}")));
        } else {
            res.push(self.highlight_line(format!("{outer_padding}{top_bar}")));
            res.extend(lines);
            res.push(self.highlight_line(format!("{outer_padding}{bottom_bar}")));
        }

        return res;
    }

    fn accent_style(&self) -> Style {
        if self.message.is_error() {
            return Style::default().fg(Color::Red);
        }
        if self.message.author == Author::Bot {
            return Style::default().fg(Color::Rgb(64, 160, 170));
        }

        return Style::default();
    }

    fn highlight_span(&self, text: String) -> Span<'static> {
        return Span::styled(text, self.accent_style());
    }

    fn highlight_line(&self, text: String) -> Line<'static> {
        return Line::from(self.highlight_span(text));
    }
}
