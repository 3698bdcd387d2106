#[cfg(test)]
#[path = "formatter_test.rs"]
mod tests;

use std::mem;

use crate::domain::models::FormattedText;
use crate::domain::models::Inline;
use crate::domain::models::ListItem;
use crate::domain::models::Node;

const BOLD_DELIMITER: &str = "**";
const BULLET_PREFIX: &str = "• ";

/// Turns raw chat text into a [`FormattedText`] tree. Supports `**bold**`
/// spans, line breaks, and `• ` bullet lines. Consecutive bullet lines are
/// grouped into a single list.
pub struct Formatter {}

impl Formatter {
    pub fn format(text: &str) -> FormattedText {
        let mut nodes: Vec<Node> = vec![];
        let mut list: Vec<ListItem> = vec![];

        for (idx, raw_line) in text.split('\n').enumerate() {
            let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);

            if let Some(item) = Formatter::bullet_item(line) {
                // A blank line closed the previous list.
                if list.is_empty() && matches!(nodes.last(), Some(Node::List(_))) {
                    nodes.push(Node::LineBreak);
                }
                list.push(ListItem {
                    content: Formatter::parse_inlines(item),
                });
                continue;
            }

            if !list.is_empty() {
                nodes.push(Node::List(mem::take(&mut list)));
            } else if idx > 0 {
                nodes.push(Node::LineBreak);
            }

            nodes.extend(
                Formatter::parse_inlines(line)
                    .into_iter()
                    .map(|inline| return Node::Inline(inline)),
            );
        }

        if !list.is_empty() {
            nodes.push(Node::List(list));
        }

        return FormattedText { nodes };
    }

    fn bullet_item(line: &str) -> Option<&str> {
        return line
            .strip_prefix(BULLET_PREFIX)
            .filter(|content| return !content.is_empty());
    }

    /// Splits a single line into text and bold spans. Delimiters pair up
    /// shortest first and a bold span holds at least one character.
    fn parse_inlines(line: &str) -> Vec<Inline> {
        let mut inlines: Vec<Inline> = vec![];
        let mut plain = String::new();
        let mut rest = line;

        while let Some(open) = rest.find(BOLD_DELIMITER) {
            let after_open = &rest[open + BOLD_DELIMITER.len()..];
            let first_char_len = match after_open.chars().next() {
                Some(c) => c.len_utf8(),
                None => break,
            };

            match after_open[first_char_len..].find(BOLD_DELIMITER) {
                Some(close) => {
                    plain.push_str(&rest[..open]);
                    if !plain.is_empty() {
                        inlines.push(Inline::Text(mem::take(&mut plain)));
                    }

                    let content_len = first_char_len + close;
                    inlines.push(Inline::Strong(after_open[..content_len].to_string()));
                    rest = &after_open[content_len + BOLD_DELIMITER.len()..];
                }
                None => {
                    // No closing pair from here, retry one character later.
                    plain.push_str(&rest[..open + 1]);
                    rest = &rest[open + 1..];
                }
            }
        }

        plain.push_str(rest);
        if !plain.is_empty() {
            inlines.push(Inline::Text(plain));
        }

        return inlines;
    }
}
