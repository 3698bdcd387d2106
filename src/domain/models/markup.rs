#[cfg(test)]
#[path = "markup_test.rs"]
mod tests;

use std::mem;

/// Inline content of a single line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(String),
}

impl Inline {
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(text) => return text,
            Inline::Strong(text) => return text,
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Inline::Text(text) => out.push_str(&escape_html(text)),
            Inline::Strong(text) => {
                out.push_str("<strong>");
                out.push_str(&escape_html(text));
                out.push_str("</strong>");
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListItem {
    pub content: Vec<Inline>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Inline(Inline),
    LineBreak,
    List(Vec<ListItem>),
}

/// A message after formatting. Lists are block nodes that end their own
/// line, so a line break right after a list stands for a blank row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormattedText {
    pub nodes: Vec<Node>,
}

/// One terminal row worth of formatted content, before wrapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayLine {
    pub bullet: bool,
    pub content: Vec<Inline>,
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }

    return escaped;
}

impl FormattedText {
    pub fn is_empty(&self) -> bool {
        return self.nodes.is_empty();
    }

    /// Renders the tree as HTML. Literal text is always escaped, only the
    /// recognised nodes produce tags.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                Node::Inline(inline) => inline.write_html(&mut out),
                Node::LineBreak => out.push_str("<br>"),
                Node::List(items) => {
                    out.push_str("<ul>");
                    for item in items {
                        out.push_str("<li>");
                        for inline in &item.content {
                            inline.write_html(&mut out);
                        }
                        out.push_str("</li>");
                    }
                    out.push_str("</ul>");
                }
            }
        }

        return out;
    }

    pub fn display_lines(&self) -> Vec<DisplayLine> {
        let mut lines: Vec<DisplayLine> = vec![];
        let mut current = DisplayLine::default();
        // Whether `current` holds the start of an open line.
        let mut started = false;

        for node in &self.nodes {
            match node {
                Node::Inline(inline) => {
                    current.content.push(inline.clone());
                    started = true;
                }
                Node::LineBreak => {
                    lines.push(mem::take(&mut current));
                    started = false;
                }
                Node::List(items) => {
                    if started {
                        lines.push(mem::take(&mut current));
                        started = false;
                    }

                    lines.extend(items.iter().map(|item| {
                        return DisplayLine {
                            bullet: true,
                            content: item.content.clone(),
                        };
                    }));
                }
            }
        }

        if started {
            lines.push(current);
        }

        return lines;
    }
}
