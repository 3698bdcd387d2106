#[cfg(test)]
#[path = "legacy_formatter_test.rs"]
mod tests;

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| return Regex::new(r"\*\*([^\r\n]+?)\*\*").unwrap());
static BULLET: Lazy<Regex> = Lazy::new(|| return Regex::new(r"(?m)^• ([^\r\n]+)").unwrap());
static LIST: Lazy<Regex> = Lazy::new(|| return Regex::new(r"(?s)(<li>.*</li>)").unwrap());

/// Byte compatible rendition of the chat service's web page
/// formatting. Nothing is escaped, bullets are matched after newlines have
/// already become `<br>`, and a single `<ul>` spans from the first `<li>` to
/// the last one. Only use it where that exact output is required.
pub struct LegacyFormatter {}

impl LegacyFormatter {
    pub fn format(text: &str) -> String {
        let text = BOLD.replace_all(text, "<strong>${1}</strong>");
        let text = text.replace('\n', "<br>");
        let text = BULLET.replace_all(&text, "<li>${1}</li>");

        if text.contains("<li>") {
            return LIST.replace(&text, "<ul>${1}</ul>").to_string();
        }

        return text.to_string();
    }
}
