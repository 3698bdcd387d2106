use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::text::Line;

use super::Bubble;
use super::BubbleAlignment;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Author;
use crate::domain::models::ChatMessage;

fn set_names() {
    Config::set(ConfigKey::Username, "testuser");
    Config::set(ConfigKey::BotName, "Travel Bot");
}

fn line_to_string(line: &Line) -> String {
    return line
        .spans
        .iter()
        .map(|span| {
            return span.content.to_string();
        })
        .collect::<Vec<String>>()
        .join("");
}

fn create_lines(author: Author, alignment: BubbleAlignment, width: usize, text: &str) -> String {
    set_names();

    let message = ChatMessage::new(author, text);
    let lines = Bubble::new(&message, alignment, width).as_lines();
    return lines
        .iter()
        .map(|line| {
            return line_to_string(line).trim_end().to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");
}

#[test]
fn it_creates_author_bot_text() {
    let lines_str = create_lines(Author::Bot, BubbleAlignment::Left, 50, "Hi there!");
    insta::assert_snapshot!(lines_str, @r###"
    ╭Travel Bot──╮
    │ Hi there!  │
    ╰────────────╯
    "###);
}

#[test]
fn it_creates_author_bot_text_long() {
    let lines_str = create_lines(Author::Bot, BubbleAlignment::Left, 50, "Hi there! This is a really long line that pushes the boundaries of 50 characters across the screen, resulting in a bubble where the line is wrapped to the next line. Cool right?");
    insta::assert_snapshot!(lines_str, @r###"
    ╭Travel Bot────────────────────────────────────╮
    │ Hi there! This is a really long line that    │
    │ pushes the boundaries of 50 characters       │
    │ across the screen, resulting in a bubble     │
    │ where the line is wrapped to the next line.  │
    │ Cool right?                                  │
    ╰──────────────────────────────────────────────╯
    "###);
}

#[test]
fn it_creates_author_user_text() {
    set_names();

    let message = ChatMessage::new(Author::User, "Hi there!");
    let lines = Bubble::new(&message, BubbleAlignment::Right, 50).as_lines();
    let lines_str = lines
        .iter()
        .map(|line| {
            return line_to_string(line);
        })
        .collect::<Vec<String>>();

    let padding = " ".repeat(37);
    assert_eq!(
        lines_str,
        vec![
            format!("{padding}╭testuser───╮"),
            format!("{padding}│ Hi there! │"),
            format!("{padding}╰───────────╯"),
        ]
    );
}

#[test]
fn it_renders_bold_text_and_bullets() {
    let lines_str = create_lines(
        Author::Bot,
        BubbleAlignment::Left,
        50,
        "**Cities:**\n• Paris\n• Berlin",
    );
    insta::assert_snapshot!(lines_str, @r###"
    ╭Travel Bot──╮
    │ Cities:    │
    │ • Paris    │
    │ • Berlin   │
    ╰────────────╯
    "###);
}

#[test]
fn it_styles_bold_spans() {
    set_names();

    let message = ChatMessage::new(Author::Bot, "**Map Statistics:**");
    let lines = Bubble::new(&message, BubbleAlignment::Left, 50).as_lines();
    let span = lines[1]
        .spans
        .iter()
        .find(|span| return span.content == "Statistics:")
        .unwrap();

    assert!(span.style.add_modifier.contains(Modifier::BOLD));
}

#[test]
fn it_indents_wrapped_bullets() {
    let lines_str = create_lines(
        Author::Bot,
        BubbleAlignment::Left,
        30,
        "• Find shortest path from Paris to Berlin",
    );
    insta::assert_snapshot!(lines_str, @r###"
    ╭Travel Bot────────────────╮
    │ • Find shortest path     │
    │   from Paris to Berlin   │
    ╰──────────────────────────╯
    "###);
}

#[test]
fn it_colors_error_bubbles_red() {
    set_names();

    let message = ChatMessage::error("Sorry, I encountered an error. Please try again.");
    let lines = Bubble::new(&message, BubbleAlignment::Left, 80).as_lines();

    assert_eq!(lines[0].spans[0].style.fg, Some(Color::Red));
    assert_eq!(lines[1].spans[0].style.fg, Some(Color::Red));
}
