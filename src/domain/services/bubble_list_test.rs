use test_utils::help_reply_fixture;

use super::BubbleList;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Author;
use crate::domain::models::ChatMessage;

fn messages() -> Vec<ChatMessage> {
    Config::set(ConfigKey::Username, "testuser");
    Config::set(ConfigKey::BotName, "Travel Bot");

    return vec![
        ChatMessage::new(Author::Bot, "Hi there!").with_id(1),
        ChatMessage::new(Author::User, "help").with_id(2),
        ChatMessage::new(Author::Bot, help_reply_fixture()).with_id(3),
    ];
}

#[test]
fn it_has_no_cached_lines() {
    let bubble_list = BubbleList::new();

    assert_eq!(bubble_list.cache.len(), 0);
    assert!(bubble_list.is_empty());
}

#[test]
fn it_caches_lines() {
    let mut bubble_list = BubbleList::new();
    bubble_list.set_messages(&messages(), 80);

    assert_eq!(bubble_list.cache.len(), 3);
}

#[test]
fn it_returns_correct_length() {
    let mut bubble_list = BubbleList::new();
    bubble_list.set_messages(&messages(), 80);

    // 3 + 3 + (2 borders + 11 content rows).
    assert_eq!(bubble_list.len(), 19);
    assert_eq!(bubble_list.lines().len(), 19);
}

#[test]
fn it_drops_removed_messages() {
    let mut bubble_list = BubbleList::new();
    bubble_list.set_messages(&messages(), 80);
    bubble_list.set_messages(&messages()[..1], 80);

    assert_eq!(bubble_list.cache.len(), 1);
    assert_eq!(bubble_list.len(), 3);
}

#[test]
fn it_rebuilds_on_width_change() {
    let mut bubble_list = BubbleList::new();
    bubble_list.set_messages(&messages()[..1], 80);
    let wide = bubble_list.lines()[0].width();

    bubble_list.set_messages(&messages()[..1], 40);
    let narrow = bubble_list.lines()[0].width();

    assert_eq!(wide, 80);
    assert_eq!(narrow, 40);
}

#[test]
fn it_prunes_the_cache_of_a_long_conversation() {
    Config::set(ConfigKey::BotName, "Travel Bot");
    let conversation: Vec<ChatMessage> = (1..=2000)
        .map(|id| return ChatMessage::new(Author::Bot, "ok").with_id(id))
        .collect();
    let mut bubble_list = BubbleList::new();
    bubble_list.set_messages(&conversation, 80);
    assert_eq!(bubble_list.cache.len(), 2000);

    let kept: Vec<ChatMessage> = conversation
        .into_iter()
        .filter(|message| return message.id() % 2 == 0)
        .collect();
    bubble_list.set_messages(&kept, 80);

    assert_eq!(bubble_list.cache.len(), 1000);
    assert!(bubble_list.cache.contains_key(&2000));
    assert!(!bubble_list.cache.contains_key(&1999));
    assert_eq!(bubble_list.len(), 3000);
}
