use super::TypingIndicator;
use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[test]
fn it_cycles_its_dots() {
    Config::set(ConfigKey::BotName, "Travel Bot");
    let mut indicator = TypingIndicator::default();
    assert_eq!(indicator.text(), "Travel Bot is typing.");

    indicator.tick();
    assert_eq!(indicator.text(), "Travel Bot is typing..");

    indicator.tick();
    assert_eq!(indicator.text(), "Travel Bot is typing...");

    indicator.tick();
    assert_eq!(indicator.text(), "Travel Bot is typing.");
}
