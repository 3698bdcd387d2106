mod action;
mod author;
mod chat_service;
mod composer;
mod event;
mod markup;
mod message;
mod quick_prompts;
mod session;
mod slash_commands;
mod typing;

pub use action::*;
pub use author::*;
pub use chat_service::*;
pub use composer::*;
pub use event::*;
pub use markup::*;
pub use message::*;
pub use quick_prompts::*;
pub use session::*;
pub use slash_commands::*;
pub use typing::*;
