pub mod actions;
mod app_state;
mod bubble;
mod bubble_list;
pub mod events;
mod formatter;
mod legacy_formatter;
mod message_log;
mod scroll;
mod session_controller;

pub use app_state::*;
pub use bubble::*;
pub use bubble_list::*;
pub use formatter::*;
pub use legacy_formatter::*;
pub use message_log::*;
pub use scroll::*;
pub use session_controller::*;
