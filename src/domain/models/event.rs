use anyhow::Result;
use tui_textarea::Input;

use super::ChatResponse;
use super::NewSessionResponse;

#[derive(Debug)]
pub enum Event {
    ChatResponse(Result<ChatResponse>),
    NewSessionResponse(Result<NewSessionResponse>),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLN(),
    KeyboardEnter(),
    KeyboardNewline(),
    KeyboardPaste(String),
    UIResize(),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
