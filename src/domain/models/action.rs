use super::ChatRequest;

#[derive(Debug)]
pub enum Action {
    ChatRequest(ChatRequest),
    NewSession(),
}
