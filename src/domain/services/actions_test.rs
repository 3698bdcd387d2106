use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use super::ActionsService;
use crate::domain::models::Action;
use crate::domain::models::ChatRequest;
use crate::domain::models::ChatResponse;
use crate::domain::models::ChatService;
use crate::domain::models::Event;
use crate::domain::models::NewSessionResponse;

struct EchoService {}

#[async_trait]
impl ChatService for EchoService {
    async fn send_message(&self, request: ChatRequest) -> Result<ChatResponse> {
        if request.message == "fail" {
            bail!("Chat server returned 500");
        }

        return Ok(ChatResponse {
            session_id: Some("abc123".to_string()),
            bot_response: format!("You said: {}", request.message),
            intent: None,
        });
    }

    async fn new_session(&self) -> Result<NewSessionResponse> {
        return Ok(NewSessionResponse {
            session_id: "def456".to_string(),
        });
    }
}

async fn run(actions: Vec<Action>) -> Result<Vec<Event>> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let expected = actions.len();
    for action in actions {
        action_tx.send(action)?;
    }
    drop(action_tx);

    ActionsService::start(Box::new(EchoService {}), event_tx, &mut action_rx).await?;

    let mut events = vec![];
    while events.len() < expected {
        match event_rx.recv().await {
            Some(event) => events.push(event),
            None => break,
        }
    }

    return Ok(events);
}

#[tokio::test]
async fn it_sends_chat_responses() -> Result<()> {
    let events = run(vec![Action::ChatRequest(ChatRequest {
        session_id: None,
        message: "Hello".to_string(),
    })])
    .await?;

    assert_eq!(events.len(), 1);
    match &events[0] {
        Event::ChatResponse(Ok(response)) => {
            assert_eq!(response.bot_response, "You said: Hello");
            assert_eq!(response.session_id, Some("abc123".to_string()));
        }
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_forwards_chat_failures() -> Result<()> {
    let events = run(vec![Action::ChatRequest(ChatRequest {
        session_id: None,
        message: "fail".to_string(),
    })])
    .await?;

    match &events[0] {
        Event::ChatResponse(Err(err)) => {
            assert_eq!(err.to_string(), "Chat server returned 500");
        }
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_sends_new_session_responses() -> Result<()> {
    let events = run(vec![Action::NewSession()]).await?;

    match &events[0] {
        Event::NewSessionResponse(Ok(response)) => {
            assert_eq!(response.session_id, "def456");
        }
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_handles_concurrent_actions() -> Result<()> {
    let events = run(vec![
        Action::ChatRequest(ChatRequest {
            session_id: Some("abc123".to_string()),
            message: "Hello".to_string(),
        }),
        Action::NewSession(),
    ])
    .await?;

    assert_eq!(events.len(), 2);
    let chat_responses = events
        .iter()
        .filter(|event| return matches!(event, Event::ChatResponse(_)))
        .count();
    assert_eq!(chat_responses, 1);

    return Ok(());
}
