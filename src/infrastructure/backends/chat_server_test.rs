use anyhow::Result;
use mockito::Matcher;
use serde_json::json;

use super::ChatServer;
use crate::domain::models::ChatRequest;
use crate::domain::models::ChatResponse;
use crate::domain::models::ChatService;

fn request(session_id: Option<&str>, message: &str) -> ChatRequest {
    return ChatRequest {
        session_id: session_id.map(|id| return id.to_string()),
        message: message.to_string(),
    };
}

#[tokio::test]
async fn it_sends_chat_messages() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/chat/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "session_id": null,
            "message": "List all cities"
        })))
        .with_status(200)
        .with_body(
            json!({
                "session_id": "8f2c1d3e-6b7a-4c21-9d0e-2f4a5b6c7d8e",
                "user_message": "List all cities",
                "bot_response": "**All Cities (2):**\n\nBerlin, Paris",
                "intent": "list_cities",
                "data": { "cities": ["Berlin", "Paris"] }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let backend = ChatServer::new(&server.url());
    let res = backend
        .send_message(request(None, "List all cities"))
        .await?;

    assert_eq!(
        res,
        ChatResponse {
            session_id: Some("8f2c1d3e-6b7a-4c21-9d0e-2f4a5b6c7d8e".to_string()),
            bot_response: "**All Cities (2):**\n\nBerlin, Paris".to_string(),
            intent: Some("list_cities".to_string()),
        }
    );
    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_sends_the_known_session_id() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/chat/")
        .match_body(Matcher::Json(json!({
            "session_id": "abc123",
            "message": "Hello"
        })))
        .with_status(200)
        .with_body(r#"{"session_id": "abc123", "bot_response": "Hi!"}"#)
        .create_async()
        .await;

    let backend = ChatServer::new(&format!("{}/", server.url()));
    let res = backend.send_message(request(Some("abc123"), "Hello")).await?;

    assert_eq!(res.intent, None);
    assert_eq!(res.bot_response, "Hi!");
    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_error_statuses() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/chat/")
        .with_status(400)
        .with_body(r#"{"message": ["This field is required."]}"#)
        .create_async()
        .await;

    let backend = ChatServer::new(&server.url());
    let res = backend.send_message(request(None, "Hello")).await;

    assert!(res.is_err());
    mock.assert_async().await;
}

#[tokio::test]
async fn it_fails_without_a_bot_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/chat/")
        .with_status(200)
        .with_body(r#"{"session_id": "abc123", "intent": "greeting"}"#)
        .create_async()
        .await;

    let backend = ChatServer::new(&server.url());
    let res = backend.send_message(request(None, "Hello")).await;

    assert!(res.is_err());
    mock.assert_async().await;
}

#[tokio::test]
async fn it_fails_on_invalid_json() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/chat/")
        .with_status(200)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let backend = ChatServer::new(&server.url());
    let res = backend.send_message(request(None, "Hello")).await;

    assert!(res.is_err());
    mock.assert_async().await;
}

#[tokio::test]
async fn it_creates_new_sessions() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/sessions/new/")
        .with_status(200)
        .with_body(
            json!({
                "id": 7,
                "session_id": "def456",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z",
                "messages": []
            })
            .to_string(),
        )
        .create_async()
        .await;

    let backend = ChatServer::new(&server.url());
    let res = backend.new_session().await?;

    assert_eq!(res.session_id, "def456");
    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_fails_to_create_new_sessions() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/sessions/new/")
        .with_status(500)
        .create_async()
        .await;

    let backend = ChatServer::new(&server.url());
    let res = backend.new_session().await;

    assert!(res.is_err());
    mock.assert_async().await;
}
