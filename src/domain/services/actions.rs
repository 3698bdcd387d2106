#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::ChatRequest;
use crate::domain::models::ChatService;
use crate::domain::models::ChatServiceBox;
use crate::domain::models::Event;

async fn chat_request(
    service: Arc<ChatServiceBox>,
    request: ChatRequest,
    tx: mpsc::UnboundedSender<Event>,
) -> Result<()> {
    tracing::debug!(session_id = ?request.session_id, "Sending chat message");
    let res = service.send_message(request).await;
    tx.send(Event::ChatResponse(res))?;

    return Ok(());
}

async fn new_session(service: Arc<ChatServiceBox>, tx: mpsc::UnboundedSender<Event>) -> Result<()> {
    tracing::debug!("Requesting new session");
    let res = service.new_session().await;
    tx.send(Event::NewSessionResponse(res))?;

    return Ok(());
}

/// Runs chat server requests off the UI thread. Each action gets its own
/// task, so a new session request is not held up by a pending chat reply.
pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        service: ChatServiceBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let service = Arc::new(service);

        while let Some(action) = rx.recv().await {
            let worker_service = service.clone();
            let worker_tx = tx.clone();

            tokio::spawn(async move {
                let res = match action {
                    Action::ChatRequest(request) => {
                        chat_request(worker_service, request, worker_tx).await
                    }
                    Action::NewSession() => new_session(worker_service, worker_tx).await,
                };

                if let Err(err) = res {
                    tracing::error!(error = ?err, "Failed to deliver action result");
                }
            });
        }

        return Ok(());
    }
}
