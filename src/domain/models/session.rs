#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

/// Conversation identity issued by the chat server. The id is only ever
/// replaced as a whole.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    id: Option<String>,
}

impl Session {
    pub fn with_id(id: &str) -> Session {
        return Session {
            id: Some(id.to_string()),
        };
    }

    pub fn id(&self) -> Option<&str> {
        return self.id.as_deref();
    }

    /// Takes the server issued id only when no id is known locally yet.
    /// Returns whether the id was adopted.
    pub fn adopt(&mut self, server_id: Option<&str>) -> bool {
        if self.id.is_some() {
            return false;
        }

        match server_id {
            Some(id) if !id.is_empty() => {
                self.id = Some(id.to_string());
                return true;
            }
            _ => return false,
        }
    }

    /// Swaps in a freshly issued id. An empty id leaves the session without
    /// one, so the next reply can still be adopted.
    pub fn replace(&mut self, server_id: &str) {
        if server_id.is_empty() {
            self.id = None;
            return;
        }

        self.id = Some(server_id.to_string());
    }

    pub fn short_id(&self) -> Option<String> {
        return self.id.as_ref().map(|id| {
            return format!("{}...", id.chars().take(8).collect::<String>());
        });
    }
}
