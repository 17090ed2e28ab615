use std::sync::{Arc, Mutex};

use crate::session::{normalize_token, SessionStore};

/// In-memory SessionStore for tests and hosts without persistent storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a token.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Arc::new(Mutex::new(normalize_token(token))),
        }
    }
}

impl SessionStore for MemoryStore {
    async fn token(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    async fn set_token(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = normalize_token(token);
        }
    }

    async fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}
