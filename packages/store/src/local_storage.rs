//! # Browser session store (localStorage)
//!
//! [`LocalStorageStore`] is the [`SessionStore`] implementation used on the **web
//! platform**. It keeps the bearer token in `window.localStorage` under
//! [`TOKEN_KEY`], the same slot the service's other web clients use, so a token
//! issued in one of them is picked up here.
//!
//! `LocalStorageStore` is a zero-size struct that looks up `localStorage` on every
//! call. When storage is unavailable (private mode, sandboxed iframe) reads return
//! `None` and writes are dropped with a warning.

use crate::session::{normalize_token, SessionStore, TOKEN_KEY};

/// localStorage-backed SessionStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStorageStore {
    async fn token(&self) -> Option<String> {
        let raw = Self::storage()?.get_item(TOKEN_KEY).ok().flatten()?;
        normalize_token(&raw)
    }

    async fn set_token(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable; session will not persist");
            return;
        };
        let result = match normalize_token(token) {
            Some(token) => storage.set_item(TOKEN_KEY, &token),
            None => storage.remove_item(TOKEN_KEY),
        };
        if result.is_err() {
            tracing::warn!("Failed to write {} to localStorage", TOKEN_KEY);
        }
    }

    async fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
