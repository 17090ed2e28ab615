//! # Session token persistence
//!
//! The remote service issues a single opaque bearer token on sign-in. The client
//! keeps it between page loads and presents it on every authorized request.
//! [`SessionStore`] abstracts where that token lives so the HTTP client and the UI
//! never touch a storage API directly.
//!
//! ## Backends
//!
//! | Type | Platform | Location |
//! |------|----------|----------|
//! | [`MemoryStore`](crate::MemoryStore) | any | process memory (tests) |
//! | [`FileStore`](crate::FileStore) | native | `<base_dir>/session.toml` |
//! | [`LocalStorageStore`](crate::LocalStorageStore) | WASM + `web` feature | `localStorage["access_token"]` |
//!
//! Reads return `None` when nothing usable is stored. Writes never fail from the
//! caller's point of view: a storage error is logged and the session simply does
//! not survive a reload, which the UI already treats as "signed out".

/// Key under which the bearer token is stored by browser backends.
pub const TOKEN_KEY: &str = "access_token";

/// Async interface for storing the session token.
pub trait SessionStore {
    fn token(&self) -> impl std::future::Future<Output = Option<String>>;
    fn set_token(&self, token: &str) -> impl std::future::Future<Output = ()>;
    fn clear(&self) -> impl std::future::Future<Output = ()>;
}

/// Trim a raw token read from storage, treating blank values as absent.
pub(crate) fn normalize_token(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
