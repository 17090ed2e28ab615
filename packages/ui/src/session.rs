//! Shared client constructor for all platforms.
//!
//! Returns an [`api::ApiClient`] backed by the appropriate [`store::SessionStore`]:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`]
//! - **Native**: `session.toml` under the platform data directory via [`store::FileStore`]
//! - **WASM without `web`**: in-memory via [`store::MemoryStore`]

use store::ClientConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type SessionBackend = store::LocalStorageStore;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type SessionBackend = store::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub type SessionBackend = store::FileStore;

/// The client type every view talks to.
pub type Client = api::ApiClient<SessionBackend>;

/// Create the platform-appropriate token store.
pub fn make_session_store() -> SessionBackend {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("sportschool");
        store::FileStore::new(base)
    }
}

/// Create a client for the configured service.
pub fn make_client(config: &ClientConfig) -> Client {
    tracing::debug!("Using scheduling service at {}", config.base_url());
    api::ApiClient::from_config(config, make_session_store())
}
