//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns three pieces of context: the [`Client`], the
//! [`ClientConfig`] it was built from, and a `Signal<AuthState>` holding the cached
//! user. The user is fetched on mount and again whenever the session revision is
//! bumped through [`Session::changed`], which sign-in and sign-out call after they
//! touch the stored token.

use api::User;
use dioxus::prelude::*;
use store::ClientConfig;

use crate::session::{make_client, Client};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }
}

#[derive(Clone, Copy, PartialEq)]
struct SessionRevision(Signal<u64>);

/// Handle used to announce that the stored token changed.
#[derive(Clone, Copy, PartialEq)]
pub struct Session {
    auth: Signal<AuthState>,
    revision: SessionRevision,
}

impl Session {
    /// Mark the cached user stale and trigger a reload.
    pub fn changed(mut self) {
        self.auth.write().loading = true;
        let mut revision = self.revision.0;
        *revision.write() += 1;
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the shared service client.
pub fn use_client() -> Client {
    use_context::<Client>()
}

/// Get the configuration the client was built from.
pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

pub fn use_session() -> Session {
    Session {
        auth: use_auth(),
        revision: use_context::<SessionRevision>(),
    }
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(config: ClientConfig, children: Element) -> Element {
    let client = use_context_provider(|| make_client(&config));
    use_context_provider(|| config.clone());
    let revision = use_context_provider(|| SessionRevision(Signal::new(0)));
    let mut auth_state = use_context_provider(|| Signal::new(AuthState::default()));

    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            let current = (revision.0)();
            auth_state.write().loading = true;
            match client.current_user().await {
                Ok(Some(user)) => {
                    tracing::info!("Signed in as {} (session revision {})", user.name, current);
                    auth_state.set(AuthState::signed_in(user));
                }
                Ok(None) => {
                    tracing::debug!("No active session");
                    auth_state.set(AuthState::signed_out());
                }
                Err(e) => {
                    tracing::warn!("Failed to load current user: {}", e);
                    auth_state.set(AuthState::signed_out());
                }
            }
        }
    });

    rsx! {
        {children}
    }
}
