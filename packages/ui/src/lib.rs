//! Shared UI for the sports school client: session handling, route guards, the
//! application shell, and every page.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{make_client, make_session_store, Client, SessionBackend};

mod auth;
pub use auth::{use_auth, use_client, use_client_config, use_session, AuthProvider, AuthState, Session};

mod gate;
pub use gate::{decide, Access, Gate, GateDecision, HOME_PATH, SIGN_IN_PATH};

mod layout;
pub use layout::{MainLayout, MobileSidebar, NavItem, Sidebar};

pub mod views;
