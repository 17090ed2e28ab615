//! Route access control.
//!
//! [`decide`] is the pure rule; [`Gate`] applies it to its children, showing the
//! loading screen or redirecting as needed.

use dioxus::prelude::*;

use crate::auth::{use_auth, AuthState};
use crate::views::LoadingScreen;

pub const SIGN_IN_PATH: &str = "/signin";
pub const HOME_PATH: &str = "/";

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anyone, without waiting for the session to load.
    Public,
    /// Only visitors without a session (sign-in, sign-up).
    GuestOnly,
    /// Any signed-in user.
    Member,
    /// Signed-in administrators.
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Loading,
    Render,
    RedirectToSignIn,
    RedirectHome,
}

pub fn decide(access: Access, auth: &AuthState) -> GateDecision {
    if access == Access::Public {
        return GateDecision::Render;
    }
    if auth.loading {
        return GateDecision::Loading;
    }
    match (access, &auth.user) {
        (Access::GuestOnly, Some(_)) => GateDecision::RedirectHome,
        (Access::GuestOnly, None) => GateDecision::Render,
        (Access::Member | Access::Admin, None) => GateDecision::RedirectToSignIn,
        (Access::Admin, Some(user)) if !user.is_admin => GateDecision::RedirectToSignIn,
        _ => GateDecision::Render,
    }
}

#[component]
pub fn Gate(access: Access, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let decision = decide(access, &auth.read());
    match decision {
        GateDecision::Loading => rsx! { LoadingScreen {} },
        GateDecision::Render => rsx! { {children} },
        GateDecision::RedirectToSignIn => {
            nav.replace(SIGN_IN_PATH);
            rsx! {}
        }
        GateDecision::RedirectHome => {
            nav.replace(HOME_PATH);
            rsx! {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::User;

    fn user(is_admin: bool) -> User {
        User {
            id: 3,
            name: "Gate".to_string(),
            is_admin,
            is_athlete: !is_admin,
        }
    }

    #[test]
    fn test_loading_blocks_everything_but_public() {
        let loading = AuthState::default();
        assert_eq!(decide(Access::Public, &loading), GateDecision::Render);
        assert_eq!(decide(Access::GuestOnly, &loading), GateDecision::Loading);
        assert_eq!(decide(Access::Member, &loading), GateDecision::Loading);
        assert_eq!(decide(Access::Admin, &loading), GateDecision::Loading);
    }

    #[test]
    fn test_signed_out_visitor() {
        let guest = AuthState::signed_out();
        assert_eq!(decide(Access::GuestOnly, &guest), GateDecision::Render);
        assert_eq!(decide(Access::Member, &guest), GateDecision::RedirectToSignIn);
        assert_eq!(decide(Access::Admin, &guest), GateDecision::RedirectToSignIn);
        assert_eq!(decide(Access::Public, &guest), GateDecision::Render);
    }

    #[test]
    fn test_athlete() {
        let athlete = AuthState::signed_in(user(false));
        assert_eq!(decide(Access::GuestOnly, &athlete), GateDecision::RedirectHome);
        assert_eq!(decide(Access::Member, &athlete), GateDecision::Render);
        assert_eq!(decide(Access::Admin, &athlete), GateDecision::RedirectToSignIn);
    }

    #[test]
    fn test_admin() {
        let admin = AuthState::signed_in(user(true));
        assert_eq!(decide(Access::GuestOnly, &admin), GateDecision::RedirectHome);
        assert_eq!(decide(Access::Member, &admin), GateDecision::Render);
        assert_eq!(decide(Access::Admin, &admin), GateDecision::Render);
    }

    #[test]
    fn test_stale_user_while_reloading_waits() {
        // After sign-out the old user may linger until the reload finishes
        let mut state = AuthState::signed_in(user(true));
        state.loading = true;
        assert_eq!(decide(Access::Admin, &state), GateDecision::Loading);
    }
}
