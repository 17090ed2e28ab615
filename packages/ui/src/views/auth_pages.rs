//! Sign-in, sign-up, and sign-out pages.

use api::SignupRequest;
use dioxus::prelude::*;

use crate::components::{alert, Button, Card, ErrorBanner, Input};
use crate::gate::{HOME_PATH, SIGN_IN_PATH};
use crate::{use_client, use_session};

#[component]
fn AuthCard(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div {
            class: "auth-page",
            Card {
                class: "auth-card",
                div {
                    class: "auth-header",
                    h1 { "{title}" }
                    p { class: "muted", "{subtitle}" }
                }
                {children}
            }
        }
    }
}

#[component]
pub fn SignInView() -> Element {
    let client = use_client();
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            loading.set(true);
            match client.signin(email().trim(), &password()).await {
                Ok(_) => {
                    session.changed();
                    nav.push(HOME_PATH);
                }
                Err(e) => {
                    loading.set(false);
                    alert(&format!("Sign-in failed: {e}"));
                }
            }
        });
    };

    rsx! {
        AuthCard {
            title: "Sign in to Sport School",
            subtitle: "Use your account to continue",
            form {
                class: "auth-form",
                onsubmit: handle_submit,
                Input {
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                Input {
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                Button {
                    r#type: "submit",
                    class: "w-full",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }
            p {
                class: "auth-footer",
                "No account yet? "
                Link { to: "/signup", "Sign up" }
            }
        }
    }
}

#[component]
pub fn SignUpView() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            let request = SignupRequest::from_form(&email(), &password(), &full_name(), &phone());
            if let Err(e) = request.validate() {
                error.set(Some(e.to_string()));
                return;
            }

            loading.set(true);
            match client.signup(&request).await {
                Ok(_) => {
                    nav.push(SIGN_IN_PATH);
                }
                Err(e) => {
                    loading.set(false);
                    alert(&format!("Registration failed: {e}"));
                }
            }
        });
    };

    rsx! {
        AuthCard {
            title: "Create an account",
            subtitle: "Join the sports school",
            form {
                class: "auth-form",
                onsubmit: handle_submit,
                if let Some(message) = error() {
                    ErrorBanner { message }
                }
                Input {
                    placeholder: "Full name",
                    required: true,
                    value: full_name(),
                    oninput: move |evt: FormEvent| full_name.set(evt.value()),
                }
                Input {
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                Input {
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                Input {
                    r#type: "tel",
                    placeholder: "Phone number",
                    required: true,
                    value: phone(),
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }
                Button {
                    r#type: "submit",
                    class: "w-full",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }
            p {
                class: "auth-footer",
                "Already have an account? "
                Link { to: SIGN_IN_PATH, "Sign in" }
            }
        }
    }
}

/// Signs out on mount, then returns to the sign-in page whatever the outcome.
#[component]
pub fn LogoutView() -> Element {
    let client = use_client();
    let session = use_session();
    let nav = use_navigator();

    use_hook(move || {
        spawn(async move {
            if let Err(e) = client.logout().await {
                tracing::warn!("Logout request failed: {}", e);
            }
            session.changed();
            nav.replace(SIGN_IN_PATH);
        });
    });

    rsx! {
        div {
            class: "page centered",
            p { class: "muted", "Signing out..." }
        }
    }
}
