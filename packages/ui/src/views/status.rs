use dioxus::prelude::*;

use crate::gate::HOME_PATH;

/// Full-page placeholder while the session is being resolved.
#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div {
            class: "page centered",
            div { class: "spinner" }
            p { class: "muted", "Loading..." }
        }
    }
}

#[component]
pub fn NotFoundView(path: String) -> Element {
    rsx! {
        div {
            class: "page centered",
            h1 { class: "page-title", "Page not found" }
            p { class: "muted", "Nothing lives at /{path}." }
            Link { to: HOME_PATH, "Go to the dashboard" }
        }
    }
}
