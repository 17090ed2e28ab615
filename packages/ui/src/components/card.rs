use dioxus::prelude::*;

#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card {class}", {children} }
    }
}

#[component]
pub fn CardHeader(title: String, #[props(default)] subtitle: Option<String>) -> Element {
    rsx! {
        div {
            class: "card-header",
            h3 { class: "card-title", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "card-subtitle", "{subtitle}" }
            }
        }
    }
}

/// Inline error message.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error-banner", role: "alert", "{message}" }
    }
}
