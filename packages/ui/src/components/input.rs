use dioxus::prelude::*;

/// Single-line text input with an optional label above it.
#[component]
pub fn Input(
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] id: String,
    #[props(default)] label: Option<String>,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field {class}",
            if let Some(text) = label {
                label { class: "field-label", r#for: "{id}", "{text}" }
            }
            input {
                class: "input",
                id: "{id}",
                r#type: r#type,
                placeholder: "{placeholder}",
                value: "{value}",
                required,
                disabled,
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

/// One `<option>` of a [`Select`].
#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl ToString, label: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            label: label.into(),
        }
    }
}

/// Dropdown with a leading empty placeholder option.
#[component]
pub fn Select(
    #[props(default)] class: String,
    #[props(default)] id: String,
    #[props(default)] label: Option<String>,
    placeholder: String,
    options: Vec<SelectOption>,
    value: String,
    #[props(default)] disabled: bool,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field {class}",
            if let Some(text) = label {
                label { class: "field-label", r#for: "{id}", "{text}" }
            }
            select {
                class: "input",
                id: "{id}",
                disabled,
                onchange: move |evt| onchange.call(evt),
                option { value: "", selected: value.is_empty(), "{placeholder}" }
                for opt in options {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
