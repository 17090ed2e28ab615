use api::{save_training, Group, Hall, SaveError, TrainingDraft};
use dioxus::prelude::*;

use crate::components::{alert, Button, ButtonVariant, Card, ErrorBanner, Input, Select, SelectOption};
use crate::use_client;
use crate::views::trainer_profile::parse_path_id;

const SCHEDULE_PATH: &str = "/schedule";

/// Raw values of the form controls, as strings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormValues {
    pub group: String,
    pub hall: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl FormValues {
    pub fn to_draft(&self) -> TrainingDraft {
        TrainingDraft {
            group_id: self.group.trim().parse().ok(),
            hall_id: self.hall.trim().parse().ok(),
            date: api::schedule::parse_date(&self.date),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        }
    }

    pub fn from_draft(draft: &TrainingDraft) -> Self {
        Self {
            group: draft.group_id.map(|id| id.to_string()).unwrap_or_default(),
            hall: draft.hall_id.map(|id| id.to_string()).unwrap_or_default(),
            date: draft
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            start_time: draft.start_time.clone(),
            end_time: draft.end_time.clone(),
        }
    }

    /// Apply pre-filled values unless the user has already started typing.
    /// Returns whether they were applied.
    pub fn prefill(&mut self, filled: FormValues) -> bool {
        if *self != FormValues::default() {
            return false;
        }
        *self = filled;
        true
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Catalog {
    groups: Vec<Group>,
    halls: Vec<Hall>,
}

/// Create a training, or edit the one named by `training_id`.
#[component]
pub fn ScheduleFormView(#[props(default)] training_id: Option<String>) -> Element {
    let editing = training_id.is_some();
    let edit_id = training_id.as_deref().and_then(parse_path_id);

    if editing && edit_id.is_none() {
        return rsx! {
            div {
                class: "page centered",
                h1 { class: "page-title", "Training not found" }
                Link { to: SCHEDULE_PATH, "Back to schedule" }
            }
        };
    }

    rsx! { ScheduleForm { edit_id } }
}

#[component]
fn ScheduleForm(#[props(!optional)] edit_id: Option<i64>) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut values = use_signal(FormValues::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let catalog = {
        let client = client.clone();
        use_resource(move || {
            let client = client.clone();
            async move {
                let groups = client.groups().await?;
                let halls = client.halls().await?;
                Ok::<_, api::ApiError>(Catalog { groups, halls })
            }
        })
    };

    // Pre-fill date and times when editing an existing entry
    {
        let client = client.clone();
        use_hook(move || {
            if let Some(id) = edit_id {
                spawn(async move {
                    match client.schedule(None).await {
                        Ok(entries) => {
                            if let Some(entry) = entries.iter().find(|t| t.id == id) {
                                let filled = FormValues::from_draft(&TrainingDraft::from_training(entry));
                                if !values.write().prefill(filled) {
                                    tracing::debug!("Form already edited, skipping pre-fill of training {}", id);
                                }
                            }
                        }
                        Err(e) => tracing::warn!("Could not pre-fill training {}: {}", id, e),
                    }
                });
            }
        });
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            saving.set(true);
            let result = save_training(&client, edit_id, &values().to_draft()).await;
            saving.set(false);

            match result {
                Ok(()) => {
                    nav.push(SCHEDULE_PATH);
                }
                Err(SaveError::Invalid(e)) => error.set(Some(e.to_string())),
                Err(SaveError::Api(e)) => {
                    alert(&format!("Could not save training: {e}"));
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let (group_options, hall_options, catalog_error) = match catalog.read().clone() {
        Some(Ok(c)) => (
            c.groups.iter().map(|g| SelectOption::new(g.id, g.name.clone())).collect(),
            c.halls.iter().map(|h| SelectOption::new(h.id, h.label())).collect(),
            None,
        ),
        Some(Err(e)) => (Vec::new(), Vec::new(), Some(format!("Could not load groups and halls: {e}"))),
        None => (Vec::new(), Vec::new(), None),
    };
    let current = values();
    let title = if edit_id.is_some() { "Edit training" } else { "New training" };

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "{title}" }

            Card {
                class: "form-card",
                form {
                    class: "schedule-form",
                    onsubmit: handle_submit,

                    if let Some(message) = catalog_error {
                        ErrorBanner { message }
                    }
                    if let Some(message) = error() {
                        ErrorBanner { message }
                    }

                    Select {
                        id: "group",
                        label: "Group",
                        placeholder: "Select a group",
                        options: group_options,
                        value: current.group.clone(),
                        onchange: move |evt: FormEvent| values.write().group = evt.value(),
                    }
                    Select {
                        id: "hall",
                        label: "Hall",
                        placeholder: "Select a hall",
                        options: hall_options,
                        value: current.hall.clone(),
                        onchange: move |evt: FormEvent| values.write().hall = evt.value(),
                    }
                    Input {
                        id: "date",
                        label: "Date",
                        r#type: "date",
                        value: current.date.clone(),
                        oninput: move |evt: FormEvent| values.write().date = evt.value(),
                    }
                    div {
                        class: "time-row",
                        Input {
                            id: "start",
                            label: "Start time",
                            r#type: "time",
                            value: current.start_time.clone(),
                            oninput: move |evt: FormEvent| values.write().start_time = evt.value(),
                        }
                        Input {
                            id: "end",
                            label: "End time",
                            r#type: "time",
                            value: current.end_time.clone(),
                            oninput: move |evt: FormEvent| values.write().end_time = evt.value(),
                        }
                    }

                    div {
                        class: "action-row",
                        Button {
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save" }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| {
                                nav.push(SCHEDULE_PATH);
                            },
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
