use api::{group_by_date, Training, TrainingKind};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Card};
use crate::icons::{FaArrowLeft, FaBolt, FaCalendarDays, FaEnvelope};
use crate::{use_client, Icon};

const TRAINERS_PATH: &str = "/coaches";

/// Parse an `:id` route segment. Only positive integers are ids.
pub fn parse_path_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

pub fn experience_label(years: u32) -> String {
    match years {
        1 => "1 year".to_string(),
        n => format!("{n} years"),
    }
}

#[component]
fn TrainingItem(training: Training) -> Element {
    let (pill_class, label) = match training.kind {
        TrainingKind::Group => ("pill pill-group", "Group"),
        TrainingKind::Individual => ("pill pill-individual", "Individual"),
    };
    rsx! {
        div {
            class: "training-item",
            div {
                p { class: "training-item-title", "{training.title}" }
                p { class: "meta", "{training.time} · {training.location}" }
            }
            span { class: "{pill_class}", "{label}" }
        }
    }
}

#[component]
fn ProfileError(message: String) -> Element {
    let nav = use_navigator();
    rsx! {
        div {
            class: "page centered",
            h1 { class: "page-title", "{message}" }
            Button {
                variant: ButtonVariant::Secondary,
                onclick: move |_| {
                    nav.push(TRAINERS_PATH);
                },
                "Back to trainers"
            }
        }
    }
}

/// Trainer profile with the trainer's upcoming schedule.
#[component]
pub fn TrainerProfileView(id: String) -> Element {
    let client = use_client();
    let trainer_id = parse_path_id(&id);

    let profile = use_resource(use_reactive((&trainer_id,), move |(trainer_id,)| {
        let client = client.clone();
        async move {
            match trainer_id {
                Some(id) => {
                    let result = client.trainer(id).await.map(Some);
                    if let Err(e) = &result {
                        tracing::error!("Failed to load trainer {}: {}", id, e);
                    }
                    result
                }
                None => Ok(None),
            }
        }
    }));

    let state = profile.read().clone();
    match state {
        None => rsx! {
            div { class: "page centered", h1 { class: "page-title", "Loading..." } }
        },
        Some(Ok(None)) => rsx! { ProfileError { message: "Trainer not found" } },
        Some(Err(_)) => rsx! { ProfileError { message: "Could not load the trainer." } },
        Some(Ok(Some(data))) => {
            let trainer = data.trainer;
            let days = group_by_date(data.schedule);
            let specializations = trainer.specialization.join(", ");
            let experience = experience_label(trainer.experience_years);
            rsx! {
                div {
                    class: "page",
                    Link {
                        class: "back-link",
                        to: TRAINERS_PATH,
                        Icon { icon: FaArrowLeft, width: 14, height: 14 }
                        "Back to trainers"
                    }
                    h1 { class: "page-title", "{trainer.full_name}" }

                    Card {
                        h2 { class: "section-title", "Profile" }
                        p {
                            class: "meta",
                            Icon { icon: FaBolt, width: 14, height: 14 }
                            strong { "Specialization:" }
                            span { "{specializations}" }
                        }
                        p {
                            class: "meta",
                            Icon { icon: FaCalendarDays, width: 14, height: 14 }
                            strong { "Experience:" }
                            span { "{experience}" }
                        }
                        p {
                            class: "meta",
                            Icon { icon: FaEnvelope, width: 14, height: 14 }
                            strong { "Email:" }
                            span { "{trainer.email}" }
                        }
                    }

                    Card {
                        h2 { class: "section-title", "About" }
                        p { "{trainer.bio}" }
                    }

                    Card {
                        h2 { class: "section-title", "Upcoming schedule" }
                        if days.is_empty() {
                            p { class: "muted", "Nothing scheduled for the coming days." }
                        }
                        for day in days.iter() {
                            div {
                                key: "{day.date}",
                                h3 { class: "day-subtitle", "{day.date}" }
                                for training in day.trainings.iter() {
                                    TrainingItem { key: "{training.id}", training: training.clone() }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
