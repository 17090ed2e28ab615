use api::Trainer;
use dioxus::prelude::*;

use crate::components::Card;
use crate::icons::{FaBolt, FaCalendarDays, FaChevronRight, FaEnvelope, FaUser};
use crate::{use_client, Icon};

pub fn trainer_profile_path(id: i64) -> String {
    format!("/trainers/{id}")
}

#[component]
pub fn TrainerCard(trainer: Trainer) -> Element {
    rsx! {
        Card {
            class: "trainer-card",
            div {
                class: "trainer-card-head",
                div { class: "avatar", Icon { icon: FaUser, width: 28, height: 28 } }
                div {
                    h3 { class: "card-title", "{trainer.full_name}" }
                    if let Some(spec) = trainer.primary_specialization() {
                        p {
                            class: "meta",
                            Icon { icon: FaBolt, width: 12, height: 12 }
                            "{spec}"
                        }
                    }
                }
            }
            p { class: "trainer-bio", "{trainer.bio}" }
            p {
                class: "meta",
                Icon { icon: FaEnvelope, width: 14, height: 14 }
                span { "{trainer.email}" }
            }
            Link {
                class: "card-link",
                to: trainer_profile_path(trainer.id),
                Icon { icon: FaCalendarDays, width: 16, height: 16 }
                span { "Profile" }
                Icon { icon: FaChevronRight, width: 12, height: 12 }
            }
        }
    }
}

/// Trainer directory.
#[component]
pub fn TrainersView() -> Element {
    let client = use_client();
    let trainers = use_resource(move || {
        let client = client.clone();
        async move {
            let result = client.trainers().await;
            if let Err(e) = &result {
                tracing::error!("Failed to load trainers: {}", e);
            }
            result
        }
    });
    let state = trainers.read().clone();

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Our trainers" }

            {match state {
                None => rsx! { p { "Loading trainers..." } },
                Some(Err(e)) => rsx! { p { class: "text-error", "Could not load trainers: {e}" } },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    Card {
                        class: "placeholder",
                        p { "The trainer list is temporarily unavailable." }
                    }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "card-grid",
                        for trainer in list.iter() {
                            TrainerCard { key: "{trainer.id}", trainer: trainer.clone() }
                        }
                    }
                },
            }}
        }
    }
}
