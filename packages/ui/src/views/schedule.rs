use api::{group_by_date, ApiError, ScheduleDay, Training, TrainingKind};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Card};
use crate::icons::{FaCalendarDays, FaClock, FaLocationDot, FaUser, FaUsers};
use crate::{use_auth, use_client, use_client_config, Icon};

pub const NEW_TRAINING_PATH: &str = "/admin/schedule/new";

pub fn edit_training_path(id: i64) -> String {
    format!("/admin/schedule/edit/{id}")
}

/// What a schedule card shows, derived from the entry and the viewer's role.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleCardModel {
    pub title: String,
    pub kind: TrainingKind,
    pub time: String,
    pub coach: Option<String>,
    pub location: String,
    pub participants: Option<String>,
    /// Edit link, present only for administrators.
    pub edit_path: Option<String>,
}

impl ScheduleCardModel {
    pub fn new(training: &Training, is_admin: bool) -> Self {
        let participants = match training.kind {
            TrainingKind::Group => Some(format!(
                "Participants: {}",
                training.participants.unwrap_or(0)
            )),
            TrainingKind::Individual => None,
        };
        Self {
            title: training.title.clone(),
            kind: training.kind,
            time: training.time.clone(),
            coach: training.coach.clone().filter(|c| !c.trim().is_empty()),
            location: training.location.clone(),
            participants,
            edit_path: is_admin.then(|| edit_training_path(training.id)),
        }
    }
}

#[component]
pub fn ScheduleCard(training: Training, is_admin: bool) -> Element {
    let model = ScheduleCardModel::new(&training, is_admin);
    let nav = use_navigator();

    rsx! {
        Card {
            class: "schedule-card",
            div {
                class: "schedule-card-head",
                h3 { class: "card-title", "{model.title}" }
                span {
                    class: "pill",
                    if model.kind == TrainingKind::Group {
                        Icon { icon: FaUsers, width: 12, height: 12 }
                    } else {
                        Icon { icon: FaUser, width: 12, height: 12 }
                    }
                    "{model.kind.label()}"
                }
            }
            p {
                class: "meta",
                Icon { icon: FaClock, width: 14, height: 14 }
                strong { "{model.time}" }
                if let Some(coach) = &model.coach {
                    span { "with {coach}" }
                }
            }
            p {
                class: "meta",
                Icon { icon: FaLocationDot, width: 14, height: 14 }
                span { "{model.location}" }
            }
            if let Some(participants) = &model.participants {
                p {
                    class: "meta",
                    Icon { icon: FaUsers, width: 14, height: 14 }
                    span { "{participants}" }
                }
            }
            if let Some(path) = model.edit_path.clone() {
                Button {
                    variant: ButtonVariant::Secondary,
                    class: "w-full",
                    onclick: move |_| {
                        nav.push(path.as_str());
                    },
                    "Edit"
                }
            }
        }
    }
}

/// Entries of one day under a date heading.
#[component]
pub fn ScheduleDayList(days: Vec<ScheduleDay>, is_admin: bool) -> Element {
    rsx! {
        for day in days {
            section {
                key: "{day.date}",
                class: "schedule-day",
                h2 {
                    class: "day-title",
                    Icon { icon: FaCalendarDays, width: 18, height: 18 }
                    span { "{day.date}" }
                }
                div {
                    class: "card-grid",
                    for training in day.trainings.iter() {
                        ScheduleCard { key: "{training.id}", training: training.clone(), is_admin }
                    }
                }
            }
        }
    }
}

#[component]
fn TabButton(kind: TrainingKind, current: TrainingKind, onclick: EventHandler<TrainingKind>) -> Element {
    rsx! {
        button {
            class: if kind == current { "tab active" } else { "tab" },
            onclick: move |_| onclick.call(kind),
            if kind == TrainingKind::Group {
                Icon { icon: FaUsers, width: 16, height: 16 }
            } else {
                Icon { icon: FaUser, width: 16, height: 16 }
            }
            "{kind.label()}"
        }
    }
}

/// A finished schedule fetch, tagged with the tab it was made for.
pub type ScheduleFetch = (TrainingKind, Result<Vec<ScheduleDay>, ApiError>);

/// What the schedule page body shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ScheduleState {
    Loading,
    Failed,
    Empty,
    Days(Vec<ScheduleDay>),
}

impl ScheduleState {
    /// State for tab `current`. A result fetched for another tab is stale and
    /// counts as still loading.
    pub fn for_tab(current: TrainingKind, fetched: Option<ScheduleFetch>) -> Self {
        match fetched {
            Some((kind, result)) if kind == current => match result {
                Err(_) => ScheduleState::Failed,
                Ok(days) if days.is_empty() => ScheduleState::Empty,
                Ok(days) => ScheduleState::Days(days),
            },
            _ => ScheduleState::Loading,
        }
    }
}

/// Schedule browser with individual/group tabs.
#[component]
pub fn ScheduleView() -> Element {
    let auth = use_auth();
    let client = use_client();
    let config = use_client_config();
    let nav = use_navigator();
    let mut tab = use_signal(|| TrainingKind::from(config.schedule.default_view));

    let schedule = use_resource(move || {
        let client = client.clone();
        async move {
            let kind = tab();
            let result = client.schedule(Some(kind)).await.map(group_by_date);
            if let Err(e) = &result {
                tracing::error!("Failed to load {} schedule: {}", kind, e);
            }
            (kind, result)
        }
    });

    let is_admin = auth().is_admin();
    let current = tab();
    let state = ScheduleState::for_tab(current, schedule.read().clone());

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Schedule" }

            if is_admin {
                div {
                    class: "page-actions",
                    Button {
                        onclick: move |_| {
                            nav.push(NEW_TRAINING_PATH);
                        },
                        "Add training"
                    }
                }
            }

            div {
                class: "tabs",
                for kind in TrainingKind::ALL {
                    TabButton { key: "{kind}", kind, current, onclick: move |k| tab.set(k) }
                }
            }

            {match state {
                ScheduleState::Loading => rsx! {
                    Card { class: "placeholder", p { "Loading schedule..." } }
                },
                ScheduleState::Failed => rsx! {
                    Card { class: "placeholder", p { class: "text-error", "Could not load the schedule." } }
                },
                ScheduleState::Empty => rsx! {
                    Card {
                        class: "placeholder",
                        p { "There are no {current.label().to_lowercase()} trainings scheduled yet." }
                    }
                },
                ScheduleState::Days(days) => rsx! {
                    ScheduleDayList { days, is_admin }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn training(id: i64, kind: TrainingKind) -> Training {
        Training {
            id,
            coach: Some("Irina".to_string()),
            kind,
            title: "Swim".to_string(),
            time: "10:00 - 11:00".to_string(),
            location: "Pool".to_string(),
            date: "2024-05-25".to_string(),
            participants: if kind == TrainingKind::Group { Some(12) } else { None },
        }
    }

    #[test]
    fn test_admin_sees_edit_on_every_entry() {
        let entries: Vec<Training> = (1..=5)
            .map(|i| training(i, if i % 2 == 0 { TrainingKind::Group } else { TrainingKind::Individual }))
            .collect();
        for entry in &entries {
            let model = ScheduleCardModel::new(entry, true);
            assert_eq!(model.edit_path, Some(format!("/admin/schedule/edit/{}", entry.id)));
        }
    }

    #[test]
    fn test_non_admin_never_sees_edit() {
        for kind in TrainingKind::ALL {
            let model = ScheduleCardModel::new(&training(7, kind), false);
            assert!(model.edit_path.is_none());
        }
    }

    #[test]
    fn test_participants_only_for_groups() {
        let group = ScheduleCardModel::new(&training(1, TrainingKind::Group), false);
        assert_eq!(group.participants.as_deref(), Some("Participants: 12"));

        let individual = ScheduleCardModel::new(&training(2, TrainingKind::Individual), false);
        assert!(individual.participants.is_none());
    }

    #[test]
    fn test_blank_coach_hidden() {
        let mut entry = training(3, TrainingKind::Individual);
        entry.coach = Some("  ".to_string());
        assert!(ScheduleCardModel::new(&entry, false).coach.is_none());
    }

    fn day(kind: TrainingKind) -> ScheduleDay {
        ScheduleDay {
            date: "2024-05-25".to_string(),
            trainings: vec![training(1, kind)],
        }
    }

    #[test]
    fn test_result_for_previous_tab_shows_loading() {
        let individual: ScheduleFetch = (TrainingKind::Individual, Ok(vec![day(TrainingKind::Individual)]));
        assert_eq!(
            ScheduleState::for_tab(TrainingKind::Group, Some(individual.clone())),
            ScheduleState::Loading
        );
        assert_eq!(
            ScheduleState::for_tab(TrainingKind::Individual, Some(individual)),
            ScheduleState::Days(vec![day(TrainingKind::Individual)])
        );
    }

    #[test]
    fn test_schedule_state_for_current_tab() {
        assert_eq!(ScheduleState::for_tab(TrainingKind::Group, None), ScheduleState::Loading);
        assert_eq!(
            ScheduleState::for_tab(TrainingKind::Group, Some((TrainingKind::Group, Ok(Vec::new())))),
            ScheduleState::Empty
        );
        let failed: ScheduleFetch = (TrainingKind::Group, Err(ApiError::NotAuthenticated));
        assert_eq!(ScheduleState::for_tab(TrainingKind::Group, Some(failed.clone())), ScheduleState::Failed);
        // A failure from the other tab is stale too
        assert_eq!(ScheduleState::for_tab(TrainingKind::Individual, Some(failed)), ScheduleState::Loading);
    }
}
