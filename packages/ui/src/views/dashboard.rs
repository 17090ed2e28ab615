use api::{Trainer, Training, User};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Card, CardHeader};
use crate::icons::{FaCalendarDays, FaClock, FaLocationDot, FaUsers};
use crate::views::schedule::NEW_TRAINING_PATH;
use crate::{use_auth, use_client, Icon};

/// Figures shown on the administrator dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminSummary {
    pub trainers: usize,
    pub trainings: usize,
    pub group_trainings: usize,
    pub days: usize,
}

impl AdminSummary {
    pub fn new(trainers: &[Trainer], schedule: &[Training]) -> Self {
        let mut days: Vec<&str> = schedule.iter().map(|t| t.date.as_str()).collect();
        days.sort_unstable();
        days.dedup();
        Self {
            trainers: trainers.len(),
            trainings: schedule.len(),
            group_trainings: schedule
                .iter()
                .filter(|t| t.kind == api::TrainingKind::Group)
                .count(),
            days: days.len(),
        }
    }
}

/// Home page: picks the dashboard for the signed-in user's role.
#[component]
pub fn DashboardView() -> Element {
    let auth = use_auth();
    let Some(user) = auth().user else {
        return rsx! {};
    };

    if user.is_admin {
        rsx! { AdminDashboard { user } }
    } else {
        rsx! { AthleteDashboard { user } }
    }
}

#[component]
fn StatBlock(#[props(into)] label: String, #[props(into)] value: String) -> Element {
    rsx! {
        Card {
            class: "stat",
            p { class: "stat-label", "{label}" }
            p { class: "stat-value", "{value}" }
        }
    }
}

#[component]
pub fn AthleteDashboard(user: User) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let next = use_resource(move || {
        let client = client.clone();
        async move {
            let result = client
                .schedule(None)
                .await
                .map(|entries| entries.into_iter().next());
            if let Err(e) = &result {
                tracing::warn!("Failed to load next training: {}", e);
            }
            result
        }
    });
    let state = next.read().clone();
    let role = if user.is_athlete { "Athlete" } else { "Member" };

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Hello, {user.display_name()}!" }
            p { class: "muted", "Here is what is coming up at the sports school." }

            div {
                class: "stat-grid",
                StatBlock { label: "Role", value: role }
                StatBlock { label: "Schedule", value: "Individual and group" }
            }

            Card {
                CardHeader { title: "Next training" }
                {match state {
                    None => rsx! { p { class: "muted", "Loading..." } },
                    Some(Err(_)) => rsx! { p { class: "text-error", "Could not load the schedule." } },
                    Some(Ok(None)) => rsx! { p { class: "muted", "Nothing scheduled yet." } },
                    Some(Ok(Some(training))) => rsx! {
                        p { class: "training-item-title", "{training.title}" }
                        p {
                            class: "meta",
                            Icon { icon: FaCalendarDays, width: 14, height: 14 }
                            span { "{training.date}" }
                            Icon { icon: FaClock, width: 14, height: 14 }
                            span { "{training.time}" }
                        }
                        p {
                            class: "meta",
                            Icon { icon: FaLocationDot, width: 14, height: 14 }
                            span { "{training.location}" }
                        }
                    },
                }}
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        nav.push("/schedule");
                    },
                    "Open schedule"
                }
            }
        }
    }
}

#[component]
pub fn AdminDashboard(user: User) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let summary = use_resource(move || {
        let client = client.clone();
        async move {
            let trainers = client.trainers().await?;
            let schedule = client.schedule(None).await?;
            Ok::<_, api::ApiError>(AdminSummary::new(&trainers, &schedule))
        }
    });
    let state = summary.read().clone();

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Welcome, {user.display_name()}" }
            p { class: "muted", "Administrator overview" }

            {match state {
                None => rsx! { p { class: "muted", "Loading summary..." } },
                Some(Err(e)) => rsx! { p { class: "text-error", "Could not load summary: {e}" } },
                Some(Ok(s)) => rsx! {
                    div {
                        class: "stat-grid",
                        StatBlock { label: "Trainers", value: "{s.trainers}" }
                        StatBlock { label: "Scheduled trainings", value: "{s.trainings}" }
                        StatBlock { label: "Group trainings", value: "{s.group_trainings}" }
                        StatBlock { label: "Training days", value: "{s.days}" }
                    }
                },
            }}

            Card {
                CardHeader { title: "Quick actions" }
                div {
                    class: "action-row",
                    Button {
                        onclick: move |_| {
                            nav.push(NEW_TRAINING_PATH);
                        },
                        "Create training"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            nav.push("/schedule");
                        },
                        Icon { icon: FaCalendarDays, width: 14, height: 14 }
                        "View schedule"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            nav.push("/coaches");
                        },
                        Icon { icon: FaUsers, width: 14, height: 14 }
                        "Trainers"
                    }
                }
            }
        }
    }
}
