//! Route components. Each wraps a shared view in the gate for its access level.

use dioxus::prelude::*;

use ui::views::{
    DashboardView, LogoutView, NotFoundView, ScheduleFormView, ScheduleView, SignInView,
    SignUpView, TrainerProfileView, TrainersView,
};
use ui::{Access, Gate, MainLayout};

use crate::Route;

/// Sidebar shell around every signed-in page.
#[component]
pub fn AppShell() -> Element {
    let route = use_route::<Route>();
    rsx! {
        Gate {
            access: Access::Member,
            MainLayout {
                active: route.to_string(),
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
pub fn SignIn() -> Element {
    rsx! {
        Gate { access: Access::GuestOnly, SignInView {} }
    }
}

#[component]
pub fn SignUp() -> Element {
    rsx! {
        Gate { access: Access::GuestOnly, SignUpView {} }
    }
}

#[component]
pub fn Logout() -> Element {
    rsx! { LogoutView {} }
}

#[component]
pub fn Home() -> Element {
    rsx! { DashboardView {} }
}

#[component]
pub fn Schedule() -> Element {
    rsx! { ScheduleView {} }
}

#[component]
pub fn Trainers() -> Element {
    rsx! { TrainersView {} }
}

#[component]
pub fn TrainerProfile(id: String) -> Element {
    rsx! { TrainerProfileView { id } }
}

#[component]
pub fn NewTraining() -> Element {
    rsx! {
        Gate { access: Access::Admin, ScheduleFormView {} }
    }
}

#[component]
pub fn EditTraining(id: String) -> Element {
    rsx! {
        Gate { access: Access::Admin, ScheduleFormView { training_id: id } }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! { NotFoundView { path: segments.join("/") } }
}
