use dioxus::prelude::*;

use store::ClientConfig;
use ui::AuthProvider;
use views::{
    AppShell, EditTraining, Home, Logout, NewTraining, NotFound, Schedule, SignIn, SignUp,
    TrainerProfile, Trainers,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/signin")]
    SignIn {},
    #[route("/signup")]
    SignUp {},
    #[route("/logout")]
    Logout {},
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/schedule")]
        Schedule {},
        #[route("/coaches")]
        Trainers {},
        #[route("/trainers/:id")]
        TrainerProfile { id: String },
        #[route("/admin/schedule/new")]
        NewTraining {},
        #[route("/admin/schedule/edit/:id")]
        EditTraining { id: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Configuration baked in at build time.
fn load_config() -> ClientConfig {
    let mut config = ClientConfig::from_toml_or_default(include_str!("../sportschool.toml"));
    if let Some(url) = option_env!("SPORTSCHOOL_API_URL") {
        config.api.base_url = url.to_string();
    }
    tracing::debug!("Starting with API at {}", config.base_url());
    config
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            config,
            Router::<Route> {}
        }
    }
}
