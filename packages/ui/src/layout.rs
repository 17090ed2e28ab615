use dioxus::prelude::*;
use dioxus_free_icons::IconShape;

use crate::icons::{FaBars, FaCalendarDays, FaHouse, FaRightFromBracket, FaUsers, FaXmark};
use crate::{use_auth, Icon};

const LAYOUT_CSS: Asset = asset!("/assets/styling/layout.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Schedule,
    Trainers,
    Logout,
}

impl NavItem {
    pub const ALL: [NavItem; 4] = [
        NavItem::Dashboard,
        NavItem::Schedule,
        NavItem::Trainers,
        NavItem::Logout,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "/",
            NavItem::Schedule => "/schedule",
            NavItem::Trainers => "/coaches",
            NavItem::Logout => "/logout",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Schedule => "Schedule",
            NavItem::Trainers => "Trainers",
            NavItem::Logout => "Log out",
        }
    }

    /// Whether this item should be highlighted for `current` (a route path).
    pub fn is_active(&self, current: &str) -> bool {
        let current = current.split(['?', '#']).next().unwrap_or(current);
        match self {
            NavItem::Dashboard => current == "/",
            NavItem::Schedule => current == "/schedule" || current.starts_with("/admin/schedule/"),
            NavItem::Trainers => current == "/coaches" || current.starts_with("/trainers/"),
            NavItem::Logout => current == "/logout",
        }
    }
}

#[component]
fn NavIcon(item: NavItem) -> Element {
    match item {
        NavItem::Dashboard => sized_icon(FaHouse),
        NavItem::Schedule => sized_icon(FaCalendarDays),
        NavItem::Trainers => sized_icon(FaUsers),
        NavItem::Logout => sized_icon(FaRightFromBracket),
    }
}

fn sized_icon<I: IconShape + Clone + PartialEq + 'static>(icon: I) -> Element {
    rsx! {
        Icon { icon, width: 18, height: 18 }
    }
}

fn nav_class(active: bool) -> String {
    if active { "nav-item active" } else { "nav-item" }.to_string()
}

#[component]
fn NavLinks(active: String, on_navigate: Option<EventHandler<()>>) -> Element {
    rsx! {
        nav {
            class: "nav-links",
            for item in NavItem::ALL {
                Link {
                    key: "{item.path()}",
                    class: nav_class(item.is_active(&active)),
                    to: item.path(),
                    onclick: move |_| {
                        if let Some(handler) = on_navigate {
                            handler.call(());
                        }
                    },
                    NavIcon { item }
                    span { "{item.label()}" }
                }
            }
        }
    }
}

#[component]
fn UserBadge() -> Element {
    let auth = use_auth();
    let Some(user) = auth().user else {
        return rsx! {};
    };
    let role = if user.is_admin { "Administrator" } else { "Athlete" };

    rsx! {
        div {
            class: "sidebar-user",
            span { class: "sidebar-user-name", "{user.display_name()}" }
            span { class: "sidebar-user-role", "{role}" }
        }
    }
}

/// Fixed sidebar shown on wide screens.
#[component]
pub fn Sidebar(active: String) -> Element {
    rsx! {
        aside {
            class: "sidebar",
            div { class: "sidebar-brand", "SPORT SCHOOL" }
            UserBadge {}
            NavLinks { active }
        }
    }
}

/// Slide-in navigation for narrow screens.
#[component]
pub fn MobileSidebar(active: String, open: bool, on_close: EventHandler<()>) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "mobile-overlay",
            onclick: move |_| on_close.call(()),
        }
        aside {
            class: "sidebar mobile",
            div {
                class: "sidebar-brand",
                "SPORT SCHOOL"
                button {
                    class: "icon-button",
                    title: "Close menu",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 18, height: 18 }
                }
            }
            UserBadge {}
            NavLinks { active, on_navigate: move |_| on_close.call(()) }
        }
    }
}

/// Page chrome for signed-in routes: sidebar, mobile top bar, content area.
#[component]
pub fn MainLayout(active: String, children: Element) -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        document::Stylesheet { href: LAYOUT_CSS }

        div {
            class: "app-shell",
            Sidebar { active: active.clone() }
            MobileSidebar {
                active: active.clone(),
                open: menu_open(),
                on_close: move |_| menu_open.set(false),
            }
            div {
                class: "app-main",
                header {
                    class: "topbar",
                    button {
                        class: "icon-button",
                        title: "Open menu",
                        onclick: move |_| menu_open.set(true),
                        Icon { icon: FaBars, width: 20, height: 20 }
                    }
                    span { class: "topbar-title", "SPORT SCHOOL" }
                }
                main { class: "app-content", {children} }
            }
        }
    }
}
