//! Dashboard navigation with active-link highlighting.
//!
//! An item is active when its `href` equals the current path exactly.
//! `/dashboard/settings` does not activate `/dashboard`.

use maud::{html, Markup};

use crate::constants::{Route, APP_NAME};

/// Symbolic icon reference, rendered as a lucide placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    LayoutDashboard,
    Settings,
    Rocket,
    ArrowRight,
    Code2,
    Database,
    Lock,
    Palette,
    Zap,
}

impl Icon {
    pub fn lucide_name(self) -> &'static str {
        match self {
            Icon::LayoutDashboard => "layout-dashboard",
            Icon::Settings => "settings",
            Icon::Rocket => "rocket",
            Icon::ArrowRight => "arrow-right",
            Icon::Code2 => "code-2",
            Icon::Database => "database",
            Icon::Lock => "lock",
            Icon::Palette => "palette",
            Icon::Zap => "zap",
        }
    }

    pub fn render(self, class: &str) -> Markup {
        html! {
            i data-lucide=(self.lucide_name()) class=(class) aria-hidden="true" {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const DASHBOARD_NAV: [NavItem; 2] = [
    NavItem {
        title: "Dashboard",
        href: Route::Dashboard.path(),
        icon: Icon::LayoutDashboard,
    },
    NavItem {
        title: "Settings",
        href: Route::Settings.path(),
        icon: Icon::Settings,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Active,
    Inactive,
}

impl LinkState {
    pub fn class(self) -> &'static str {
        match self {
            LinkState::Active => "text-foreground",
            LinkState::Inactive => "text-muted-foreground",
        }
    }

    pub fn is_active(self) -> bool {
        self == LinkState::Active
    }
}

/// A navigation item paired with its derived state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub item: NavItem,
    pub state: LinkState,
}

pub fn is_active(item: &NavItem, current_path: &str) -> bool {
    item.href == current_path
}

pub fn highlight(current_path: &str, items: &[NavItem]) -> Vec<NavLink> {
    items
        .iter()
        .map(|item| NavLink {
            item: *item,
            state: if is_active(item, current_path) {
                LinkState::Active
            } else {
                LinkState::Inactive
            },
        })
        .collect()
}

const LINK_BASE_CLASS: &str =
    "flex items-center space-x-2 text-sm font-medium transition-colors hover:text-primary";

/// Render the dashboard header navigation for the given path
pub fn dashboard_nav(current_path: &str) -> Markup {
    html! {
        nav class="flex items-center space-x-6" {
            a href=(Route::Dashboard.path()) class="flex items-center space-x-2" {
                span class="font-bold text-xl" { (APP_NAME) }
            }
            div class="hidden md:flex items-center space-x-4" {
                @for link in highlight(current_path, &DASHBOARD_NAV) {
                    a href=(link.item.href)
                        class={ (LINK_BASE_CLASS) " " (link.state.class()) }
                        aria-current=[link.state.is_active().then_some("page")] {
                        (link.item.icon.render("h-4 w-4"))
                        span { (link.item.title) }
                    }
                }
            }
        }
    }
}
