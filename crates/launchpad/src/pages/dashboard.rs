// File: src/pages/dashboard.rs
// Purpose: Dashboard overview and settings pages

use maud::{html, Markup};

use crate::components::{card, card_description, card_title};
use crate::constants::Route;
use crate::metadata::SiteMetadata;

use super::layout;

fn page_heading(title: &str, subtitle: &str) -> Markup {
    html! {
        div {
            h1 class="text-3xl font-bold tracking-tight" { (title) }
            p class="text-muted-foreground" { (subtitle) }
        }
    }
}

fn placeholder_card(title: &str, description: &str, body: &str) -> Markup {
    card(
        html! {
            (card_title(title))
            (card_description(description))
        },
        Some(html! { p class="text-sm text-muted-foreground" { (body) } }),
    )
}

pub fn render(meta: &SiteMetadata) -> Markup {
    layout::dashboard(
        meta,
        "Dashboard",
        Route::Dashboard.path(),
        html! {
            div class="space-y-6" {
                (page_heading("Dashboard", "Welcome back! Here's an overview of your account."))
                div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3" {
                    (placeholder_card("Overview", "Your account summary", "Add your dashboard content here"))
                    (placeholder_card("Recent Activity", "Your latest actions", "Activity feed will appear here"))
                    (placeholder_card("Quick Actions", "Common tasks", "Quick action buttons here"))
                }
            }
        },
    )
}

pub fn render_settings(meta: &SiteMetadata) -> Markup {
    layout::dashboard(
        meta,
        "Settings",
        Route::Settings.path(),
        html! {
            div class="space-y-6" {
                (page_heading("Settings", "Manage your account and application preferences."))
                div class="grid gap-4 md:grid-cols-2" {
                    (placeholder_card("Profile", "Your name and email address", "Profile settings will appear here"))
                    (placeholder_card("Notifications", "How we contact you", "Notification preferences will appear here"))
                }
            }
        },
    )
}
