// File: src/pages/auth.rs
// Purpose: Sign-in and sign-up placeholders while authentication is detached

use maud::{html, Markup};

use crate::components::{card, card_description, card_title, link_button, ButtonSize, ButtonVariant};
use crate::constants::Route;
use crate::metadata::SiteMetadata;

use super::layout;

fn auth_page(meta: &SiteMetadata, title: &str, description: &str) -> Markup {
    layout::root(
        meta,
        Some(title),
        html! {
            div class="flex min-h-screen items-center justify-center" {
                div class="w-full max-w-md" {
                    (card(
                        html! {
                            (card_title(title))
                            (card_description(description))
                        },
                        Some(html! {
                            p class="text-sm text-muted-foreground mb-4" {
                                "Authentication is disabled for rapid prototyping. "
                                "Configure the authentication provider keys to enable it."
                            }
                            (link_button(Route::Dashboard.path(), ButtonVariant::Default, ButtonSize::Default, Some("w-full"), html! { "Continue to Dashboard" }))
                        }),
                    ))
                }
            }
        },
    )
}

pub fn render_sign_in(meta: &SiteMetadata) -> Markup {
    auth_page(meta, "Sign In", "Welcome back. Sign in to your account.")
}

pub fn render_sign_up(meta: &SiteMetadata) -> Markup {
    auth_page(meta, "Sign Up", "Create an account to get started.")
}
