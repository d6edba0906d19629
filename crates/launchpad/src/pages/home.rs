// File: src/pages/home.rs
// Purpose: Landing page

use maud::{html, Markup};

use crate::components::{card, card_description, card_title, link_button, ButtonSize, ButtonVariant};
use crate::constants::{Route, APP_NAME};
use crate::metadata::SiteMetadata;
use crate::nav::Icon;

use super::layout;

struct Feature {
    icon: Icon,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: Icon::Code2,
        title: "Rust & axum",
        description: "Built on axum with strongly typed handlers and compile-time checked templates",
    },
    Feature {
        icon: Icon::Database,
        title: "PostgreSQL & SQLx",
        description: "Production-ready database access with SQLx and a seed script to get started",
    },
    Feature {
        icon: Icon::Lock,
        title: "Authentication Ready",
        description: "A request gate in front of every route, ready for an authentication provider",
    },
    Feature {
        icon: Icon::Palette,
        title: "Tailwind CSS Components",
        description: "Responsive UI with Tailwind CSS class conventions and reusable Maud components",
    },
    Feature {
        icon: Icon::Zap,
        title: "Optimized Performance",
        description: "Server-rendered HTML with no client runtime required for fast first paint",
    },
    Feature {
        icon: Icon::Rocket,
        title: "Ready to Deploy",
        description: "Single binary with environment-based configuration ready for any host",
    },
];

fn brand() -> Markup {
    html! {
        div class="flex items-center space-x-2" {
            (Icon::Rocket.render("h-6 w-6"))
            span class="font-bold text-xl" { (APP_NAME) }
        }
    }
}

fn header_links() -> Markup {
    html! {
        nav class="flex items-center space-x-6" {
            a href=(Route::SignIn.path())
                class="text-sm font-medium text-muted-foreground transition-colors hover:text-primary" {
                "Sign In"
            }
            (link_button(Route::SignUp.path(), ButtonVariant::Default, ButtonSize::Default, None, html! { "Get Started" }))
        }
    }
}

fn hero() -> Markup {
    html! {
        section class="container flex flex-col items-center justify-center space-y-6 py-24 md:py-32" {
            div class="flex max-w-[64rem] flex-col items-center gap-4 text-center" {
                h1 class="font-bold text-4xl sm:text-5xl md:text-6xl lg:text-7xl" {
                    "Build Your Next Project"
                    span class="text-primary" { " Faster" }
                }
                p class="max-w-[42rem] leading-normal text-muted-foreground sm:text-xl sm:leading-8" {
                    "A production-ready Rust template with everything you need to build modern web applications. "
                    "Authentication, database, UI components, and more."
                }
                div class="flex gap-4" {
                    (link_button(Route::SignUp.path(), ButtonVariant::Default, ButtonSize::Large, None, html! {
                        "Start Building"
                        (Icon::ArrowRight.render("ml-2 h-4 w-4"))
                    }))
                    (link_button(Route::Dashboard.path(), ButtonVariant::Outline, ButtonSize::Large, None, html! { "View Demo" }))
                }
            }
        }
    }
}

fn features() -> Markup {
    html! {
        section class="container py-24 md:py-32" {
            div class="mx-auto flex max-w-[58rem] flex-col items-center space-y-4 text-center" {
                h2 class="font-bold text-3xl leading-[1.1] sm:text-3xl md:text-5xl" { "Everything You Need" }
                p class="max-w-[85%] leading-normal text-muted-foreground sm:text-lg sm:leading-7" {
                    "Built with the best tools and practices for modern web development"
                }
            }
            div class="mx-auto grid gap-4 md:grid-cols-2 lg:grid-cols-3 mt-12" {
                @for feature in &FEATURES {
                    (card(html! {
                        (feature.icon.render("h-10 w-10 mb-2 text-primary"))
                        (card_title(feature.title))
                        (card_description(feature.description))
                    }, None))
                }
            }
        }
    }
}

fn call_to_action() -> Markup {
    html! {
        section class="container py-24 md:py-32" {
            div class="mx-auto flex max-w-[58rem] flex-col items-center justify-center gap-4 text-center" {
                h2 class="font-bold text-3xl leading-[1.1] sm:text-3xl md:text-5xl" { "Ready to Get Started?" }
                p class="max-w-[85%] leading-normal text-muted-foreground sm:text-lg sm:leading-7" {
                    "Clone this template and start building your next project in minutes"
                }
                (link_button(Route::SignUp.path(), ButtonVariant::Default, ButtonSize::Large, Some("mt-4"), html! {
                    "Create Your Account"
                    (Icon::ArrowRight.render("ml-2 h-4 w-4"))
                }))
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="border-t py-6 md:py-0" {
            div class="container flex flex-col items-center justify-between gap-4 md:h-24 md:flex-row" {
                div class="flex flex-col items-center gap-4 px-8 md:flex-row md:gap-2 md:px-0" {
                    p class="text-center text-sm leading-loose text-muted-foreground md:text-left" {
                        "Built by Your Agency. The source code is available on GitHub."
                    }
                }
            }
        }
    }
}

pub fn render(meta: &SiteMetadata) -> Markup {
    layout::root(
        meta,
        None,
        html! {
            div class="flex min-h-screen flex-col" {
                (layout::header(brand(), header_links()))
                (hero())
                (features())
                (call_to_action())
                (footer())
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_page_sections() {
        let html = render(&SiteMetadata::default()).into_string();
        assert!(html.contains("Build Your Next Project"));
        assert!(html.contains("Everything You Need"));
        assert!(html.contains("Ready to Get Started?"));
        assert_eq!(html.matches("rounded-lg border bg-card").count(), FEATURES.len());
    }

    #[test]
    fn test_landing_page_links_use_route_registry() {
        let html = render(&SiteMetadata::default()).into_string();
        assert!(html.contains(r#"href="/sign-in""#));
        assert!(html.contains(r#"href="/sign-up""#));
        assert!(html.contains(r#"href="/dashboard""#));
    }
}
