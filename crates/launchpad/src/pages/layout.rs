// File: src/pages/layout.rs
// Purpose: Root document layout and the dashboard shell

use maud::{html, Markup, DOCTYPE};

use crate::metadata::SiteMetadata;
use crate::nav::dashboard_nav;

const HEADER_CLASS: &str = "sticky top-0 z-50 w-full border-b bg-background/95 backdrop-blur supports-[backdrop-filter]:bg-background/60";

/// Wrap page content in the root document
pub fn root(meta: &SiteMetadata, page_title: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (meta.render(page_title))
                link rel="stylesheet" href="/static/globals.css";
                script src="https://unpkg.com/lucide@latest" defer {}
            }
            body class="font-sans antialiased" {
                (content)
                div id="toaster" role="region" aria-live="polite" {}
                script { "window.addEventListener('DOMContentLoaded',()=>window.lucide&&lucide.createIcons());" }
            }
        }
    }
}

/// Sticky page header shared by the landing page and the dashboard
pub fn header(left: Markup, right: Markup) -> Markup {
    html! {
        header class=(HEADER_CLASS) {
            div class="container flex h-16 items-center" {
                (left)
                div class="ml-auto flex items-center space-x-4" { (right) }
            }
        }
    }
}

/// Dashboard shell: header with navigation for `current_path` around the content
pub fn dashboard(meta: &SiteMetadata, page_title: &str, current_path: &str, content: Markup) -> Markup {
    root(
        meta,
        Some(page_title),
        html! {
            div class="min-h-screen bg-background" {
                (header(dashboard_nav(current_path), html! {}))
                main class="flex-1 container py-6" { (content) }
            }
        },
    )
}
