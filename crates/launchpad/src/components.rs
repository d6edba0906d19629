// File: src/components.rs
// Purpose: Button and card building blocks shared by the pages

use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Large,
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-md text-sm font-medium ring-offset-background transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2";

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            ButtonVariant::Outline => {
                "border border-input bg-background hover:bg-accent hover:text-accent-foreground"
            }
        }
    }
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Default => "h-10 px-4 py-2",
            ButtonSize::Large => "h-11 rounded-md px-8",
        }
    }
}

/// Full class list for a button
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    let mut class = format!("{} {} {}", BUTTON_BASE, variant.class(), size.class());
    if let Some(extra) = extra {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// A link styled as a button
pub fn link_button(
    href: &str,
    variant: ButtonVariant,
    size: ButtonSize,
    extra_class: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        a href=(href) class=(button_class(variant, size, extra_class)) { (content) }
    }
}

pub fn card(header: Markup, content: Option<Markup>) -> Markup {
    html! {
        div class="rounded-lg border bg-card text-card-foreground shadow-sm" {
            div class="flex flex-col space-y-1.5 p-6" { (header) }
            @if let Some(content) = content {
                div class="p-6 pt-0" { (content) }
            }
        }
    }
}

pub fn card_title(title: &str) -> Markup {
    html! { h3 class="text-2xl font-semibold leading-none tracking-tight" { (title) } }
}

pub fn card_description(description: &str) -> Markup {
    html! { p class="text-sm text-muted-foreground" { (description) } }
}
