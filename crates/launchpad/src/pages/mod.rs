// File: src/pages/mod.rs
// Purpose: Page handlers

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use maud::html;

use crate::constants::Route;
use crate::state::AppState;

pub mod auth;
pub mod dashboard;
pub mod home;
pub mod layout;

pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(home::render(&state.metadata).into_string())
}

pub async fn sign_in(State(state): State<AppState>) -> Html<String> {
    Html(auth::render_sign_in(&state.metadata).into_string())
}

pub async fn sign_up(State(state): State<AppState>) -> Html<String> {
    Html(auth::render_sign_up(&state.metadata).into_string())
}

pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    Html(dashboard::render(&state.metadata).into_string())
}

pub async fn settings(State(state): State<AppState>) -> Html<String> {
    Html(dashboard::render_settings(&state.metadata).into_string())
}

/// Fallback for unknown paths
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "page not found");
    let markup = layout::root(
        &state.metadata,
        Some("Page Not Found"),
        html! {
            div class="container flex min-h-screen flex-col items-center justify-center gap-4" {
                h1 class="font-bold text-4xl" { "404 Page Not Found" }
                p class="text-muted-foreground" { "Route '" (uri.path()) "' not found" }
                a href=(Route::Home.path()) class="text-primary underline" { "Go Home" }
            }
        },
    );
    (StatusCode::NOT_FOUND, Html(markup.into_string())).into_response()
}
