//! HTTP router.

use axum::extract::DefaultBodyLimit;
use axum::http::Request;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::Level;

use crate::api;
use crate::constants::{ApiRoute, Route};
use crate::gate::request_gate;
use crate::pages;
use crate::state::AppState;

/// Build the complete application router.
///
/// Every request, static files included, passes through the request gate.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit;
    let static_dir = ServeDir::new(&state.config.build.static_dir);

    Router::new()
        .route(Route::Home.path(), get(pages::home))
        .route(Route::SignIn.path(), get(pages::sign_in))
        .route(Route::SignUp.path(), get(pages::sign_up))
        .route(Route::Dashboard.path(), get(pages::dashboard))
        .route(Route::Settings.path(), get(pages::settings))
        .route(ApiRoute::Users.prefix(), post(api::validate_user))
        .route(ApiRoute::Posts.prefix(), post(api::validate_post))
        .nest_service("/static", static_dir)
        .fallback(pages::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), request_gate))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::span!(
                    Level::INFO,
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
        .with_state(state)
}
