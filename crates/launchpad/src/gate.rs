//! Request gate.
//!
//! Every request passes through [`request_gate`]. The gate currently forwards
//! everything unchanged: authentication is not attached. [`PathMatcher`]
//! decides which requests the gate is consulted for; it has no effect on the
//! outcome.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::auth::AuthConfig;
use crate::state::AppState;

// Static files by extension; `.js` is excluded separately from `.json`
static STATIC_EXTENSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\.(?:html?|css|js|jpe?g|webp|png|gif|svg|ttf|woff2?|ico|csv|docx?|xlsx?|zip|webmanifest)",
    )
    .expect("static extension pattern is valid")
});

static ALWAYS_INCLUDED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^/(?:api|trpc)").expect("api prefix pattern is valid"));

const FRAMEWORK_INTERNAL_PREFIX: &str = "_next";

/// Decides which request paths the gate is consulted for
#[derive(Debug, Clone, Copy, Default)]
pub struct PathMatcher;

impl PathMatcher {
    pub fn new() -> Self {
        Self
    }

    /// True when the gate should be consulted for `path`
    pub fn matches(&self, path: &str) -> bool {
        Self::is_always_included(path) || self.matches_page_pattern(path)
    }

    /// Paths under /api or /trpc, whatever their extension
    pub fn is_always_included(path: &str) -> bool {
        ALWAYS_INCLUDED.is_match(path)
    }

    fn matches_page_pattern(&self, path: &str) -> bool {
        let Some(rest) = path.strip_prefix('/') else {
            return false;
        };
        let rest = rest.split('?').next().unwrap_or_default();

        !Self::is_framework_internal(rest) && !Self::has_static_extension(rest)
    }

    fn is_framework_internal(rest: &str) -> bool {
        rest.get(..FRAMEWORK_INTERNAL_PREFIX.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(FRAMEWORK_INTERNAL_PREFIX))
    }

    /// Any static extension anywhere in the path, not only at the end
    pub fn has_static_extension(path: &str) -> bool {
        STATIC_EXTENSION.find_iter(path).any(|m| {
            let is_js = m.as_str().eq_ignore_ascii_case(".js");
            let followed_by_on = path
                .get(m.end()..m.end() + 2)
                .is_some_and(|next| next.eq_ignore_ascii_case("on"));
            !(is_js && followed_by_on)
        })
    }
}

/// Outcome of consulting the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Pass the request on unchanged
    Forward,
}

#[derive(Debug, Clone)]
pub struct RequestGate {
    matcher: PathMatcher,
    auth_configured: bool,
}

impl RequestGate {
    pub fn new(auth: &AuthConfig) -> Self {
        let auth_configured = auth.is_configured();
        if auth_configured {
            tracing::warn!(
                "authentication keys are configured but the request gate does not enforce them"
            );
        }
        Self {
            matcher: PathMatcher::new(),
            auth_configured,
        }
    }

    pub fn matcher(&self) -> &PathMatcher {
        &self.matcher
    }

    /// Whether authentication keys were present when the gate was built
    pub fn auth_configured(&self) -> bool {
        self.auth_configured
    }

    /// Decide what happens to a request for `path`. Always forwards.
    pub fn decide(&self, _path: &str) -> GateDecision {
        GateDecision::Forward
    }
}

impl Default for RequestGate {
    fn default() -> Self {
        Self::new(&AuthConfig::default())
    }
}

/// Middleware that consults the gate for matched paths and forwards every request
pub async fn request_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path();

    if state.gate.matcher().matches(path) {
        match state.gate.decide(path) {
            GateDecision::Forward => tracing::trace!(
                path,
                auth_configured = state.gate.auth_configured(),
                "request gate: forward"
            ),
        }
    }

    next.run(request).await
}
