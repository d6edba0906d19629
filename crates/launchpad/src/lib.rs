// Launchpad - starter web application
// Landing pages, dashboard shell, input validation and a request gate on axum + Maud

pub mod constants;
pub mod config;
pub mod validation;
pub mod nav;
pub mod auth;
pub mod gate;
pub mod metadata;
pub mod components;
pub mod pages;
pub mod error;
pub mod api;
pub mod state;
pub mod app;
pub mod seed;

// Re-export core types
pub use app::build_router;
pub use auth::AuthConfig;
pub use config::Config;
pub use constants::{ApiRoute, Route, RouteEntry};
pub use error::ApiError;
pub use gate::{GateDecision, PathMatcher, RequestGate};
pub use nav::{LinkState, NavItem, NavLink};
pub use state::AppState;
pub use validation::{FieldViolation, PostInput, UserInput, ValidationErrors, ViolationKind};

// Re-export Maud for page markup
pub use maud::{html as maud, Markup, PreEscaped, DOCTYPE};
