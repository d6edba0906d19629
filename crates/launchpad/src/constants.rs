// File: src/constants.rs
// Purpose: Route registry and application-wide limits

pub const APP_NAME: &str = "New Project";
pub const APP_DESCRIPTION: &str = "A modern web application template";

/// Maximum accepted upload size in bytes (5 MiB)
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// MIME types accepted for image uploads
pub const ACCEPTED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/webp"];

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// A symbolic name paired with the path it resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub name: &'static str,
    pub path: &'static str,
}

/// Page routes. Pages and navigation refer to these instead of path literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    SignIn,
    SignUp,
    Dashboard,
    Settings,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::SignIn,
        Route::SignUp,
        Route::Dashboard,
        Route::Settings,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::SignIn => "/sign-in",
            Route::SignUp => "/sign-up",
            Route::Dashboard => "/dashboard",
            Route::Settings => "/settings",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Route::Home => "HOME",
            Route::SignIn => "SIGN_IN",
            Route::SignUp => "SIGN_UP",
            Route::Dashboard => "DASHBOARD",
            Route::Settings => "SETTINGS",
        }
    }

    pub const fn entry(self) -> RouteEntry {
        RouteEntry {
            name: self.name(),
            path: self.path(),
        }
    }

    pub fn entries() -> impl Iterator<Item = RouteEntry> {
        Self::ALL.into_iter().map(Route::entry)
    }
}

/// API path prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiRoute {
    Webhooks,
    Trpc,
    Users,
    Posts,
}

impl ApiRoute {
    pub const ALL: [ApiRoute; 4] = [
        ApiRoute::Webhooks,
        ApiRoute::Trpc,
        ApiRoute::Users,
        ApiRoute::Posts,
    ];

    pub const fn prefix(self) -> &'static str {
        match self {
            ApiRoute::Webhooks => "/api/webhooks",
            ApiRoute::Trpc => "/api/trpc",
            ApiRoute::Users => "/api/users",
            ApiRoute::Posts => "/api/posts",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ApiRoute::Webhooks => "WEBHOOKS",
            ApiRoute::Trpc => "TRPC",
            ApiRoute::Users => "USERS",
            ApiRoute::Posts => "POSTS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::SignIn.path(), "/sign-in");
        assert_eq!(Route::SignUp.path(), "/sign-up");
        assert_eq!(Route::Dashboard.path(), "/dashboard");
        assert_eq!(Route::Settings.path(), "/settings");
    }

    #[test]
    fn test_route_paths_are_distinct() {
        let paths: HashSet<&str> = Route::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), Route::ALL.len());

        let names: HashSet<&str> = Route::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(names.len(), Route::ALL.len());
    }

    #[test]
    fn test_api_prefixes() {
        assert_eq!(ApiRoute::Webhooks.prefix(), "/api/webhooks");
        assert_eq!(ApiRoute::Trpc.prefix(), "/api/trpc");

        let prefixes: HashSet<&str> = ApiRoute::ALL.iter().map(|r| r.prefix()).collect();
        assert_eq!(prefixes.len(), ApiRoute::ALL.len());
        assert!(ApiRoute::ALL.iter().all(|r| r.prefix().starts_with("/api/")));
    }

    #[test]
    fn test_entries_follow_declaration_order() {
        let entries: Vec<RouteEntry> = Route::entries().collect();
        assert_eq!(entries.len(), 5);
        assert_eq!(
            entries[3],
            RouteEntry {
                name: "DASHBOARD",
                path: "/dashboard"
            }
        );
    }

    #[test]
    fn test_limits() {
        assert_eq!(MAX_FILE_SIZE, 5_242_880);
        assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);
        assert!(ACCEPTED_IMAGE_TYPES.contains(&"image/webp"));
    }
}
