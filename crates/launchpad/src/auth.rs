//! Authentication provider settings.
//!
//! Only the keys are read here. Nothing in the application enforces
//! authentication yet; see [`crate::gate`].

use std::fmt;

pub const PUBLISHABLE_KEY_VAR: &str = "NEXT_PUBLIC_CLERK_PUBLISHABLE_KEY";
pub const SECRET_KEY_VAR: &str = "CLERK_SECRET_KEY";

#[derive(Clone, Default)]
pub struct AuthConfig {
    pub publishable_key: Option<String>,
    secret_key: Option<String>,
}

impl AuthConfig {
    pub fn new(publishable_key: Option<String>, secret_key: Option<String>) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            publishable_key: non_empty(publishable_key),
            secret_key: non_empty(secret_key),
        }
    }

    /// Read both keys from the process environment
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(PUBLISHABLE_KEY_VAR).ok(),
            std::env::var(SECRET_KEY_VAR).ok(),
        )
    }

    /// Both keys present and non-empty
    pub fn is_configured(&self) -> bool {
        self.publishable_key.is_some() && self.secret_key.is_some()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("publishable_key", &self.publishable_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
