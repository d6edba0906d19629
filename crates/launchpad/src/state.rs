//! Application state shared across handlers.

use std::sync::Arc;

use crate::auth::AuthConfig;
use crate::config::Config;
use crate::gate::RequestGate;
use crate::metadata::SiteMetadata;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gate: Arc<RequestGate>,
    pub metadata: Arc<SiteMetadata>,
}

impl AppState {
    pub fn new(config: Config, auth: AuthConfig) -> Self {
        Self {
            config: Arc::new(config),
            gate: Arc::new(RequestGate::new(&auth)),
            metadata: Arc::new(SiteMetadata::default()),
        }
    }
}
