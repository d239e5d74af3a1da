use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::loader::DataSource;
use crate::theme::{Theme, ThemeStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Where each page view loads the résumé document from.
    pub source: Arc<dyn DataSource>,
    pub theme_store: ThemeStore,
    /// Read from `theme_store` once at startup, then kept in step with every toggle.
    pub theme: Arc<RwLock<Theme>>,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn DataSource>, theme_store: ThemeStore) -> Self {
        let theme = theme_store.load();
        Self {
            config,
            source,
            theme_store,
            theme: Arc::new(RwLock::new(theme)),
        }
    }
}
