//! Loads the résumé document and renders it into a page.
//!
//! `Idle -> Loading -> Rendered | Failed`. Both outcomes are terminal: there
//! is no retry, and a new page view starts a new loader.

pub mod source;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use crate::models::resume::ResumeDocument;
use crate::page::Page;
use crate::render::{render_header, render_sections, render_toc, RenderError};

pub use source::{DataSource, FileSource, HttpSource};

/// Shown in the name region when loading fails for any reason.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading resume";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("data request failed with status {status}")]
    Status { status: u16 },

    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("résumé document must be a JSON object")]
    NotAnObject,

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Rendered,
    Failed,
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadState::Rendered | LoadState::Failed)
    }
}

pub struct Loader {
    source: Arc<dyn DataSource>,
    state: LoadState,
}

impl Loader {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            state: LoadState::Idle,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Runs the single load for this page view.
    ///
    /// On failure the name region shows [`LOAD_ERROR_MESSAGE`] and the cause is
    /// logged. Regions already rendered before a failure stay as they are.
    /// Calling this again after a terminal state does nothing.
    pub async fn load(&mut self, page: &mut Page) -> LoadState {
        if self.state.is_terminal() {
            return self.state;
        }

        self.state = LoadState::Loading;
        self.state = match self.fetch_and_render(page).await {
            Ok(()) => {
                info!("Rendered résumé from {}", self.source.describe());
                LoadState::Rendered
            }
            Err(e) => {
                page.name.set_text(LOAD_ERROR_MESSAGE);
                error!("Failed to load résumé from {}: {e}", self.source.describe());
                LoadState::Failed
            }
        };
        self.state
    }

    async fn fetch_and_render(&self, page: &mut Page) -> Result<(), LoadError> {
        let body = self.source.fetch().await?;
        let value: serde_json::Value = serde_json::from_slice(&body)?;
        let doc = ResumeDocument::from_value(value).ok_or(LoadError::NotAnObject)?;

        render_header(page, &doc);
        render_toc(page, &doc)?;
        render_sections(page, &doc)?;
        Ok(())
    }
}
