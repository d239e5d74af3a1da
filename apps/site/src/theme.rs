//! Light/dark theme preference, persisted as a single key in a small JSON file.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Anything other than `light` reads as the dark default.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ThemeStoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

/// File-backed key-value store holding the theme preference.
///
/// Other keys already present in the file are preserved on write.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the stored preference. A missing or unreadable file yields the default.
    pub fn load(&self) -> Theme {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No preference file at {}, using default theme", self.path.display());
                return Theme::default();
            }
            Err(e) => {
                warn!("Could not read {}: {e}", self.path.display());
                return Theme::default();
            }
        };

        let prefs: Map<String, Value> = serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Ignoring malformed preference file {}: {e}", self.path.display());
            Map::new()
        });
        Theme::from_stored(prefs.get(THEME_KEY).and_then(|v| v.as_str()))
    }

    /// Writes the preference through a temp file in the same directory, then renames it over.
    pub fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        let mut prefs: Map<String, Value> = std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        prefs.insert(THEME_KEY.to_string(), Value::String(theme.as_str().to_string()));
        let body = serde_json::to_vec_pretty(&prefs)?;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let io_err = |source| ThemeStoreError::Io {
            path: self.path.clone(),
            source,
        };

        let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(io_err)?;
        tmp.write_all(&body).map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| io_err(e.error))?;

        debug!("Stored theme '{theme}' in {}", self.path.display());
        Ok(())
    }
}
