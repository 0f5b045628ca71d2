//! Startup settings: built-in defaults, an optional JSON config file, and
//! command-line overrides, in increasing precedence.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::content::ContentSource;
use crate::model::SectionId;

pub const DEFAULT_PRIMARY: &str = "https://lalitsharma.dev/resume.json";
pub const DEFAULT_FALLBACK: &str = "resume.json";
pub const DEFAULT_MIN_PANE_COLS: u16 = 12;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub primary: Option<String>,

    #[serde(default)]
    pub fallback: Option<String>,

    /// Skip both sources and show built-in content.
    #[serde(default)]
    pub offline: bool,

    /// Sections opened in the left group after `home`.
    #[serde(default)]
    pub open: Vec<SectionId>,

    /// Narrowest a pane may be dragged, in terminal columns.
    #[serde(default)]
    pub min_pane_cols: Option<u16>,
}

impl ConfigFile {
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parse config {}", path.display()))
    }

    /// The explicit path if given (must exist), else the per-user file if present.
    pub fn discover(explicit: Option<&Path>) -> Result<Option<Self>> {
        if let Some(path) = explicit {
            return Self::read(path).map(Some);
        }
        match default_path() {
            Some(path) if path.is_file() => {
                log::debug!("using config {}", path.display());
                Self::read(&path).map(Some)
            }
            _ => Ok(None),
        }
    }
}

/// `vitae/config.json` under the platform's per-user config directory.
fn default_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("vitae").join("config.json"))
}

/// Values given on the command line. `None` means "not given".
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub primary: Option<String>,
    pub fallback: Option<String>,
    pub offline: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub primary: Option<ContentSource>,
    pub fallback: Option<ContentSource>,
    pub open: Vec<SectionId>,
    pub min_pane_cols: u16,
}

impl Config {
    pub fn resolve(file: Option<ConfigFile>, overrides: Overrides) -> Self {
        let file = file.unwrap_or_default();
        let offline = overrides.offline || file.offline;

        let (primary, fallback) = if offline {
            (None, None)
        } else {
            let primary = overrides
                .primary
                .or(file.primary)
                .unwrap_or_else(|| DEFAULT_PRIMARY.to_string());
            let fallback = overrides
                .fallback
                .or(file.fallback)
                .unwrap_or_else(|| DEFAULT_FALLBACK.to_string());
            (
                Some(ContentSource::parse(&primary)),
                Some(ContentSource::parse(&fallback)),
            )
        };

        Self {
            primary,
            fallback,
            open: file.open,
            min_pane_cols: file.min_pane_cols.unwrap_or(DEFAULT_MIN_PANE_COLS).max(1),
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
