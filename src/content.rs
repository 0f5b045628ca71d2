//! Résumé content retrieval: primary source, then fallback, then nothing.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::model::ContentRecord;

mod http_client;
mod loader;

pub use self::loader::{ContentLoader, spawn_load};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentSource {
    Remote(String),
    Local(PathBuf),
}

impl ContentSource {
    /// `http://` and `https://` locations are fetched; anything else is a file.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ContentSource::Remote(raw.to_string())
        } else {
            ContentSource::Local(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::Remote(url) => f.write_str(url),
            ContentSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentOrigin {
    Primary,
    Fallback,
}

impl ContentOrigin {
    pub fn label(self) -> &'static str {
        match self {
            ContentOrigin::Primary => "primary",
            ContentOrigin::Fallback => "fallback",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContentState {
    Loading,
    Ready {
        record: Box<ContentRecord>,
        origin: ContentOrigin,
    },
    /// Both sources failed (or none were configured); render the static table.
    Unavailable,
}

impl ContentState {
    pub fn record(&self) -> Option<&ContentRecord> {
        match self {
            ContentState::Ready { record, .. } => Some(record),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ContentState::Loading)
    }

    pub fn label(&self) -> String {
        match self {
            ContentState::Loading => "loading".to_string(),
            ContentState::Ready { origin, .. } => format!("live ({})", origin.label()),
            ContentState::Unavailable => "static".to_string(),
        }
    }
}

pub struct ContentProvider {
    primary: Option<ContentSource>,
    fallback: Option<ContentSource>,
    client: reqwest::blocking::Client,
}

impl ContentProvider {
    pub fn new(primary: Option<ContentSource>, fallback: Option<ContentSource>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("vitae")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            primary,
            fallback,
            client,
        })
    }

    /// One attempt per source, primary first. Failures are logged and turn
    /// into `Unavailable`; they are never returned.
    pub fn load(&self) -> ContentState {
        let attempts = [
            (self.primary.as_ref(), ContentOrigin::Primary),
            (self.fallback.as_ref(), ContentOrigin::Fallback),
        ];
        for (source, origin) in attempts {
            let Some(source) = source else {
                continue;
            };
            match self.fetch(source) {
                Ok(record) => {
                    log::info!("résumé loaded from {} source {}", origin.label(), source);
                    return ContentState::Ready {
                        record: Box::new(record),
                        origin,
                    };
                }
                Err(err) => {
                    log::warn!("{} source {} failed: {:#}", origin.label(), source, err);
                }
            }
        }
        log::info!("no résumé source available; using static content");
        ContentState::Unavailable
    }

    pub fn fetch(&self, source: &ContentSource) -> Result<ContentRecord> {
        match source {
            ContentSource::Remote(url) => self.get_json(url),
            ContentSource::Local(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("read {}", path.display()))?;
                serde_json::from_str(&raw).context("parse résumé json")
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/content/content_tests.rs"]
mod tests;
