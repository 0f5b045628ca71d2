use anyhow::{Context, Result};
use reqwest::header::{CACHE_CONTROL, PRAGMA};

use super::ContentProvider;
use crate::model::ContentRecord;

impl ContentProvider {
    pub(super) fn get_json(&self, url: &str) -> Result<ContentRecord> {
        let resp = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .with_context(|| format!("GET {}", url))?;
        let resp = resp
            .error_for_status()
            .with_context(|| format!("GET {} status", url))?;
        resp.json::<ContentRecord>().context("parse résumé json")
    }
}
