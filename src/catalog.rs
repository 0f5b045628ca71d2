//! Search over the section catalog.

use crate::model::{CATALOG, Section};

/// Sections whose title or display path contains `query`, ignoring case,
/// in catalog order. A blank query matches everything.
pub fn filter(query: &str) -> Vec<&'static Section> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return CATALOG.iter().collect();
    }
    CATALOG
        .iter()
        .filter(|s| {
            s.title.to_lowercase().contains(&needle)
                || s.display_path.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn first_match(query: &str) -> Option<&'static Section> {
    filter(query).into_iter().next()
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
