//! Section text: a pure mapping from a section and the content state to the
//! lines shown in its pane.

use crate::content::ContentState;
use crate::model::{ContentRecord, SectionId};

mod dates;
mod fallback;
mod sections;

pub use self::dates::{date_range, format_date};
pub use self::fallback::{LOADING_PLACEHOLDER, fallback_lines};

pub fn render(section: SectionId, content: &ContentState) -> Vec<String> {
    match content {
        ContentState::Loading if section == SectionId::Home => {
            LOADING_PLACEHOLDER.iter().map(|s| s.to_string()).collect()
        }
        ContentState::Ready { record, .. } => render_record(section, record),
        ContentState::Loading | ContentState::Unavailable => fallback_lines(section),
    }
}

pub fn render_record(section: SectionId, record: &ContentRecord) -> Vec<String> {
    match section {
        SectionId::Home => sections::home(record),
        SectionId::About => sections::about(record),
        SectionId::Experience => sections::experience(record),
        SectionId::Projects => sections::projects(record),
        SectionId::Skills => sections::skills(record),
        SectionId::Education => sections::education(record),
        SectionId::Training => sections::training(record),
        SectionId::Contact => sections::contact(record),
    }
}

#[cfg(test)]
#[path = "tests/render/render_tests.rs"]
mod tests;
