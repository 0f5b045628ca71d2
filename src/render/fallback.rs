use crate::model::SectionId;

/// Shown for `home` until the first load settles.
pub const LOADING_PLACEHOLDER: [&str; 3] = [
    "Loading résumé...",
    "Fetching the latest content from the configured sources.",
    "Built-in content appears if neither source answers.",
];

const HOME: &[&str] = &[
    "Lalit Sharma",
    "Software Engineer",
    "",
    "Building dependable software and interfaces that stay out of the way.",
    "",
    "Open a file from the explorer, or press Ctrl+K to search.",
];

const ABOUT: &[&str] = &[
    "# About",
    "",
    "Software engineer who enjoys turning fuzzy requirements into small,",
    "well-tested systems. Comfortable across the stack, happiest close to",
    "the data model.",
    "",
    "Interests: developer tooling, distributed systems, typography",
];

const EXPERIENCE: &[&str] = &[
    "# Experience",
    "",
    "## Software Engineer",
    "Product engineering across web and backend services.",
    "- Shipped features end to end, from schema to UI",
    "- Owned CI pipelines and release automation",
];

const PROJECTS: &[&str] = &[
    "# Projects",
    "",
    "## Editor-styled résumé",
    "This viewer: tabs, split panes, and a command palette over résumé data.",
    "keywords: rust, ratatui, serde",
];

const SKILLS: &[&str] = &[
    "# Skills",
    "",
    "Languages: Rust, TypeScript, Python, SQL",
    "Frameworks: React, Node.js, Axum",
    "Tooling: Git, Docker, Linux, CI/CD",
];

const EDUCATION: &[&str] = &[
    "# Education",
    "",
    "## Bachelor of Technology in Computer Science",
];

const TRAINING: &[&str] = &[
    "# Training",
    "",
    "Certificates are listed here once the live résumé loads.",
];

const CONTACT: &[&str] = &[
    "# Contact",
    "",
    "Reach out through the profiles listed in the live résumé.",
];

/// Built-in text used while the record is loading or unavailable.
pub fn fallback_lines(section: SectionId) -> Vec<String> {
    let table = match section {
        SectionId::Home => HOME,
        SectionId::About => ABOUT,
        SectionId::Experience => EXPERIENCE,
        SectionId::Projects => PROJECTS,
        SectionId::Skills => SKILLS,
        SectionId::Education => EDUCATION,
        SectionId::Training => TRAINING,
        SectionId::Contact => CONTACT,
    };
    table.iter().map(|s| s.to_string()).collect()
}
