use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the fixed résumé sections. Identity for tabs and lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Education,
    Training,
    Contact,
}

impl SectionId {
    pub fn slug(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Education => "education",
            SectionId::Training => "training",
            SectionId::Contact => "contact",
        }
    }

    pub fn section(self) -> &'static Section {
        Section::lookup(self)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for SectionId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        CATALOG
            .iter()
            .map(|section| section.id)
            .find(|id| id.slug() == needle)
            .ok_or_else(|| {
                let known: Vec<&str> = CATALOG.iter().map(|s| s.id.slug()).collect();
                anyhow::anyhow!("unknown section `{}` (expected one of: {})", s, known.join(", "))
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    /// Drives icon selection and search only; never used for lookup.
    pub display_path: &'static str,
}

impl Section {
    pub fn lookup(id: SectionId) -> &'static Section {
        // CATALOG holds every variant exactly once, in declaration order.
        &CATALOG[id as usize]
    }
}

pub const CATALOG: [Section; 8] = [
    Section {
        id: SectionId::Home,
        title: "Home",
        display_path: "src/home.tsx",
    },
    Section {
        id: SectionId::About,
        title: "About",
        display_path: "src/about.md",
    },
    Section {
        id: SectionId::Experience,
        title: "Experience",
        display_path: "src/experience.json",
    },
    Section {
        id: SectionId::Projects,
        title: "Projects",
        display_path: "src/projects.rs",
    },
    Section {
        id: SectionId::Skills,
        title: "Skills",
        display_path: "src/skills.yml",
    },
    Section {
        id: SectionId::Education,
        title: "Education",
        display_path: "src/education.toml",
    },
    Section {
        id: SectionId::Training,
        title: "Training",
        display_path: "src/training.py",
    },
    Section {
        id: SectionId::Contact,
        title: "Contact",
        display_path: "src/contact.css",
    },
];

#[cfg(test)]
#[path = "../tests/model/section_tests.rs"]
mod tests;
