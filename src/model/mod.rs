mod content;
mod section;

pub use self::content::{
    Basics, Certificate, ContentRecord, Education, Interest, Location, Meta, Profile, Project,
    Skill, Work,
};
pub use self::section::{CATALOG, Section, SectionId};
