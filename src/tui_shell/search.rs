use crate::catalog;
use crate::model::{Section, SectionId};
use crate::workspace::{GroupId, Workspace};

use super::Input;

/// Command-palette state: the query text and whether it has focus.
#[derive(Debug, Default)]
pub(super) struct SearchBox {
    pub(super) input: Input,
    pub(super) focused: bool,
}

impl SearchBox {
    pub(super) fn query(&self) -> &str {
        &self.input.buf
    }

    pub(super) fn is_active(&self) -> bool {
        !self.input.buf.trim().is_empty()
    }

    pub(super) fn results(&self) -> Vec<&'static Section> {
        catalog::filter(self.query())
    }

    /// Opens the first match in the left group and clears the query.
    /// Does nothing when there is no match.
    pub(super) fn commit_first(&mut self, workspace: &mut Workspace) -> Option<SectionId> {
        let section = catalog::first_match(self.query())?;
        workspace.open(section, GroupId::Left);
        self.input.clear();
        self.focused = false;
        Some(section.id)
    }

    pub(super) fn cancel(&mut self) {
        self.input.clear();
        self.focused = false;
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/search_tests.rs"]
mod tests;
