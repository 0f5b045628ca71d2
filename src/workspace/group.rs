use crate::model::{Section, SectionId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenTab {
    pub id: SectionId,
    pub title: String,
}

impl OpenTab {
    fn from_section(section: &Section) -> Self {
        Self {
            id: section.id,
            title: section.title.to_string(),
        }
    }
}

/// The left group. Never empty: closing its last tab brings back `home`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MainGroup {
    tabs: Vec<OpenTab>,
    active: SectionId,
}

impl MainGroup {
    pub(super) fn new() -> Self {
        Self {
            tabs: vec![OpenTab::from_section(SectionId::Home.section())],
            active: SectionId::Home,
        }
    }

    pub fn tabs(&self) -> &[OpenTab] {
        &self.tabs
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub(super) fn open(&mut self, section: &Section) {
        push_unique(&mut self.tabs, section);
        self.active = section.id;
    }

    pub(super) fn set_active(&mut self, id: SectionId) -> bool {
        if position(&self.tabs, id).is_none() {
            return false;
        }
        self.active = id;
        true
    }

    pub(super) fn remove(&mut self, id: SectionId) -> bool {
        let Some(index) = position(&self.tabs, id) else {
            return false;
        };
        self.tabs.remove(index);
        if self.tabs.is_empty() {
            self.reset();
            return true;
        }
        if self.active == id {
            // Non-empty after removal, so a neighbour always exists.
            if let Some(next) = neighbour_after_removal(&self.tabs, index) {
                self.active = next;
            }
        }
        true
    }

    pub(super) fn retain_only(&mut self, id: SectionId) -> bool {
        let Some(index) = position(&self.tabs, id) else {
            return false;
        };
        let keep = self.tabs.swap_remove(index);
        self.tabs = vec![keep];
        self.active = id;
        true
    }

    pub(super) fn truncate_after(&mut self, id: SectionId) -> bool {
        let Some(index) = position(&self.tabs, id) else {
            return false;
        };
        self.tabs.truncate(index + 1);
        self.active = id;
        true
    }

    pub(super) fn reset(&mut self) {
        *self = Self::new();
    }

    pub(super) fn reorder(&mut self, source: usize, target: usize) -> bool {
        if source == target || source >= self.tabs.len() || target > self.tabs.len() {
            return false;
        }
        let tab = self.tabs.remove(source);
        let insert_at = if source < target { target - 1 } else { target };
        self.tabs.insert(insert_at, tab);
        true
    }
}

/// The right group. May be empty, in which case nothing is active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionalGroup {
    tabs: Vec<OpenTab>,
    active: Option<SectionId>,
}

impl OptionalGroup {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub fn tabs(&self) -> &[OpenTab] {
        &self.tabs
    }

    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub(super) fn open(&mut self, section: &Section) {
        push_unique(&mut self.tabs, section);
        self.active = Some(section.id);
    }

    pub(super) fn set_active(&mut self, id: SectionId) -> bool {
        if position(&self.tabs, id).is_none() {
            return false;
        }
        self.active = Some(id);
        true
    }

    pub(super) fn remove(&mut self, id: SectionId) -> bool {
        let Some(index) = position(&self.tabs, id) else {
            return false;
        };
        self.tabs.remove(index);
        if self.active == Some(id) {
            self.active = neighbour_after_removal(&self.tabs, index);
        }
        true
    }

    pub(super) fn retain_only(&mut self, id: SectionId) -> bool {
        let Some(index) = position(&self.tabs, id) else {
            return false;
        };
        let keep = self.tabs.swap_remove(index);
        self.tabs = vec![keep];
        self.active = Some(id);
        true
    }

    pub(super) fn truncate_after(&mut self, id: SectionId) -> bool {
        let Some(index) = position(&self.tabs, id) else {
            return false;
        };
        self.tabs.truncate(index + 1);
        self.active = Some(id);
        true
    }

    pub(super) fn clear(&mut self) {
        self.tabs.clear();
        self.active = None;
    }
}

fn position(tabs: &[OpenTab], id: SectionId) -> Option<usize> {
    tabs.iter().position(|t| t.id == id)
}

fn push_unique(tabs: &mut Vec<OpenTab>, section: &Section) {
    if position(tabs, section.id).is_none() {
        tabs.push(OpenTab::from_section(section));
    }
}

/// Active tab after the one at `removed` is gone: left neighbour, else the tab
/// that slid into its slot, else nothing.
fn neighbour_after_removal(remaining: &[OpenTab], removed: usize) -> Option<SectionId> {
    if removed > 0 {
        if let Some(tab) = remaining.get(removed - 1) {
            return Some(tab.id);
        }
    }
    remaining.get(removed).map(|t| t.id)
}
