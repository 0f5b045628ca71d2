//! Tab/pane workspace: two tab groups, their active tabs, and the split
//! between them.
//!
//! All operations are synchronous and total. Requests that name a tab or
//! index that is not there are no-ops; the `bool` results only report whether
//! anything changed.

use crate::model::{Section, SectionId};

mod group;
mod session;
mod split;
mod tab_ops;

pub use self::group::{MainGroup, OpenTab, OptionalGroup};
pub use self::session::{DragState, Interaction, ResizeSession};
pub use self::split::{SplitRatio, ratio_from_pointer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupId {
    Left,
    Right,
}

impl GroupId {
    pub fn other(self) -> GroupId {
        match self {
            GroupId::Left => GroupId::Right,
            GroupId::Right => GroupId::Left,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GroupId::Left => "left",
            GroupId::Right => "right",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Workspace {
    left: MainGroup,
    right: OptionalGroup,
    split: SplitRatio,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            left: MainGroup::new(),
            right: OptionalGroup::new(),
            split: SplitRatio::default(),
        }
    }

    pub fn left(&self) -> &MainGroup {
        &self.left
    }

    pub fn right(&self) -> &OptionalGroup {
        &self.right
    }

    pub fn tabs(&self, group: GroupId) -> &[OpenTab] {
        match group {
            GroupId::Left => self.left.tabs(),
            GroupId::Right => self.right.tabs(),
        }
    }

    pub fn active(&self, group: GroupId) -> Option<SectionId> {
        match group {
            GroupId::Left => Some(self.left.active()),
            GroupId::Right => self.right.active(),
        }
    }

    pub fn contains(&self, group: GroupId, id: SectionId) -> bool {
        self.tabs(group).iter().any(|t| t.id == id)
    }

    /// True while the right group has tabs; only then is the split observed.
    pub fn is_split(&self) -> bool {
        !self.right.is_empty()
    }

    pub fn split_ratio(&self) -> f32 {
        self.split.get()
    }

    pub fn set_split_ratio(&mut self, ratio: f32) {
        self.split = SplitRatio::new(ratio);
        log::debug!("split ratio -> {:.3}", self.split.get());
    }

    pub fn open(&mut self, section: &Section, group: GroupId) {
        match group {
            GroupId::Left => self.left.open(section),
            GroupId::Right => self.right.open(section),
        }
        log::debug!("open {} in {} group", section.id, group.label());
    }
}

#[cfg(test)]
#[path = "tests/workspace/workspace_tests.rs"]
mod tests;
