use ratatui::layout::Rect;

use crate::model::SectionId;
use crate::workspace::{GroupId, Workspace};

const MENU_WIDTH: u16 = 24;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum MenuAction {
    Close,
    CloseOthers,
    CloseToRight,
    CloseAll,
    SplitRight,
    SplitLeft,
}

impl MenuAction {
    pub(super) fn label(self) -> &'static str {
        match self {
            MenuAction::Close => "Close",
            MenuAction::CloseOthers => "Close Others",
            MenuAction::CloseToRight => "Close to the Right",
            MenuAction::CloseAll => "Close All",
            MenuAction::SplitRight => "Split Right",
            MenuAction::SplitLeft => "Split Left",
        }
    }

    pub(super) fn apply(self, target: SectionId, group: GroupId, workspace: &mut Workspace) {
        match self {
            MenuAction::Close => {
                workspace.close(target, group);
            }
            MenuAction::CloseOthers => {
                workspace.close_others(target, group);
            }
            MenuAction::CloseToRight => {
                workspace.close_to_right(target, group);
            }
            MenuAction::CloseAll => workspace.close_all(),
            MenuAction::SplitRight => {
                workspace.move_to_group(target, GroupId::Right);
            }
            MenuAction::SplitLeft => {
                workspace.move_to_group(target, GroupId::Left);
            }
        }
    }
}

/// Menu for one right-clicked tab. The app holds at most one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct ContextMenu {
    pub(super) position: (u16, u16),
    pub(super) target: SectionId,
    pub(super) group: GroupId,
    pub(super) actions: Vec<MenuAction>,
    pub(super) selected: usize,
}

impl ContextMenu {
    /// Split actions are offered only when the tab's group has another tab
    /// to keep.
    pub(super) fn open_for(
        target: SectionId,
        group: GroupId,
        position: (u16, u16),
        workspace: &Workspace,
    ) -> Self {
        let mut actions = vec![
            MenuAction::Close,
            MenuAction::CloseOthers,
            MenuAction::CloseToRight,
            MenuAction::CloseAll,
        ];
        if workspace.tabs(group).len() >= 2 {
            actions.push(match group {
                GroupId::Left => MenuAction::SplitRight,
                GroupId::Right => MenuAction::SplitLeft,
            });
        }
        Self {
            position,
            target,
            group,
            actions,
            selected: 0,
        }
    }

    pub(super) fn move_up(&mut self) {
        let n = self.actions.len();
        if n > 0 {
            self.selected = (self.selected + n - 1) % n;
        }
    }

    pub(super) fn move_down(&mut self) {
        let n = self.actions.len();
        if n > 0 {
            self.selected = (self.selected + 1) % n;
        }
    }

    pub(super) fn selected_action(&self) -> Option<MenuAction> {
        self.actions.get(self.selected).copied()
    }

    /// Anchored at the click, shifted back inside `screen` when it would
    /// overflow.
    pub(super) fn rect(&self, screen: Rect) -> Rect {
        let width = MENU_WIDTH.min(screen.width);
        let height = (self.actions.len() as u16 + 2).min(screen.height);
        let max_x = screen.x + screen.width.saturating_sub(width);
        let max_y = screen.y + screen.height.saturating_sub(height);
        Rect::new(
            self.position.0.clamp(screen.x, max_x),
            self.position.1.clamp(screen.y, max_y),
            width,
            height,
        )
    }

    pub(super) fn contains(&self, column: u16, row: u16, screen: Rect) -> bool {
        let r = self.rect(screen);
        column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
    }

    pub(super) fn action_at(&self, column: u16, row: u16, screen: Rect) -> Option<MenuAction> {
        if !self.contains(column, row, screen) {
            return None;
        }
        let r = self.rect(screen);
        // One border row above the first item.
        let idx = row.checked_sub(r.y + 1)? as usize;
        self.actions.get(idx).copied()
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/context_menu_tests.rs"]
mod tests;
