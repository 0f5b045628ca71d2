use super::*;

use crate::workspace::DragState;

impl App {
    /// Re-derives state that hangs off the workspace after any mutation.
    pub(super) fn after_mutation(&mut self) {
        if let Interaction::TabDrag(drag) = self.interaction {
            if !self.drag_still_valid(&drag) {
                self.interaction.cancel();
            }
        }
        if self.focus == Focus::Group(GroupId::Right) && !self.workspace.is_split() {
            self.focus = Focus::Group(GroupId::Left);
        }
        for group in [GroupId::Left, GroupId::Right] {
            let slot = group_slot(group);
            let active = self.workspace.active(group);
            if self.scrolled_for[slot] != active {
                self.scroll[slot] = 0;
                self.scrolled_for[slot] = active;
            }
        }
    }

    /// The grabbed tab must still sit at the index the drag recorded.
    pub(super) fn drag_still_valid(&self, drag: &DragState) -> bool {
        self.workspace
            .tabs(GroupId::Left)
            .get(drag.source_index)
            .is_some_and(|t| t.id == drag.id)
    }

    pub(super) fn open_section(&mut self, id: SectionId, group: GroupId) {
        self.workspace.open(id.section(), group);
        self.focus = Focus::Group(group);
        self.after_mutation();
    }

    pub(super) fn activate_tab(&mut self, group: GroupId, id: SectionId) {
        if self.workspace.set_active(group, id) {
            self.focus = Focus::Group(group);
            self.after_mutation();
        }
    }

    pub(super) fn close_active(&mut self) {
        let group = self.focused_group();
        if let Some(id) = self.workspace.active(group) {
            self.workspace.close(id, group);
            self.after_mutation();
        }
    }

    /// Moves the focused group's active tab by `delta` positions, wrapping.
    pub(super) fn cycle_tab(&mut self, delta: isize) {
        let group = self.focused_group();
        let tabs = self.workspace.tabs(group);
        let Some(active) = self.workspace.active(group) else {
            return;
        };
        let Some(pos) = tabs.iter().position(|t| t.id == active) else {
            return;
        };
        let n = tabs.len() as isize;
        let next = tabs[(pos as isize + delta).rem_euclid(n) as usize].id;
        self.activate_tab(group, next);
    }

    /// Keyboard twin of the context menu's split action.
    pub(super) fn split_active(&mut self) {
        let group = self.focused_group();
        let Some(id) = self.workspace.active(group) else {
            return;
        };
        if self.workspace.tabs(group).len() < 2 {
            self.status = Some("split needs at least two tabs in the group".to_string());
            return;
        }
        let destination = group.other();
        self.workspace.move_to_group(id, destination);
        self.focus = Focus::Group(destination);
        self.after_mutation();
    }

    pub(super) fn open_menu_for(&mut self, id: SectionId, group: GroupId, position: (u16, u16)) {
        // Replaces any menu already open.
        self.menu = Some(ContextMenu::open_for(id, group, position, &self.workspace));
    }

    /// Opens the menu under the focused group's active tab.
    pub(super) fn open_menu_for_active(&mut self) {
        let group = self.focused_group();
        let Some(id) = self.workspace.active(group) else {
            return;
        };
        let position = self
            .layout
            .tab_rect(group, id)
            .map(|r| (r.x, r.y + 1))
            .unwrap_or((0, 0));
        self.open_menu_for(id, group, position);
    }

    pub(super) fn close_menu(&mut self) {
        self.menu = None;
    }

    pub(super) fn run_menu_action(&mut self, action: MenuAction) {
        let Some(menu) = self.menu.take() else {
            return;
        };
        log::debug!("menu action {:?} on {}", action, menu.target);
        action.apply(menu.target, menu.group, &mut self.workspace);
        self.after_mutation();
    }

    pub(super) fn commit_search(&mut self) {
        match self.search.commit_first(&mut self.workspace) {
            Some(_) => {
                self.focus = Focus::Group(GroupId::Left);
                self.after_mutation();
            }
            None => {
                self.status = Some(format!("no section matches `{}`", self.search.query()));
            }
        }
    }

    pub(super) fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Explorer => Focus::Group(GroupId::Left),
            Focus::Group(GroupId::Left) if self.workspace.is_split() => {
                Focus::Group(GroupId::Right)
            }
            Focus::Group(_) => Focus::Explorer,
        };
    }

    pub(super) fn scroll_by(&mut self, group: GroupId, delta: i32) {
        let Some(id) = self.workspace.active(group) else {
            return;
        };
        let lines = crate::render::render(id, &self.content).len();
        let max = lines.saturating_sub(1).min(u16::MAX as usize) as i32;
        let cur = self.scroll_of(group) as i32;
        *self.scroll_mut(group) = (cur + delta).clamp(0, max) as u16;
    }

    pub(super) fn move_explorer(&mut self, delta: isize) {
        let n = CATALOG.len() as isize;
        self.explorer_selected = (self.explorer_selected as isize + delta).rem_euclid(n) as usize;
    }
}
