use crate::model::SectionId;

use super::{GroupId, Workspace};

impl Workspace {
    pub fn set_active(&mut self, group: GroupId, id: SectionId) -> bool {
        match group {
            GroupId::Left => self.left.set_active(id),
            GroupId::Right => self.right.set_active(id),
        }
    }

    pub fn close(&mut self, id: SectionId, group: GroupId) -> bool {
        let changed = match group {
            GroupId::Left => self.left.remove(id),
            GroupId::Right => self.right.remove(id),
        };
        if changed {
            log::debug!("close {} in {} group", id, group.label());
        }
        changed
    }

    /// Collapses `group` to just `id`. The other group is untouched.
    pub fn close_others(&mut self, id: SectionId, group: GroupId) -> bool {
        let changed = match group {
            GroupId::Left => self.left.retain_only(id),
            GroupId::Right => self.right.retain_only(id),
        };
        if changed {
            log::debug!("close others than {} in {} group", id, group.label());
        }
        changed
    }

    pub fn close_to_right(&mut self, id: SectionId, group: GroupId) -> bool {
        let changed = match group {
            GroupId::Left => self.left.truncate_after(id),
            GroupId::Right => self.right.truncate_after(id),
        };
        if changed {
            log::debug!("close right of {} in {} group", id, group.label());
        }
        changed
    }

    pub fn close_all(&mut self) {
        self.left.reset();
        self.right.clear();
        log::debug!("close all");
    }

    /// Array-move within the left group. `target` indexes the list as it was
    /// before the move and may equal its length (drop after the last tab).
    pub fn reorder(&mut self, source: usize, target: usize) -> bool {
        let changed = self.left.reorder(source, target);
        if changed {
            log::debug!("reorder left tab {} -> {}", source, target);
        }
        changed
    }

    /// Moves `id` from the other group into `destination` and activates it
    /// there. The source group repairs its active tab the way `close` does.
    pub fn move_to_group(&mut self, id: SectionId, destination: GroupId) -> bool {
        let source = destination.other();
        if !self.contains(source, id) {
            return false;
        }
        let section = id.section();
        match destination {
            GroupId::Left => self.left.open(section),
            GroupId::Right => self.right.open(section),
        }
        match source {
            GroupId::Left => self.left.remove(id),
            GroupId::Right => self.right.remove(id),
        };
        log::debug!(
            "move {} from {} to {} group",
            id,
            source.label(),
            destination.label()
        );
        true
    }
}
