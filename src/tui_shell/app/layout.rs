use super::*;

use crate::workspace::OpenTab;

const EXPLORER_WIDTH: u16 = 26;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct TabHit {
    pub(super) id: SectionId,
    pub(super) index: usize,
    pub(super) rect: Rect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct GroupLayout {
    pub(super) group: GroupId,
    pub(super) area: Rect,
    pub(super) tab_bar: Rect,
    pub(super) body: Rect,
    /// Tabs that fit in the bar. May be fewer than `tab_count`.
    pub(super) tabs: Vec<TabHit>,
    pub(super) tab_count: usize,
}

/// Screen geometry from the last draw. Mouse handling hit-tests against it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(super) struct ScreenLayout {
    pub(super) screen: Rect,
    pub(super) header: Rect,
    pub(super) search: Rect,
    pub(super) explorer: Rect,
    pub(super) editor: Rect,
    pub(super) status: Rect,
    pub(super) groups: Vec<GroupLayout>,
    pub(super) splitter: Option<Rect>,
}

pub(super) fn tab_label(tab: &OpenTab) -> String {
    let icon = icon_for(tab.id.section().display_path);
    format!(" {} {} ", icon.glyph, tab.title)
}

fn contains(r: Rect, column: u16, row: u16) -> bool {
    column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
}

impl ScreenLayout {
    pub(super) fn compute(screen: Rect, workspace: &Workspace) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(screen);
        let (header, search, main, status) = (rows[0], rows[1], rows[2], rows[3]);

        let explorer_width = EXPLORER_WIDTH.min(main.width / 3);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(explorer_width), Constraint::Min(0)])
            .split(main);
        let (explorer, editor) = (cols[0], cols[1]);

        let mut groups = Vec::new();
        let mut splitter = None;
        if workspace.is_split() && editor.width >= 3 {
            let left_width = ((workspace.split_ratio() * editor.width as f32).round() as u16)
                .clamp(1, editor.width - 2);
            let left = Rect::new(editor.x, editor.y, left_width, editor.height);
            let bar = Rect::new(editor.x + left_width, editor.y, 1, editor.height);
            let right = Rect::new(
                bar.x + 1,
                editor.y,
                editor.width - left_width - 1,
                editor.height,
            );
            groups.push(group_layout(GroupId::Left, left, workspace));
            groups.push(group_layout(GroupId::Right, right, workspace));
            splitter = Some(bar);
        } else {
            groups.push(group_layout(GroupId::Left, editor, workspace));
        }

        Self {
            screen,
            header,
            search,
            explorer,
            editor,
            status,
            groups,
            splitter,
        }
    }

    pub(super) fn group(&self, group: GroupId) -> Option<&GroupLayout> {
        self.groups.iter().find(|g| g.group == group)
    }

    pub(super) fn group_at(&self, column: u16, row: u16) -> Option<GroupId> {
        self.groups
            .iter()
            .find(|g| contains(g.area, column, row))
            .map(|g| g.group)
    }

    pub(super) fn tab_at(&self, column: u16, row: u16) -> Option<(GroupId, TabHit)> {
        self.groups.iter().find_map(|g| {
            g.tabs
                .iter()
                .find(|t| contains(t.rect, column, row))
                .map(|t| (g.group, *t))
        })
    }

    pub(super) fn tab_rect(&self, group: GroupId, id: SectionId) -> Option<Rect> {
        self.group(group)?
            .tabs
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.rect)
    }

    pub(super) fn on_splitter(&self, column: u16, row: u16) -> bool {
        self.splitter.is_some_and(|r| contains(r, column, row))
    }

    pub(super) fn in_search(&self, column: u16, row: u16) -> bool {
        contains(self.search, column, row)
    }

    /// Catalog index under the pointer, inside the explorer's border.
    pub(super) fn explorer_row(&self, column: u16, row: u16) -> Option<usize> {
        if !contains(self.explorer, column, row) {
            return None;
        }
        let idx = row.checked_sub(self.explorer.y + 1)? as usize;
        (idx < CATALOG.len()).then_some(idx)
    }

    /// Insertion slot in the left tab bar for a pointer at `column`: the index
    /// of the first tab whose midpoint lies right of the pointer, else the
    /// end of the whole list, hidden overflow tabs included.
    pub(super) fn drop_index(&self, column: u16) -> usize {
        let Some(left) = self.group(GroupId::Left) else {
            return 0;
        };
        left.tabs
            .iter()
            .find(|t| column < t.rect.x + t.rect.width / 2)
            .map(|t| t.index)
            .unwrap_or(left.tab_count)
    }
}

fn group_layout(group: GroupId, area: Rect, workspace: &Workspace) -> GroupLayout {
    let tab_bar = Rect::new(area.x, area.y, area.width, area.height.min(1));
    let body = Rect::new(
        area.x,
        area.y + tab_bar.height,
        area.width,
        area.height - tab_bar.height,
    );

    let open = workspace.tabs(group);
    let mut tabs = Vec::new();
    let mut x = tab_bar.x;
    let end = tab_bar.x + tab_bar.width;
    for (index, tab) in open.iter().enumerate() {
        if x >= end {
            break;
        }
        let width = (tab_label(tab).chars().count() as u16).min(end - x);
        tabs.push(TabHit {
            id: tab.id,
            index,
            rect: Rect::new(x, tab_bar.y, width, tab_bar.height),
        });
        x += width;
    }

    GroupLayout {
        group,
        area,
        tab_bar,
        body,
        tabs,
        tab_count: open.len(),
    }
}
