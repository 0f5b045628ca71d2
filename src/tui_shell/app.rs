use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

use crate::config::Config;
use crate::content::{ContentLoader, ContentProvider, ContentState, spawn_load};
use crate::model::{CATALOG, SectionId};
use crate::workspace::{GroupId, Interaction, Workspace};

use super::{ContextMenu, MenuAction, SearchBox, icon_for};

mod actions;
mod event_loop;
mod layout;
mod mouse;
mod render;
mod runtime;

use self::layout::ScreenLayout;

pub(super) use self::runtime::run;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Focus {
    Explorer,
    Group(GroupId),
}

pub(super) struct App {
    pub(super) workspace: Workspace,

    pub(super) content: ContentState,
    pub(super) loader: Option<ContentLoader>,

    pub(super) search: SearchBox,
    pub(super) focus: Focus,
    pub(super) explorer_selected: usize,

    // Per-group vertical scroll, reset whenever that group's active tab changes.
    pub(super) scroll: [u16; 2],
    pub(super) scrolled_for: [Option<SectionId>; 2],

    pub(super) menu: Option<ContextMenu>,
    pub(super) interaction: Interaction,

    // Geometry from the last draw, used for mouse hit-testing.
    pub(super) layout: ScreenLayout,
    pub(super) min_pane_cols: u16,

    pub(super) status: Option<String>,
    pub(super) quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            workspace: Workspace::new(),
            content: ContentState::Loading,
            loader: None,
            search: SearchBox::default(),
            focus: Focus::Group(GroupId::Left),
            explorer_selected: 0,
            scroll: [0; 2],
            scrolled_for: [Some(SectionId::Home), None],
            menu: None,
            interaction: Interaction::Idle,
            layout: ScreenLayout::default(),
            min_pane_cols: crate::config::DEFAULT_MIN_PANE_COLS,
            status: None,
            quit: false,
        }
    }
}

impl App {
    pub(super) fn load(config: Config) -> Self {
        let mut app = App {
            min_pane_cols: config.min_pane_cols,
            ..App::default()
        };

        for id in &config.open {
            app.workspace.open(id.section(), GroupId::Left);
        }
        if !config.open.is_empty() {
            app.workspace.set_active(GroupId::Left, SectionId::Home);
        }

        match ContentProvider::new(config.primary, config.fallback) {
            Ok(provider) => app.loader = Some(spawn_load(provider)),
            Err(err) => {
                log::warn!("content provider unavailable: {:#}", err);
                app.content = ContentState::Unavailable;
            }
        }
        app
    }

    /// Picks up the background load once it settles.
    pub(super) fn poll_content(&mut self) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };
        if let Some(state) = loader.poll() {
            self.status = Some(format!("content: {}", state.label()));
            self.content = state;
            self.loader = None;
        }
    }

    pub(super) fn focused_group(&self) -> GroupId {
        match self.focus {
            Focus::Group(g) => g,
            Focus::Explorer => GroupId::Left,
        }
    }

    pub(super) fn scroll_mut(&mut self, group: GroupId) -> &mut u16 {
        &mut self.scroll[group_slot(group)]
    }

    pub(super) fn scroll_of(&self, group: GroupId) -> u16 {
        self.scroll[group_slot(group)]
    }
}

pub(super) fn group_slot(group: GroupId) -> usize {
    match group {
        GroupId::Left => 0,
        GroupId::Right => 1,
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
