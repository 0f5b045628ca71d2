use anyhow::Result;

mod app;
mod context_menu;
mod icons;
mod input;
mod search;

use self::context_menu::{ContextMenu, MenuAction};
use self::icons::icon_for;
use self::input::Input;
use self::search::SearchBox;

pub(crate) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
