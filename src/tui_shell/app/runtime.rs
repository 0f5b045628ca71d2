use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::{App, event_loop};

pub(in crate::tui_shell) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let mut stdout = io::stdout();
    enter_screen(&mut stdout, enable_raw_mode, disable_raw_mode)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(t) => t,
        Err(e) => {
            disable_raw_mode().ok();
            leave_screen(&mut io::stdout());
            return Err(e).context("create terminal");
        }
    };
    terminal.clear().ok();

    let mut app = App::load(opts.config);
    let res = event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    leave_screen(terminal.backend_mut());
    terminal.show_cursor().ok();

    res
}

/// Raw mode plus the alternate screen. Raw mode is switched back off if the
/// screen cannot be entered, so a failed start never strands the shell.
fn enter_screen<W: Write>(
    out: &mut W,
    enable_raw: impl FnOnce() -> io::Result<()>,
    disable_raw: impl FnOnce() -> io::Result<()>,
) -> Result<()> {
    enable_raw().context("enable raw mode")?;
    let entered = execute!(out, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange);
    if let Err(e) = entered {
        disable_raw().ok();
        leave_screen(out);
        return Err(e).context("enter alternate screen");
    }
    Ok(())
}

fn leave_screen<W: Write>(out: &mut W) {
    execute!(out, DisableFocusChange, DisableMouseCapture, LeaveAlternateScreen).ok();
}

#[cfg(test)]
#[path = "../../tests/tui_shell/runtime_tests.rs"]
mod tests;
