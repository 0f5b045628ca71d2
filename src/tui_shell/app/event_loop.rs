use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;

use super::*;

mod key_dispatch;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.poll_content();
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            let ev = event::read().context("read event")?;
            app.handle_event(ev);
        }
    }
}

impl App {
    pub(super) fn handle_event(&mut self, ev: Event) {
        match ev {
            Event::Key(k) if k.kind == KeyEventKind::Press => key_dispatch::handle_key(self, k),
            Event::Mouse(m) => super::mouse::handle_mouse(self, m),
            Event::Resize(..) => self.close_menu(),
            // A mouse-up outside the window never reaches us.
            Event::FocusLost => self.interaction.cancel(),
            _ => {}
        }
    }
}
