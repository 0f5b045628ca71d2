use super::*;

const PAGE: i32 = 10;

pub(in crate::tui_shell::app) fn handle_key(app: &mut App, k: KeyEvent) {
    let ctrl = k.modifiers.contains(KeyModifiers::CONTROL);
    let alt = k.modifiers.contains(KeyModifiers::ALT);

    if ctrl && k.code == KeyCode::Char('c') {
        app.quit = true;
        return;
    }
    app.status = None;

    if k.code == KeyCode::Esc {
        handle_escape(app);
        return;
    }

    if app.menu.is_some() {
        handle_menu_key(app, k);
        return;
    }

    if ctrl && k.code == KeyCode::Char('k') {
        app.search.focused = true;
        return;
    }

    if app.search.focused {
        handle_search_key(app, k, ctrl);
        return;
    }

    match k.code {
        KeyCode::Char('q') => app.quit = true,
        KeyCode::Char('w') if ctrl => app.close_active(),
        KeyCode::Char('s') => app.split_active(),
        KeyCode::Char('m') => app.open_menu_for_active(),
        KeyCode::Char(d @ '1'..='8') => {
            let idx = d as usize - '1' as usize;
            if let Some(section) = CATALOG.get(idx) {
                app.explorer_selected = idx;
                app.open_section(section.id, GroupId::Left);
            }
        }
        KeyCode::Tab => app.cycle_focus(),
        KeyCode::Left if alt => app.cycle_tab(-1),
        KeyCode::Right if alt => app.cycle_tab(1),
        KeyCode::Up | KeyCode::Down if app.focus == Focus::Explorer => {
            app.move_explorer(if k.code == KeyCode::Up { -1 } else { 1 });
        }
        KeyCode::Enter if app.focus == Focus::Explorer => {
            if let Some(section) = CATALOG.get(app.explorer_selected) {
                app.open_section(section.id, GroupId::Left);
            }
        }
        KeyCode::Up => app.scroll_by(app.focused_group(), -1),
        KeyCode::Down => app.scroll_by(app.focused_group(), 1),
        KeyCode::PageUp => app.scroll_by(app.focused_group(), -PAGE),
        KeyCode::PageDown => app.scroll_by(app.focused_group(), PAGE),
        _ => {}
    }
}

fn handle_escape(app: &mut App) {
    if app.menu.is_some() {
        app.close_menu();
    } else if app.search.focused || !app.search.query().is_empty() {
        app.search.cancel();
    } else {
        app.interaction.cancel();
    }
}

fn handle_menu_key(app: &mut App, k: KeyEvent) {
    let Some(menu) = app.menu.as_mut() else {
        return;
    };
    match k.code {
        KeyCode::Up => menu.move_up(),
        KeyCode::Down => menu.move_down(),
        KeyCode::Enter => {
            let action = menu.selected_action();
            if let Some(action) = action {
                app.run_menu_action(action);
            }
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, k: KeyEvent, ctrl: bool) {
    match k.code {
        KeyCode::Enter => app.commit_search(),
        KeyCode::Tab => {
            // Completes the query to the first match's slug.
            if let Some(first) = app.search.results().first() {
                app.search.input.set(first.id.slug().to_string());
            }
        }
        KeyCode::Backspace => app.search.input.backspace(),
        KeyCode::Delete => app.search.input.delete(),
        KeyCode::Left => app.search.input.move_left(),
        KeyCode::Right => app.search.input.move_right(),
        KeyCode::Char(c) if !ctrl => app.search.input.insert_char(c),
        _ => {}
    }
}
