use super::*;

use crate::workspace::ratio_from_pointer;

const WHEEL_STEP: i32 = 3;

pub(super) fn handle_mouse(app: &mut App, m: MouseEvent) {
    let (column, row) = (m.column, m.row);
    match m.kind {
        MouseEventKind::Down(MouseButton::Left) => left_down(app, column, row),
        MouseEventKind::Down(MouseButton::Right) => match app.layout.tab_at(column, row) {
            Some((group, hit)) => app.open_menu_for(hit.id, group, (column, row)),
            None => app.close_menu(),
        },
        MouseEventKind::Drag(MouseButton::Left) => left_drag(app, column),
        MouseEventKind::Up(MouseButton::Left) => left_up(app),
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            app.close_menu();
            let delta = if m.kind == MouseEventKind::ScrollUp {
                -WHEEL_STEP
            } else {
                WHEEL_STEP
            };
            if let Some(group) = app.layout.group_at(column, row) {
                app.scroll_by(group, delta);
            }
        }
        _ => {}
    }
}

fn left_down(app: &mut App, column: u16, row: u16) {
    if let Some(menu) = &app.menu {
        let screen = app.layout.screen;
        let action = menu.action_at(column, row, screen);
        let inside = menu.contains(column, row, screen);
        match action {
            Some(action) => app.run_menu_action(action),
            // Clicks on the menu border are swallowed.
            None if !inside => app.close_menu(),
            None => {}
        }
        return;
    }

    if let Some(bar) = app.layout.splitter {
        if app.layout.on_splitter(column, row) {
            app.interaction
                .begin_resize(column.saturating_sub(bar.x) as f32);
            return;
        }
    }

    if let Some((group, hit)) = app.layout.tab_at(column, row) {
        app.activate_tab(group, hit.id);
        app.focus = Focus::Group(group);
        app.search.focused = false;
        // Only the main group reorders.
        if group == GroupId::Left {
            app.interaction.begin_drag(hit.id, hit.index);
        }
        return;
    }

    if let Some(idx) = app.layout.explorer_row(column, row) {
        app.explorer_selected = idx;
        app.search.focused = false;
        app.open_section(CATALOG[idx].id, GroupId::Left);
        return;
    }

    if app.layout.in_search(column, row) {
        app.search.focused = true;
        return;
    }

    if let Some(group) = app.layout.group_at(column, row) {
        app.focus = Focus::Group(group);
        app.search.focused = false;
    }
}

fn left_drag(app: &mut App, column: u16) {
    match app.interaction {
        Interaction::TabDrag(_) => {
            let idx = app.layout.drop_index(column);
            app.interaction.hover(idx);
        }
        Interaction::Resize(session) => {
            let editor = app.layout.editor;
            if let Some(ratio) = ratio_from_pointer(
                column as f32,
                editor.x as f32,
                session.grab_offset,
                editor.width as f32,
                app.min_pane_cols as f32,
            ) {
                app.workspace.set_split_ratio(ratio);
            }
        }
        Interaction::Idle => {}
    }
}

fn left_up(app: &mut App) {
    if let Interaction::TabDrag(drag) = app.interaction.finish() {
        if !app.drag_still_valid(&drag) {
            return;
        }
        if app.workspace.reorder(drag.source_index, drag.hover_index) {
            app.after_mutation();
        }
    }
}
