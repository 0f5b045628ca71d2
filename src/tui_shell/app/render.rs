use super::*;

use crate::workspace::DragState;

use super::layout::{GroupLayout, tab_label};

const ACCENT: Color = Color::Cyan;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &mut App) {
    app.layout = ScreenLayout::compute(frame.area(), &app.workspace);
    let layout = app.layout.clone();

    draw_header(frame, app, layout.header);
    draw_search(frame, app, layout.search);
    draw_explorer(frame, app, layout.explorer);
    for group in &layout.groups {
        draw_group(frame, app, group);
    }
    if let Some(bar) = layout.splitter {
        let style = if matches!(app.interaction, Interaction::Resize(_)) {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let lines: Vec<Line> = (0..bar.height).map(|_| Line::from("│")).collect();
        frame.render_widget(Paragraph::new(lines).style(style), bar);
    }
    draw_status(frame, app, layout.status);

    // Overlays last so they sit on top of the panes.
    if app.search.focused && app.search.is_active() {
        draw_search_results(frame, app, &layout);
    }
    if let Some(menu) = &app.menu {
        draw_menu(frame, menu, layout.screen);
    }
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let basics = app.content.record().map(|r| &r.basics);
    let name = basics
        .and_then(|b| b.name.clone())
        .unwrap_or_else(|| "Lalit Sharma".to_string());
    let label = basics.and_then(|b| b.label.clone()).unwrap_or_default();

    let spans = vec![
        Span::styled(" vitae ", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw("  "),
        Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(label, Style::default().fg(Color::Gray)),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_search(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let border = if app.search.focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title("Search (Ctrl+K)");

    let line = if app.search.query().is_empty() && !app.search.focused {
        Line::from(Span::styled(
            "type to find a section",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.search.query().to_string())
    };
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(line).block(block), area);

    if app.search.focused && inner.width > 0 && inner.height > 0 {
        let prefix: String = app
            .search
            .input
            .buf
            .chars()
            .take(app.search.input.cursor)
            .collect();
        let x = inner.x + (prefix.chars().count() as u16).min(inner.width - 1);
        frame.set_cursor_position((x, inner.y));
    }
}

fn draw_search_results(frame: &mut ratatui::Frame, app: &App, layout: &ScreenLayout) {
    let results = app.search.results();
    let height = (results.len().max(1) as u16 + 2).min(layout.editor.height);
    let width = layout.search.width.min(48);
    let area = Rect::new(layout.search.x, layout.search.y + layout.search.height, width, height);
    if area.height == 0 {
        return;
    }

    let items: Vec<ListItem> = if results.is_empty() {
        vec![ListItem::new(Span::styled(
            "no matching section",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        results
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let icon = icon_for(s.display_path);
                let style = if i == 0 {
                    Style::default().bg(Color::DarkGray)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", icon.glyph), style.fg(icon.color)),
                    Span::styled(format!("{:<12}", s.title), style),
                    Span::styled(s.display_path, style.fg(Color::Gray)),
                ]))
            })
            .collect()
    };

    frame.render_widget(Clear, area);
    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title("Results")),
        area,
    );
}

fn draw_explorer(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Explorer;
    let open_left = app.workspace.active(GroupId::Left);
    let items: Vec<ListItem> = CATALOG
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let icon = icon_for(s.display_path);
            let mut style = Style::default();
            if Some(s.id) == open_left {
                style = style.add_modifier(Modifier::BOLD);
            }
            if focused && i == app.explorer_selected {
                style = style.bg(Color::DarkGray);
            }
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", icon.glyph), style.fg(icon.color)),
                Span::styled(s.display_path, style),
            ]))
        })
        .collect();

    let border = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title("Explorer"),
        ),
        area,
    );
}

fn draw_group(frame: &mut ratatui::Frame, app: &App, layout: &GroupLayout) {
    let group = layout.group;
    let active = app.workspace.active(group);
    let focused = app.focus == Focus::Group(group);
    let drag = match app.interaction {
        Interaction::TabDrag(d) if group == GroupId::Left => Some(d),
        _ => None,
    };

    // Tab bar
    let tabs = app.workspace.tabs(group);
    let mut spans = Vec::new();
    for hit in &layout.tabs {
        let Some(tab) = tabs.get(hit.index) else {
            continue;
        };
        let mut style = if Some(tab.id) == active {
            let s = Style::default().fg(Color::White).bg(Color::Blue);
            if focused {
                s.add_modifier(Modifier::BOLD)
            } else {
                s
            }
        } else {
            Style::default().fg(Color::Gray)
        };
        if drag.is_some_and(|d| d.source_index == hit.index) {
            style = style.add_modifier(Modifier::DIM);
        }
        if drag.is_some_and(|d| d.hover_index == hit.index && d.source_index != hit.index) {
            spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
        }
        let label: String = tab_label(tab).chars().take(hit.rect.width as usize).collect();
        spans.push(Span::styled(label, style));
    }
    if drag.is_some_and(|d: DragState| d.hover_index == layout.tab_count) {
        spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), layout.tab_bar);

    // Body
    let Some(id) = active else {
        return;
    };
    let section = id.section();
    let border = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(section.display_path);

    let lines: Vec<Line> = crate::render::render(id, &app.content)
        .into_iter()
        .map(Line::from)
        .collect();
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .scroll((app.scroll_of(group), 0)),
        layout.body,
    );
}

fn draw_status(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.content.label()),
            Style::default().fg(Color::Black).bg(content_color(&app.content)),
        ),
        Span::raw(" "),
    ];
    if app.workspace.is_split() {
        spans.push(Span::styled(
            format!("split {:.0}% ", app.workspace.split_ratio() * 100.0),
            Style::default().fg(Color::Gray),
        ));
    }
    if let Some(msg) = &app.status {
        spans.push(Span::raw(msg.clone()));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(
        "q quit  Tab focus  Ctrl+W close  s split  m menu",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn content_color(state: &ContentState) -> Color {
    match state {
        ContentState::Loading => Color::Yellow,
        ContentState::Ready { .. } => Color::Green,
        ContentState::Unavailable => Color::Gray,
    }
}

fn draw_menu(frame: &mut ratatui::Frame, menu: &ContextMenu, screen: Rect) {
    let area = menu.rect(screen);
    let items: Vec<ListItem> = menu
        .actions
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let style = if i == menu.selected {
                Style::default().fg(Color::Black).bg(ACCENT)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(format!(" {}", action.label()), style))
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        ),
        area,
    );
}
