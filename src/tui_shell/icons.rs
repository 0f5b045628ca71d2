use ratatui::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Icon {
    pub(super) glyph: char,
    pub(super) color: Color,
}

const DEFAULT_ICON: Icon = Icon {
    glyph: '•',
    color: Color::Gray,
};

/// File-type icon keyed on the extension of a display path.
pub(super) fn icon_for(display_path: &str) -> Icon {
    let ext = display_path
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    let (glyph, color) = match ext.as_str() {
        "tsx" | "jsx" => ('◆', Color::Cyan),
        "md" => ('¶', Color::Blue),
        "json" => ('{', Color::Yellow),
        "rs" => ('⚙', Color::LightRed),
        "yml" | "yaml" => ('≡', Color::Magenta),
        "toml" => ('▤', Color::LightYellow),
        "py" => ('λ', Color::Green),
        "css" => ('#', Color::LightBlue),
        _ => return DEFAULT_ICON,
    };
    Icon { glyph, color }
}
