use std::sync::OnceLock;

use time::Date;
use time::format_description::FormatItem;

fn iso_day_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse("[year]-[month]-[day]").expect("valid time format")
    })
}

fn month_year_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse("[month repr:short] [year]").expect("valid time format")
    })
}

/// `2021-03-15` and `2021-03` become `Mar 2021`; anything else is shown as is.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    let candidate = if raw.len() == 7 {
        format!("{}-01", raw)
    } else {
        raw.to_string()
    };
    Date::parse(&candidate, iso_day_format())
        .ok()
        .and_then(|d| d.format(month_year_format()).ok())
        .unwrap_or_else(|| raw.to_string())
}

/// An open-ended range reads `start - Present`; a lone end date stands alone.
pub fn date_range(start: Option<&str>, end: Option<&str>) -> Option<String> {
    let start = start.map(str::trim).filter(|s| !s.is_empty());
    let end = end.map(str::trim).filter(|s| !s.is_empty());
    match (start, end) {
        (Some(s), Some(e)) => Some(format!("{} - {}", format_date(s), format_date(e))),
        (Some(s), None) => Some(format!("{} - Present", format_date(s))),
        (None, Some(e)) => Some(format_date(e)),
        (None, None) => None,
    }
}
