use crate::model::{ContentRecord, Location};

use super::dates::{date_range, format_date};

const EMPTY: &str = "Nothing listed yet.";

fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Joins the parts that are present; `None` when none are.
fn join_present(parts: &[Option<&str>], sep: &str) -> Option<String> {
    let kept: Vec<&str> = parts.iter().flatten().copied().collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept.join(sep))
    }
}

fn location_line(loc: &Option<Location>) -> Option<String> {
    let loc = loc.as_ref()?;
    join_present(
        &[
            present(&loc.city),
            present(&loc.region),
            present(&loc.country_code),
        ],
        ", ",
    )
}

fn heading(title: &str) -> Vec<String> {
    vec![format!("# {}", title), String::new()]
}

fn bullets(out: &mut Vec<String>, items: &[String]) {
    out.extend(
        items
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| format!("- {}", s)),
    );
}

fn keywords(items: &[String]) -> Option<String> {
    let kept: Vec<&str> = items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept.join(", "))
    }
}

/// Drops the trailing blank separator left after the last entry.
fn finish(mut out: Vec<String>, header_len: usize) -> Vec<String> {
    while out.len() > header_len && out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    if out.len() == header_len {
        out.push(EMPTY.to_string());
    }
    out
}

pub(super) fn home(record: &ContentRecord) -> Vec<String> {
    let b = &record.basics;
    let mut out = Vec::new();
    out.extend(present(&b.name).map(str::to_string));
    out.extend(present(&b.label).map(str::to_string));
    out.push(String::new());
    if let Some(summary) = present(&b.summary) {
        let first = summary
            .split_inclusive(". ")
            .next()
            .unwrap_or(summary)
            .trim();
        out.push(first.to_string());
        out.push(String::new());
    }
    if let Some(loc) = location_line(&b.location) {
        out.push(format!("Based in {}", loc));
        out.push(String::new());
    }
    out.push("Open a file from the explorer, or press Ctrl+K to search.".to_string());
    out
}

pub(super) fn about(record: &ContentRecord) -> Vec<String> {
    let mut out = heading("About");
    if let Some(summary) = present(&record.basics.summary) {
        out.extend(summary.lines().map(|l| l.trim_end().to_string()));
        out.push(String::new());
    }
    let interests: Vec<String> = record
        .interests
        .iter()
        .filter_map(|i| {
            let name = present(&i.name)?;
            Some(match keywords(&i.keywords) {
                Some(kw) => format!("{} ({})", name, kw),
                None => name.to_string(),
            })
        })
        .collect();
    if !interests.is_empty() {
        out.push(format!("Interests: {}", interests.join("; ")));
    }
    finish(out, 2)
}

pub(super) fn experience(record: &ContentRecord) -> Vec<String> {
    let mut out = heading("Experience");
    for w in &record.work {
        if let Some(title) = join_present(&[present(&w.position), present(&w.name)], " @ ") {
            out.push(format!("## {}", title));
        }
        out.extend(date_range(w.start_date.as_deref(), w.end_date.as_deref()));
        out.extend(present(&w.summary).map(str::to_string));
        bullets(&mut out, &w.highlights);
        out.extend(present(&w.url).map(str::to_string));
        out.push(String::new());
    }
    finish(out, 2)
}

pub(super) fn projects(record: &ContentRecord) -> Vec<String> {
    let mut out = heading("Projects");
    for p in &record.projects {
        out.extend(present(&p.name).map(|n| format!("## {}", n)));
        out.extend(date_range(p.start_date.as_deref(), p.end_date.as_deref()));
        out.extend(present(&p.description).map(str::to_string));
        bullets(&mut out, &p.highlights);
        out.extend(keywords(&p.keywords).map(|kw| format!("keywords: {}", kw)));
        out.extend(present(&p.url).map(str::to_string));
        out.push(String::new());
    }
    finish(out, 2)
}

pub(super) fn skills(record: &ContentRecord) -> Vec<String> {
    let mut out = heading("Skills");
    for s in &record.skills {
        let head = match (present(&s.name), present(&s.level)) {
            (Some(name), Some(level)) => Some(format!("{} ({})", name, level)),
            (Some(name), None) => Some(name.to_string()),
            (None, Some(level)) => Some(format!("({})", level)),
            (None, None) => None,
        };
        let line = match (head, keywords(&s.keywords)) {
            (Some(h), Some(kw)) => format!("{}: {}", h, kw),
            (Some(h), None) => h,
            (None, Some(kw)) => kw,
            (None, None) => continue,
        };
        out.push(line);
    }
    finish(out, 2)
}

pub(super) fn education(record: &ContentRecord) -> Vec<String> {
    let mut out = heading("Education");
    for e in &record.education {
        if let Some(title) = join_present(&[present(&e.study_type), present(&e.area)], " in ") {
            out.push(format!("## {}", title));
        }
        out.extend(present(&e.institution).map(str::to_string));
        out.extend(date_range(e.start_date.as_deref(), e.end_date.as_deref()));
        out.extend(present(&e.score).map(|s| format!("Score: {}", s)));
        out.extend(keywords(&e.courses).map(|c| format!("Courses: {}", c)));
        out.push(String::new());
    }
    finish(out, 2)
}

pub(super) fn training(record: &ContentRecord) -> Vec<String> {
    let mut out = heading("Training");
    for c in &record.certificates {
        let date = present(&c.date).map(format_date);
        let mut line = match join_present(&[present(&c.name), present(&c.issuer)], " - ") {
            Some(l) => l,
            None => match &date {
                Some(d) => d.clone(),
                None => continue,
            },
        };
        if let Some(d) = &date {
            if line != *d {
                line.push_str(&format!(" ({})", d));
            }
        }
        out.push(line);
        out.extend(present(&c.url).map(|u| format!("  {}", u)));
    }
    finish(out, 2)
}

pub(super) fn contact(record: &ContentRecord) -> Vec<String> {
    let b = &record.basics;
    let mut out = heading("Contact");
    out.extend(present(&b.email).map(|v| format!("Email: {}", v)));
    out.extend(present(&b.phone).map(|v| format!("Phone: {}", v)));
    out.extend(present(&b.url).map(|v| format!("Web: {}", v)));
    out.extend(location_line(&b.location).map(|v| format!("Location: {}", v)));

    let profiles: Vec<String> = b
        .profiles
        .iter()
        .filter_map(|p| {
            let who = join_present(&[present(&p.network), present(&p.username)], ": ");
            match (who, present(&p.url)) {
                (Some(who), Some(url)) => Some(format!("{} <{}>", who, url)),
                (Some(who), None) => Some(who),
                (None, Some(url)) => Some(url.to_string()),
                (None, None) => None,
            }
        })
        .collect();
    if !profiles.is_empty() {
        if out.len() > 2 {
            out.push(String::new());
        }
        out.extend(profiles);
    }
    finish(out, 2)
}
