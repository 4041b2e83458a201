//! Display formatting for media posts.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Datelike, Utc};

pub const UNTITLED: &str = "Untitled Media";

/// Post title, or a placeholder when blank.
pub fn display_title(title: &str) -> &str {
    if title.trim().is_empty() { UNTITLED } else { title }
}

/// `createdAt` as `M/D/YYYY`. Unparsable timestamps are shown verbatim.
pub fn display_date(created_at: Option<&str>) -> String {
    let Some(raw) = created_at.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.with_timezone(&Utc).format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_owned(),
    }
}

/// `© <year> DataHex. All rights reserved.`
pub fn copyright_line(year: i32) -> String {
    format!("\u{a9} {year} DataHex. All rights reserved.")
}

pub fn current_year() -> i32 {
    Utc::now().year()
}
