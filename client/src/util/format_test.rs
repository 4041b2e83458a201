use super::*;

#[test]
fn blank_titles_get_placeholder() {
    assert_eq!(display_title(""), "Untitled Media");
    assert_eq!(display_title("   "), "Untitled Media");
    assert_eq!(display_title("Sunset"), "Sunset");
}

#[test]
fn dates_render_month_day_year() {
    assert_eq!(display_date(Some("2024-03-07T10:15:00.000Z")), "3/7/2024");
    assert_eq!(display_date(Some("2023-12-31T23:30:00-02:00")), "1/1/2024");
}

#[test]
fn missing_or_bad_dates() {
    assert_eq!(display_date(None), "");
    assert_eq!(display_date(Some("  ")), "");
    assert_eq!(display_date(Some("yesterday")), "yesterday");
}

#[test]
fn copyright_mentions_year() {
    assert_eq!(copyright_line(2025), "\u{a9} 2025 DataHex. All rights reserved.");
}
