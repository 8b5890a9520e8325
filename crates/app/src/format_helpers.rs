/// Shared formatting utilities for the UI layer.
///
/// Functions accept ISO-8601 date strings (e.g. "2026-01-20T21:35:00Z")
/// and produce human-readable output without external crate dependencies.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format an ISO date string as "Jan 20, 2026" (date-only).
///
/// Falls back to the first 10 characters if parsing fails.
pub fn format_date_human(date_str: &str) -> String {
    if date_str.len() < 10 {
        return date_str.to_string();
    }
    let year = &date_str[..4];
    let month = &date_str[5..7];
    let day = &date_str[8..10];

    let parsed_month = month.parse::<usize>().ok().filter(|m| (1..=12).contains(m));
    if let Some(m) = parsed_month {
        let day_num: u32 = day.parse().unwrap_or(0);
        format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year)
    } else {
        date_str[..10].to_string()
    }
}
