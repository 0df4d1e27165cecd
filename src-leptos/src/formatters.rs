//! Utility functions for formatting and display

use chrono::{DateTime, Datelike, Utc};

const MONTHS: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Format an ISO 8601 timestamp as "Jan 19, 2026".
///
/// Unparseable input is returned as-is; empty input becomes a dash.
pub fn format_date(date_str: &str) -> String {
    if date_str.is_empty() {
        return "—".to_string();
    }

    let parsed = match DateTime::parse_from_rfc3339(date_str) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(_) => match date_str.parse::<DateTime<Utc>>() {
            Ok(dt) => dt,
            Err(_) => return date_str.to_string(),
        },
    };

    let month = MONTHS[(parsed.month0() % 12) as usize];
    format!("{} {}, {}", month, parsed.day(), parsed.year())
}

/// Format a growth delta with a direction arrow: "▲ 12.5%" / "▼ 3.0%".
pub fn format_percent(value: f64) -> String {
    if value > 0.0 {
        format!("▲ {:.1}%", value)
    } else if value < 0.0 {
        format!("▼ {:.1}%", value.abs())
    } else {
        "0.0%".to_string()
    }
}

/// CSS color class for a growth delta.
pub fn percent_color(value: f64) -> &'static str {
    if value > 0.0 {
        "success"
    } else if value < 0.0 {
        "danger"
    } else {
        "neutral"
    }
}

/// Format an amount in naira with thousands separators: "₦1,250.50".
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let value = value.abs();
    let whole = value.trunc() as u64;
    let cents = ((value.fract() * 100.0).round() as u64).min(99);

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}₦{}.{:02}", sign, grouped, cents)
}

/// Shorten text for card previews, appending an ellipsis when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-01-19T05:30:00Z"), "Jan 19, 2026");
        assert_eq!(format_date(""), "—");
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn test_format_percent_direction() {
        assert_eq!(format_percent(12.5), "▲ 12.5%");
        assert_eq!(format_percent(-3.0), "▼ 3.0%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn test_percent_color() {
        assert_eq!(percent_color(4.2), "success");
        assert_eq!(percent_color(-0.1), "danger");
        assert_eq!(percent_color(0.0), "neutral");
    }

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(1250.5), "₦1,250.50");
        assert_eq!(format_currency(0.0), "₦0.00");
        assert_eq!(format_currency(1_000_000.0), "₦1,000,000.00");
        assert_eq!(format_currency(-42.25), "-₦42.25");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer sentence", 8), "a longer…");
    }
}
