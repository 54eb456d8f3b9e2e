use chrono::{DateTime, Utc};

/// Compact star/fork counts: 1234 -> "1.2k", 3400000 -> "3.4M".
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}k", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Renders an RFC 3339 timestamp relative to now ("Today", "3 days ago",
/// "2 months ago"). Falls back to the raw string when it does not parse.
pub fn format_relative(timestamp: &str) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) else {
        return timestamp.to_string();
    };
    relative_to(parsed.with_timezone(&Utc), Utc::now())
}

fn relative_to(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - then).num_days().abs();
    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        7..=29 => plural(days / 7, "week"),
        30..=364 => plural(days / 30, "month"),
        _ => plural(days / 365, "year"),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n > 1 {
        format!("{} {}s ago", n, unit)
    } else {
        format!("{} {} ago", n, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_234), "1.2k");
        assert_eq!(format_count(999_999), "1000.0k");
        assert_eq!(format_count(3_400_000), "3.4M");
    }

    #[test]
    fn test_relative_buckets() {
        let now = Utc::now();
        assert_eq!(relative_to(now, now), "Today");
        assert_eq!(relative_to(now - Duration::days(1), now), "Yesterday");
        assert_eq!(relative_to(now - Duration::days(3), now), "3 days ago");
        assert_eq!(relative_to(now - Duration::days(7), now), "1 week ago");
        assert_eq!(relative_to(now - Duration::days(21), now), "3 weeks ago");
        assert_eq!(relative_to(now - Duration::days(60), now), "2 months ago");
        assert_eq!(relative_to(now - Duration::days(800), now), "2 years ago");
    }

    #[test]
    fn test_unparseable_timestamp_passes_through() {
        assert_eq!(format_relative("not-a-date"), "not-a-date");
    }
}
