/// Utilities for the optional research period
///
/// Dates come straight from `<input type="date">`, i.e. `yyyy-mm-dd` or empty.
/// Nothing here rewrites them; the request carries the raw strings.

/// Human-readable period hint shown under the date inputs
/// Example: ("2024-03-01", "2024-03-31") -> "2024-03-01 – 2024-03-31"
pub fn describe_period(start: &str, end: &str) -> String {
    match (start.is_empty(), end.is_empty()) {
        (true, true) => "Any date".to_string(),
        (false, true) => format!("From {}", start),
        (true, false) => format!("Until {}", end),
        (false, false) => format!("{} – {}", start, end),
    }
}

/// True when both bounds are set and the end precedes the start.
/// ISO dates order lexicographically, so no parsing is needed.
pub fn is_reversed(start: &str, end: &str) -> bool {
    !start.is_empty() && !end.is_empty() && end < start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_period() {
        assert_eq!(describe_period("", ""), "Any date");
        assert_eq!(describe_period("2024-03-15", ""), "From 2024-03-15");
        assert_eq!(describe_period("", "2024-12-31"), "Until 2024-12-31");
        assert_eq!(
            describe_period("2024-03-15", "2024-12-31"),
            "2024-03-15 – 2024-12-31"
        );
    }

    #[test]
    fn test_is_reversed() {
        assert!(is_reversed("2024-05-01", "2024-04-30"));
        assert!(!is_reversed("2024-04-30", "2024-05-01"));
        assert!(!is_reversed("2024-05-01", "2024-05-01"));
        assert!(!is_reversed("", "2024-04-30"));
        assert!(!is_reversed("2024-05-01", ""));
    }
}
