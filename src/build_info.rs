use chrono::DateTime;

/// RFC 3339 timestamp stamped by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Month and year of a build timestamp, e.g. "October 2026".
pub fn build_month(timestamp: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.format("%B %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_month() {
        assert_eq!(
            build_month("2026-10-19T08:30:00+00:00"),
            Some("October 2026".to_string())
        );
        assert_eq!(build_month("yesterday"), None);
        assert!(build_month(BUILD_TIME).is_some());
    }
}
