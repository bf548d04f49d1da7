use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Milliseconds since the Unix epoch, UTC.
pub type EpochMillis = i64;

pub fn now_millis() -> EpochMillis {
    Utc::now().timestamp_millis()
}

pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

/// Renders a timestamp for humans, e.g. `2023-11-14 22:13:20 UTC`.
/// Out-of-range values fall back to the raw millisecond count.
pub fn format_millis(value: EpochMillis) -> String {
    match DateTime::<Utc>::from_timestamp_millis(value) {
        Some(at) => at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("{value} ms"),
    }
}

/// Case-insensitive substring match used by the list filters.
/// An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod primitives_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_format_millis_as_utc() {
        assert_eq!(format_millis(1_700_000_000_000), "2023-11-14 22:13:20 UTC");
    }

    #[rstest]
    fn it_should_fall_back_to_the_raw_value_when_out_of_range() {
        assert_eq!(format_millis(i64::MAX), format!("{} ms", i64::MAX));
    }

    #[rstest]
    #[case("Ada Lovelace", "ada", true)]
    #[case("Ada Lovelace", "LOVE", true)]
    #[case("Ada Lovelace", "", true)]
    #[case("Ada Lovelace", "grace", false)]
    fn it_should_match_ignoring_case(
        #[case] haystack: &str,
        #[case] needle: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(contains_ignore_case(haystack, needle), expected);
    }

    #[rstest]
    fn it_should_generate_distinct_ids() {
        assert_ne!(new_id(), new_id());
    }
}
