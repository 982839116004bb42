//! Shift hour bucketing.
//!
//! The defect grid covers a fixed 8-hour shift from 09:00 to 17:00, split
//! into one-hour columns. Event timestamps arrive as free-format strings
//! ("14:30", "14", "9.05"); parsing is best-effort and an event whose time
//! cannot be placed in the shift is silently skipped by the caller.

use std::sync::LazyLock;

use regex::Regex;

/// Number of one-hour columns in the shift grid.
pub const BUCKET_COUNT: usize = 8;

/// First hour of the shift (inclusive, 24h clock).
pub const SHIFT_START_HOUR: u32 = 9;

/// End of the shift (exclusive, 24h clock).
pub const SHIFT_END_HOUR: u32 = 17;

/// Matches a clock time like "14:30" or "9.05" anywhere in the string;
/// only the hour component is used.
static CLOCK_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})[:.]\d{2}").expect("static regex must compile"));

/// Map a free-format time string to a bucket index in `0..BUCKET_COUNT`.
///
/// Parsing policy, first match wins:
/// 1. `H:MM` / `HH:MM` (colon or period separator) -> hour component.
/// 2. The entire string is 1-2 digits -> the hour itself.
/// 3. Anything else is unparseable.
///
/// Returns `None` for unparseable strings and for hours outside
/// `[SHIFT_START_HOUR, SHIFT_END_HOUR)`.
pub fn hour_bucket(time: &str) -> Option<usize> {
    let hour = parse_hour(time)?;
    if (SHIFT_START_HOUR..SHIFT_END_HOUR).contains(&hour) {
        Some((hour - SHIFT_START_HOUR) as usize)
    } else {
        None
    }
}

fn parse_hour(time: &str) -> Option<u32> {
    let trimmed = time.trim();
    if let Some(caps) = CLOCK_TIME.captures(trimmed) {
        return caps[1].parse().ok();
    }
    if !trimmed.is_empty() && trimmed.len() <= 2 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return trimmed.parse().ok();
    }
    None
}

/// Human-readable column label for a bucket, e.g. `"09:00-10:00"`.
pub fn bucket_label(bucket: usize) -> String {
    let start = SHIFT_START_HOUR as usize + bucket;
    format!("{:02}:00-{:02}:00", start, start + 1)
}

/// All column labels in grid order.
pub fn bucket_labels() -> Vec<String> {
    (0..BUCKET_COUNT).map(bucket_label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_valid_clock_hour_maps_to_arithmetic_bucket() {
        for hour in 9..17u32 {
            let time = format!("{hour:02}:15");
            assert_eq!(
                hour_bucket(&time),
                Some((hour - 9) as usize),
                "time {time} should land in bucket {}",
                hour - 9
            );
        }
    }

    #[test]
    fn shift_boundaries_are_half_open() {
        assert_eq!(hour_bucket("09:00"), Some(0));
        assert_eq!(hour_bucket("16:59"), Some(7));
        assert_eq!(hour_bucket("08:59"), None);
        assert_eq!(hour_bucket("17:00"), None);
    }

    #[test]
    fn bare_hour_string_is_accepted() {
        assert_eq!(hour_bucket("14"), Some(5));
        assert_eq!(hour_bucket("9"), Some(0));
        assert_eq!(hour_bucket("8"), None);
        assert_eq!(hour_bucket("18"), None);
    }

    #[test]
    fn period_separator_is_accepted() {
        assert_eq!(hour_bucket("9.05"), Some(0));
        assert_eq!(hour_bucket("12.30"), Some(3));
    }

    #[test]
    fn single_digit_hour_with_minutes() {
        assert_eq!(hour_bucket("9:45"), Some(0));
    }

    #[test]
    fn clock_match_wins_over_bare_digits() {
        // "2:30pm" parses as hour 2, which is outside the shift; the
        // am/pm suffix is not interpreted.
        assert_eq!(hour_bucket("2:30pm"), None);
        assert_eq!(hour_bucket("14:30pm"), Some(5));
    }

    #[test]
    fn garbage_is_unbucketable() {
        assert_eq!(hour_bucket(""), None);
        assert_eq!(hour_bucket("noon"), None);
        assert_eq!(hour_bucket("999"), None);
        assert_eq!(hour_bucket("18:30"), None);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(hour_bucket(" 10:00 "), Some(1));
        assert_eq!(hour_bucket(" 11 "), Some(2));
    }

    #[test]
    fn labels_cover_the_full_shift() {
        let labels = bucket_labels();
        assert_eq!(labels.len(), BUCKET_COUNT);
        assert_eq!(labels[0], "09:00-10:00");
        assert_eq!(labels[7], "16:00-17:00");
    }
}
