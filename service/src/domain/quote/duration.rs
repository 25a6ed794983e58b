//! Resolution of stay and package durations.

use std::sync::LazyLock;

use regex::Regex;

use super::{CheckInDate, CheckOutDate, EndDate, StartDate};

/// Number of days a package is assumed to last if its duration label cannot
/// be parsed.
pub const DEFAULT_DURATION_DAYS: u32 = 1;

/// Returns the number of nights between the provided check-in and check-out
/// dates.
///
/// `0` is returned if the check-out date is not after the check-in date.
#[must_use]
pub fn nights_for_stay(check_in: CheckInDate, check_out: CheckOutDate) -> u32 {
    u32::try_from(check_in.days_until(check_out)).unwrap_or(0)
}

/// Parses the number of days from the provided free-text duration `label`,
/// like `5 Days / 4 Nights`.
///
/// The first integer followed by the word `day` or `days` (in any case) is
/// taken. [`None`] is returned if there is no such integer, or it's zero.
#[must_use]
pub fn parse_duration_days(label: &str) -> Option<u32> {
    /// Regular expression matching an integer followed by a `day(s)` word.
    static REGEX: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?i)\b(\d+)\s*days?\b").expect("valid regex")
    });

    REGEX
        .captures(label)
        .and_then(|c| c[1].parse::<u32>().ok())
        .filter(|&days| days > 0)
}

/// Extracts the number of days from the provided free-text duration `label`,
/// falling back to the [`DEFAULT_DURATION_DAYS`].
///
/// See [`parse_duration_days()`] for the details of extraction.
#[must_use]
pub fn extract_duration_days(label: &str) -> u32 {
    parse_duration_days(label).unwrap_or(DEFAULT_DURATION_DAYS)
}

/// Returns the last day of a package starting at the provided date and
/// lasting the provided number of days.
///
/// Both ends are inclusive, so a single-day package ends on its start date.
#[must_use]
pub fn package_end_date(start: StartDate, duration_days: u32) -> EndDate {
    start
        .add_days(i64::from(duration_days.saturating_sub(1)))
        .coerce()
}

/// Returns the number of days a package spans, counting both of its ends.
///
/// Falls back to the number of days extracted from the provided duration
/// `label` if any of the dates is unknown.
#[must_use]
pub fn package_nights(
    start: Option<StartDate>,
    end: Option<EndDate>,
    label: &str,
) -> u32 {
    match (start, end) {
        (Some(start), Some(end)) => {
            u32::try_from(start.days_until(end) + 1).unwrap_or(0)
        }
        _ => extract_duration_days(label),
    }
}
