//! Human-readable elapsed time.

use std::time::Duration;

const SECOND: u128 = 1_000;
const MINUTE: u128 = 60 * SECOND;
const HOUR: u128 = 60 * MINUTE;
const DAY: u128 = 24 * HOUR;

/// Describe `elapsed` milliseconds with the two largest applicable units.
///
/// Components are truncated, never rounded. The secondary unit of the day and
/// hour phrases counts the whole elapsed time, not the remainder, so 25 hours
/// reads `1 day(s) and 25 hour(s)`.
///
/// ```rust
/// use loglazy::format_millis;
///
/// assert_eq!(format_millis(999), "999 milliseconds");
/// assert_eq!(format_millis(61_000), "1 minute(s) and 1 second(s)");
/// assert_eq!(format_millis(3_661_000), "1 hour(s) and 61 minute(s)");
/// ```
pub fn format_millis(elapsed: u128) -> String {
    if elapsed >= DAY {
        format!("{} day(s) and {} hour(s)", elapsed / DAY, elapsed / HOUR)
    } else if elapsed >= HOUR {
        format!("{} hour(s) and {} minute(s)", elapsed / HOUR, elapsed / MINUTE)
    } else if elapsed >= MINUTE {
        format!(
            "{} minute(s) and {} second(s)",
            elapsed / MINUTE,
            elapsed % MINUTE / SECOND
        )
    } else if elapsed >= SECOND {
        format!(
            "{} second(s) and {} milliseconds",
            elapsed / SECOND,
            elapsed % SECOND
        )
    } else {
        format!("{elapsed} milliseconds")
    }
}

/// [`format_millis`] for a [`Duration`], at millisecond resolution.
pub fn format_duration(elapsed: Duration) -> String {
    format_millis(elapsed.as_millis())
}
