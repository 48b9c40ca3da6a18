//! Helper functions for run timestamps and string truncation.
//!
//! Two timestamp formats are in play: a compact one used to build article
//! ids (`20240101083000`) and an underscored one used to name file and
//! object-store artifacts (`20240101_083000`). Both read the local clock.

use chrono::Local;

/// Compact local timestamp used as the run-unique prefix of article ids.
///
/// # Returns
///
/// The current local time formatted as `YYYYMMDDHHMMSS` (14 digits).
///
/// Second-level granularity means ids are only unique within a single
/// run; two runs started inside the same second would collide.
pub fn run_timestamp() -> String {
    Local::now().format("%Y%m%d%H%M%S").to_string()
}

/// Local timestamp used in file and object-store artifact names.
///
/// # Returns
///
/// The current local time formatted as `YYYYMMDD_HHMMSS`, e.g. the
/// `20240101_083000` in `news_20240101_083000.json`.
pub fn artifact_timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Truncate a string to at most `max` characters.
///
/// Counts `char`s rather than bytes, so a multi-byte scalar is either
/// kept whole or dropped, never split. Strings already within the limit
/// come back unchanged.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_chars("hello", 10), "hello");
/// assert_eq!(truncate_chars("hello", 2), "he");
/// ```
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
