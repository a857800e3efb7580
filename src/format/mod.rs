//! Miscellaneous formatting helpers.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Units for 1024-based file sizes.
const SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

/// Human-readable 1024-based file size (`1536` → `"1.5 KB"`).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn human_file_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0usize;
    while size >= 1024.0 && unit + 1 < SIZE_UNITS.len() {
        size /= 1024.0;
        unit += 1;
    }
    let label = SIZE_UNITS.get(unit).copied().unwrap_or("B");
    if unit == 0 { format!("{bytes} {label}") } else { format!("{size:.1} {label}") }
}

/// `YYYY-MM-DD HH:MM:SS` stamp for a date-time.
#[must_use]
pub fn date_stamp(moment: &NaiveDateTime) -> String {
    moment.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Parses an integer out of `text`, degrading to `0`.
#[must_use]
pub fn to_int(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}

/// Inclusive integer range as a vector; empty when `start > end`.
#[must_use]
pub fn range(start: i64, end: i64) -> Vec<i64> {
    (start..=end).collect()
}

/// Whole years between `birth` and `today`; `None` for a future birthdate.
#[must_use]
pub fn age_from_birthdate(birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    if birth > today {
        return None;
    }
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

/// Decodes standard Base64 into bytes; malformed input degrades to `None`.
#[must_use]
pub fn decode_base64(text: &str) -> Option<Vec<u8>> {
    STANDARD.decode(text).ok()
}
