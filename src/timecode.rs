/*!
 * Conversion between SRT timestamp notation and milliseconds.
 *
 * Merge arithmetic works on signed milliseconds so that inverted ranges and
 * negative gaps flow through the math unchanged; timestamps are only
 * validated at this conversion boundary.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::TimecodeError;

// @const: SRT timestamp shape, exactly HH:MM:SS,mmm
static TIMECODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2}):(\d{2}):(\d{2}),(\d{3})$").unwrap());

/// Parse an SRT timestamp (`HH:MM:SS,mmm`) into milliseconds.
///
/// Hours, minutes and seconds are range-checked the way a wall clock reads
/// them, so every accepted timestamp round-trips through [`ms_to_time`].
pub fn time_to_ms(time_str: &str) -> Result<i64, TimecodeError> {
    let caps = TIMECODE_REGEX
        .captures(time_str)
        .ok_or_else(|| TimecodeError::InvalidFormat(time_str.to_string()))?;

    // Capture groups are all-digit by construction, parse cannot fail
    let field = |idx: usize| -> i64 { caps[idx].parse().unwrap_or(0) };
    let hours = field(1);
    let minutes = field(2);
    let seconds = field(3);
    let millis = field(4);

    if hours > 23 || minutes > 59 || seconds > 59 {
        return Err(TimecodeError::InvalidFormat(time_str.to_string()));
    }

    Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
}

/// Format milliseconds as an SRT timestamp (`HH:MM:SS,mmm`).
///
/// Negative durations cannot be rendered and are rejected.
pub fn ms_to_time(ms: i64) -> Result<String, TimecodeError> {
    if ms < 0 {
        return Err(TimecodeError::NegativeMillis(ms));
    }

    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    Ok(format!(
        "{:02}:{:02}:{:02},{:03}",
        hours, minutes, seconds, millis
    ))
}
