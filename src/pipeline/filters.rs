/*!
 * Entry filters applied ahead of the merge stages.
 *
 * Each filter consumes and returns the entry list; the orchestrator derives
 * removal counts from the length difference.
 */

use crate::errors::TimecodeError;
use crate::subtitle_processor::SubtitleEntry;
use crate::timecode;

/// Drop entries whose whole text is wrapped in square brackets.
///
/// Catches sound-effect captions like `[music]`; text that merely starts
/// with a bracketed prefix is kept.
pub fn filter_bracket_entries(entries: Vec<SubtitleEntry>) -> Vec<SubtitleEntry> {
    entries
        .into_iter()
        .filter(|entry| {
            let text = entry.text.trim();
            !(text.starts_with('[') && text.ends_with(']'))
        })
        .collect()
}

/// Keep entries starting inside the inclusive `[start_time, end_time]` window.
///
/// The filter only applies when both bounds are present and non-empty;
/// otherwise the list passes through untouched. Only the entry start is
/// consulted.
pub fn filter_by_time_range(
    entries: Vec<SubtitleEntry>,
    start_time: Option<&str>,
    end_time: Option<&str>,
) -> Result<Vec<SubtitleEntry>, TimecodeError> {
    let (Some(start_time), Some(end_time)) = (start_time, end_time) else {
        return Ok(entries);
    };
    if start_time.is_empty() || end_time.is_empty() {
        return Ok(entries);
    }

    let start_ms = timecode::time_to_ms(start_time)?;
    let end_ms = timecode::time_to_ms(end_time)?;

    let mut kept = Vec::with_capacity(entries.len());
    for entry in entries {
        let entry_start = entry.start_ms()?;
        if start_ms <= entry_start && entry_start <= end_ms {
            kept.push(entry);
        }
    }
    Ok(kept)
}

/// Drop entries that stay on screen for `min_duration_ms` or less.
///
/// Durations are signed, so inverted ranges always fall under the threshold.
pub fn remove_short_entries(
    entries: Vec<SubtitleEntry>,
    min_duration_ms: i64,
) -> Result<Vec<SubtitleEntry>, TimecodeError> {
    let mut kept = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.duration_ms()? > min_duration_ms {
            kept.push(entry);
        }
    }
    Ok(kept)
}
