/*!
 * Tests for the entry filters running ahead of the merge stages
 */

use anyhow::Result;
use submerge::pipeline::filters::{
    filter_bracket_entries, filter_by_time_range, remove_short_entries,
};
use submerge::subtitle_processor::SubtitleEntry;

fn entry(seq: usize, start: &str, end: &str, text: &str) -> SubtitleEntry {
    SubtitleEntry::new(seq, start, end, text)
}

/// Test that fully bracketed captions are dropped
#[test]
fn test_filter_bracket_entries_withBracketedText_shouldDropEntry() {
    let entries = vec![
        entry(1, "00:00:01,000", "00:00:02,000", "[music]"),
        entry(2, "00:00:03,000", "00:00:04,000", "  [applause]  "),
        entry(3, "00:00:05,000", "00:00:06,000", "[partial] more words"),
        entry(4, "00:00:07,000", "00:00:08,000", "Spoken line"),
    ];

    let kept = filter_bracket_entries(entries);

    let texts: Vec<&str> = kept.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["[partial] more words", "Spoken line"]);
}

/// Test that the time-range filter is inclusive on both bounds and only
/// consults entry starts
#[test]
fn test_filter_by_time_range_withBounds_shouldKeepEntriesStartingInside() -> Result<()> {
    let entries = vec![
        entry(1, "00:00:04,999", "00:00:20,000", "Before"),
        entry(2, "00:00:05,000", "00:00:06,000", "At lower bound"),
        entry(3, "00:00:10,000", "00:00:30,000", "Inside with late end"),
        entry(4, "00:00:15,000", "00:00:16,000", "At upper bound"),
        entry(5, "00:00:15,001", "00:00:16,000", "After"),
    ];

    let kept = filter_by_time_range(entries, Some("00:00:05,000"), Some("00:00:15,000"))?;

    let texts: Vec<&str> = kept.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["At lower bound", "Inside with late end", "At upper bound"]
    );
    Ok(())
}

/// Test passthrough when a bound is missing or empty
#[test]
fn test_filter_by_time_range_withMissingBound_shouldPassThrough() -> Result<()> {
    let entries = vec![entry(1, "00:01:00,000", "00:01:02,000", "Kept")];

    assert_eq!(
        filter_by_time_range(entries.clone(), Some("00:00:01,000"), None)?,
        entries
    );
    assert_eq!(
        filter_by_time_range(entries.clone(), None, Some("00:00:02,000"))?,
        entries
    );
    assert_eq!(
        filter_by_time_range(entries.clone(), Some(""), Some("00:00:02,000"))?,
        entries
    );
    assert_eq!(filter_by_time_range(entries.clone(), None, None)?, entries);
    Ok(())
}

/// Test that malformed window bounds surface as errors
#[test]
fn test_filter_by_time_range_withMalformedBound_shouldReturnError() {
    let entries = vec![entry(1, "00:00:01,000", "00:00:02,000", "Text")];

    let result = filter_by_time_range(entries, Some("five seconds"), Some("00:00:15,000"));
    assert!(result.is_err());
}

/// Test that a corrupt entry timestamp fails the range filter
#[test]
fn test_filter_by_time_range_withCorruptEntry_shouldReturnError() {
    let entries = vec![entry(1, "garbage", "00:00:02,000", "Text")];

    let result = filter_by_time_range(entries, Some("00:00:00,000"), Some("00:00:15,000"));
    assert!(result.is_err());
}

/// Test the strict minimum-duration threshold
#[test]
fn test_remove_short_entries_withThreshold_shouldDropShortAndInverted() -> Result<()> {
    let entries = vec![
        entry(1, "00:00:01,000", "00:00:01,200", "Too short"),
        entry(2, "00:00:02,000", "00:00:02,300", "Exactly at threshold"),
        entry(3, "00:00:03,000", "00:00:03,301", "Just above"),
        entry(4, "00:00:05,000", "00:00:04,000", "Inverted range"),
    ];

    let kept = remove_short_entries(entries, 300)?;

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].text, "Just above");
    Ok(())
}

/// Test that corrupt timestamps propagate out of the duration filter
#[test]
fn test_remove_short_entries_withCorruptTimestamp_shouldReturnError() {
    let entries = vec![entry(1, "00:00:01,000", "bad", "Text")];

    assert!(remove_short_entries(entries, 300).is_err());
}
