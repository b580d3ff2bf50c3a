/*!
 * Tests for the sliding-window candidate merge
 */

use anyhow::Result;
use submerge::analysis::mock::MockAnalyzer;
use submerge::analysis::{SegmentAnalyzer, SegmentVerdict};
use submerge::app_config::MergeOptions;
use submerge::pipeline::window::merge_basic_entries;
use submerge::subtitle_processor::SubtitleEntry;

fn entry(seq: usize, start: &str, end: &str, text: &str) -> SubtitleEntry {
    SubtitleEntry::new(seq, start, end, text)
}

fn options() -> MergeOptions {
    MergeOptions {
        enable_basic_merge: true,
        enable_space_merge: true,
        ..MergeOptions::default()
    }
}

/// Test that without an analyzer the widest candidate wins the window
#[test]
fn test_merge_basic_entries_withoutAnalyzer_shouldMergeGreedily() -> Result<()> {
    let entries = vec![
        entry(1, "00:00:00,000", "00:00:01,000", "a"),
        entry(2, "00:00:01,100", "00:00:02,000", "b"),
        entry(3, "00:00:02,100", "00:00:03,000", "c"),
    ];

    let merged = merge_basic_entries(entries, &options(), None)?;

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].text, "a b");
    assert_eq!(merged[0].start_time, "00:00:00,000");
    assert_eq!(merged[0].end_time, "00:00:02,000");
    assert_eq!(merged[1].text, "c");
    Ok(())
}

/// Test that the absorbed caption count is capped and the cursor jumps past
/// each winner
#[test]
fn test_merge_basic_entries_withMaxMergeCount_shouldCapAbsorption() -> Result<()> {
    let entries = vec![
        entry(1, "00:00:00,000", "00:00:01,000", "a"),
        entry(2, "00:00:01,100", "00:00:02,000", "b"),
        entry(3, "00:00:02,100", "00:00:03,000", "c"),
        entry(4, "00:00:03,100", "00:00:04,000", "d"),
    ];
    let options = MergeOptions {
        candidate_chunk_size: 4,
        max_merge_count: 2,
        ..options()
    };

    let merged = merge_basic_entries(entries, &options, None)?;

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].text, "a b");
    assert_eq!(merged[0].end_time, "00:00:02,000");
    assert_eq!(merged[1].text, "c d");
    assert_eq!(merged[1].start_time, "00:00:02,100");
    assert_eq!(merged[1].end_time, "00:00:04,000");
    Ok(())
}

/// Test that a joined text over the length limit refuses the extension
#[test]
fn test_merge_basic_entries_withTextOverLimit_shouldNotMerge() -> Result<()> {
    let long_a = "a".repeat(30);
    let long_b = "b".repeat(30);
    let entries = vec![
        entry(1, "00:00:00,000", "00:00:01,000", &long_a),
        entry(2, "00:00:01,100", "00:00:02,000", &long_b),
    ];

    // Joined text would be 61 characters against the default limit of 50
    let merged = merge_basic_entries(entries.clone(), &options(), None)?;

    assert_eq!(merged, entries);
    Ok(())
}

/// Test that a gap above the threshold refuses the extension
#[test]
fn test_merge_basic_entries_withGapAboveThreshold_shouldNotMerge() -> Result<()> {
    let entries = vec![
        entry(1, "00:00:00,000", "00:00:01,000", "a"),
        entry(2, "00:00:01,600", "00:00:02,000", "b"),
    ];

    let merged = merge_basic_entries(entries.clone(), &options(), None)?;

    assert_eq!(merged, entries);
    Ok(())
}

/// Test that the min-length rule only refuses when both sides are long enough
#[test]
fn test_merge_basic_entries_withMinLengthRule_shouldRequireOneShortSide() -> Result<()> {
    let options = MergeOptions {
        enable_min_length_merge: true,
        min_text_length: 5,
        ..options()
    };

    // Both sides at or above five non-space characters: no merge
    let long_sides = vec![
        entry(1, "00:00:00,000", "00:00:01,000", "Hello there"),
        entry(2, "00:00:01,100", "00:00:02,000", "my friend"),
    ];
    let merged = merge_basic_entries(long_sides.clone(), &options, None)?;
    assert_eq!(merged, long_sides);

    // One short side keeps the merge available
    let short_side = vec![
        entry(1, "00:00:00,000", "00:00:01,000", "Hi"),
        entry(2, "00:00:01,100", "00:00:02,000", "there friend"),
    ];
    let merged = merge_basic_entries(short_side, &options, None)?;
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].text, "Hi there friend");
    Ok(())
}

/// Test that a window width of one turns the stage into a no-op
#[test]
fn test_merge_basic_entries_withWindowOfOne_shouldLeaveEntriesUntouched() -> Result<()> {
    let entries = vec![
        entry(1, "00:00:00,000", "00:00:01,000", "a"),
        entry(2, "00:00:01,100", "00:00:02,000", "b"),
        entry(3, "00:00:02,100", "00:00:03,000", "c"),
    ];
    let options = MergeOptions {
        candidate_chunk_size: 1,
        ..options()
    };

    let merged = merge_basic_entries(entries.clone(), &options, None)?;

    assert_eq!(merged, entries);
    Ok(())
}

/// Test that a high-scoring candidate at a later start wins the window and
/// earlier entries pass through unmerged
#[test]
fn test_merge_basic_entries_withAnalyzer_shouldLetLaterCandidateWin() -> Result<()> {
    let entries = vec![
        entry(1, "00:00:00,000", "00:00:01,000", "I went to"),
        entry(2, "00:00:01,100", "00:00:02,000", "Home."),
        entry(3, "00:00:02,100", "00:00:03,000", "Stop."),
    ];
    let mock = MockAnalyzer::neutral().with_custom_verdict(|text| {
        if text.contains("went") {
            SegmentVerdict {
                is_complete_sentence: false,
                completeness_score: 0.0,
                break_naturalness: 0.0,
                ok_as_segment: false,
            }
        } else {
            SegmentVerdict {
                is_complete_sentence: true,
                completeness_score: 1.0,
                break_naturalness: 1.0,
                ok_as_segment: true,
            }
        }
    });
    let analyzer: &dyn SegmentAnalyzer = &mock;

    let merged = merge_basic_entries(entries, &options(), Some(analyzer))?;

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].text, "I went to");
    assert_eq!(merged[0].start_time, "00:00:00,000");
    assert_eq!(merged[1].text, "Home. Stop.");
    assert_eq!(merged[1].start_time, "00:00:01,100");
    assert_eq!(merged[1].end_time, "00:00:03,000");
    Ok(())
}

/// Test that a strong single caption outranks its own merged variants
#[test]
fn test_merge_basic_entries_withAnalyzer_shouldKeepStrongSingleCaption() -> Result<()> {
    let entries = vec![
        entry(1, "00:00:00,000", "00:00:01,000", "Stop right there."),
        entry(2, "00:00:01,100", "00:00:02,000", "Criminal scum"),
    ];
    let mock = MockAnalyzer::neutral().with_custom_verdict(|text| SegmentVerdict {
        is_complete_sentence: text.ends_with('.'),
        completeness_score: if text.ends_with('.') { 1.0 } else { 0.1 },
        break_naturalness: 0.5,
        ok_as_segment: true,
    });
    let analyzer: &dyn SegmentAnalyzer = &mock;

    let merged = merge_basic_entries(entries.clone(), &options(), Some(analyzer))?;

    assert_eq!(merged, entries);
    Ok(())
}

/// Test that analyzer failures downgrade to the greedy behavior
#[test]
fn test_merge_basic_entries_withFailingAnalyzer_shouldFallBackToGreedy() -> Result<()> {
    let entries = vec![
        entry(1, "00:00:00,000", "00:00:01,000", "a"),
        entry(2, "00:00:01,100", "00:00:02,000", "b"),
    ];
    let mock = MockAnalyzer::failing();
    let analyzer: &dyn SegmentAnalyzer = &mock;

    let merged = merge_basic_entries(entries, &options(), Some(analyzer))?;

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].text, "a b");
    assert!(mock.call_count() > 0);
    Ok(())
}

/// Test that corrupt timestamps surface once an extension is attempted
#[test]
fn test_merge_basic_entries_withCorruptTimestamp_shouldReturnError() {
    let entries = vec![
        entry(1, "00:00:00,000", "bad", "a"),
        entry(2, "00:00:01,100", "00:00:02,000", "b"),
    ];

    assert!(merge_basic_entries(entries, &options(), None).is_err());
}

/// Test the empty input edge case
#[test]
fn test_merge_basic_entries_withNoEntries_shouldReturnEmptyList() -> Result<()> {
    let merged = merge_basic_entries(Vec::new(), &options(), None)?;
    assert!(merged.is_empty());
    Ok(())
}
