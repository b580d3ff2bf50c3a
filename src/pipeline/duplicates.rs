/*!
 * Duplicate caption collapse.
 *
 * Speech-to-text exports often repeat the same caption across adjacent
 * cues. This stage folds such runs into one entry spanning the full time
 * range; the text is never concatenated.
 */

use crate::errors::TimecodeError;
use crate::subtitle_processor::SubtitleEntry;
use crate::timecode;

/// Collapse runs of identical captions separated by at most
/// `max_duplicate_gap` milliseconds.
///
/// A follower joins the run when its text is byte-identical to the head
/// entry and the gap from the merged end to its start lies in
/// `[0, max_duplicate_gap]`; overlapping followers never join. A merged
/// entry is emitted only when more than one caption was absorbed,
/// otherwise the original passes through untouched.
pub fn merge_duplicate_entries(
    entries: Vec<SubtitleEntry>,
    max_duplicate_gap: i64,
) -> Result<Vec<SubtitleEntry>, TimecodeError> {
    let mut deduplicated = Vec::with_capacity(entries.len());
    let mut idx = 0;

    while idx < entries.len() {
        let current = &entries[idx];
        let mut duplicate_count = 1;
        let mut current_end_ms = current.end_ms()?;

        while idx + duplicate_count < entries.len() {
            let next = &entries[idx + duplicate_count];
            let time_gap = next.start_ms()? - current_end_ms;

            if current.text == next.text && 0 <= time_gap && time_gap <= max_duplicate_gap {
                current_end_ms = next.end_ms()?;
                duplicate_count += 1;
            } else {
                break;
            }
        }

        if duplicate_count > 1 {
            deduplicated.push(SubtitleEntry {
                seq_num: current.seq_num,
                start_time: current.start_time.clone(),
                end_time: timecode::ms_to_time(current_end_ms)?,
                text: current.text.clone(),
            });
            idx += duplicate_count;
        } else {
            deduplicated.push(current.clone());
            idx += 1;
        }
    }

    Ok(deduplicated)
}
