/*!
 * End/start boundary stitching.
 *
 * When a sentence is split across two captions the first often ends with
 * the word the second starts with. This stage glues such neighbours back
 * together, absorbing the follower's remaining words.
 */

use crate::errors::TimecodeError;
use crate::subtitle_processor::SubtitleEntry;

/// Merge consecutive entries whose boundary words match.
///
/// For each entry the follower is absorbed while the start gap is at most
/// `max_end_start_gap` milliseconds (overlaps pass) and the last word of
/// the current text equals the first word of the follower. The follower's
/// end time is adopted as-is and its words minus the shared one are
/// appended, space-joined, with a leading space only when `enable_space_merge`
/// is set and something is left to append.
pub fn merge_end_start_entries(
    entries: Vec<SubtitleEntry>,
    max_end_start_gap: i64,
    enable_space_merge: bool,
) -> Result<Vec<SubtitleEntry>, TimecodeError> {
    let mut merged_entries = Vec::with_capacity(entries.len());
    let mut idx = 0;

    while idx < entries.len() {
        let mut merged = entries[idx].clone();

        while idx + 1 < entries.len() {
            let next = &entries[idx + 1];
            let time_gap = next.start_ms()? - merged.end_ms()?;
            if time_gap > max_end_start_gap {
                break;
            }

            let Some(last_word) = merged.text.split_whitespace().last() else {
                break;
            };
            let Some(first_word) = next.text.split_whitespace().next() else {
                break;
            };
            if last_word != first_word {
                break;
            }

            merged.end_time = next.end_time.clone();
            let remaining_text = next
                .text
                .split_whitespace()
                .skip(1)
                .collect::<Vec<_>>()
                .join(" ");
            let joiner = if enable_space_merge && !remaining_text.is_empty() {
                " "
            } else {
                ""
            };
            merged.text = format!("{}{}{}", merged.text.trim(), joiner, remaining_text);
            idx += 1;
        }

        merged_entries.push(merged);
        idx += 1;
    }

    Ok(merged_entries)
}
