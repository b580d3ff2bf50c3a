/*!
 * Sliding-window candidate merge.
 *
 * The stage walks the entry list with a window of `candidate_chunk_size`
 * entries. Every start position in the window grows a merge candidate word
 * by word under the gap/length constraints, recording a candidate at every
 * size reached. The best candidate wins the window by score, then break
 * naturalness, then merge count; ties keep the earliest candidate. The
 * merge is greedy and never backtracks: the cursor jumps past the winner.
 */

use std::cmp::Ordering;

use log::{debug, error};

use crate::analysis::{SegmentAnalyzer, SegmentVerdict};
use crate::app_config::MergeOptions;
use crate::errors::TimecodeError;
use crate::subtitle_processor::SubtitleEntry;
use crate::timecode;

// @struct: One merge candidate inside a window
#[derive(Debug, Clone)]
struct MergeCandidate {
    entry: SubtitleEntry,
    merge_count: usize,
    verdict: Option<SegmentVerdict>,
    score: f64,
    start_idx: usize,
}

/// Analyzer failures downgrade to "no verdict" so a bad segment can never
/// abort a merge run
fn safe_analyze(
    analyzer: Option<&dyn SegmentAnalyzer>,
    text: &str,
    language: &str,
) -> Option<SegmentVerdict> {
    let analyzer = analyzer?;
    match analyzer.analyze(text, language) {
        Ok(verdict) => Some(verdict),
        Err(e) => {
            error!("Segment analysis failed: {}", e);
            None
        }
    }
}

/// Weighted candidate score, rounded to four decimals; no verdict scores 0.0
fn candidate_score(verdict: Option<&SegmentVerdict>) -> f64 {
    match verdict {
        Some(v) => round4(0.7 * v.completeness_score + 0.3 * v.break_naturalness),
        None => 0.0,
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Join two caption texts; the separator appears only when space merge is
/// enabled and both sides are non-empty
fn join_segment_text(current_text: &str, next_text: &str, enable_space_merge: bool) -> String {
    let left = current_text.trim();
    let right = next_text.trim();
    if left.is_empty() {
        return right.to_string();
    }
    if right.is_empty() {
        return left.to_string();
    }
    let separator = if enable_space_merge { " " } else { "" };
    format!("{}{}{}", left, separator, right)
}

fn non_space_len(text: &str) -> usize {
    text.chars().filter(|c| *c != ' ').count()
}

/// Gap and min-length constraints for growing a candidate.
///
/// The min-length rule refuses the extension only when both sides already
/// reach `min_text_length` non-space characters; one short side keeps the
/// merge available.
fn can_extend_merge(
    current_text: &str,
    next_entry: &SubtitleEntry,
    current_end_time: &str,
    options: &MergeOptions,
) -> Result<bool, TimecodeError> {
    let current_end_ms = timecode::time_to_ms(current_end_time)?;
    let next_start_ms = next_entry.start_ms()?;
    if next_start_ms - current_end_ms > options.max_basic_gap {
        return Ok(false);
    }

    if options.enable_min_length_merge {
        let current_len = non_space_len(current_text);
        let next_len = non_space_len(next_entry.text.trim());
        if current_len >= options.min_text_length && next_len >= options.min_text_length {
            return Ok(false);
        }
    }

    Ok(true)
}

// Strictly-greater comparison chain; equal candidates keep the incumbent,
// so the earliest candidate wins full ties
fn candidate_beats(challenger: &MergeCandidate, incumbent: &MergeCandidate) -> bool {
    match challenger.score.total_cmp(&incumbent.score) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => {
            let challenger_bn = challenger.verdict.map_or(0.0, |v| v.break_naturalness);
            let incumbent_bn = incumbent.verdict.map_or(0.0, |v| v.break_naturalness);
            match challenger_bn.total_cmp(&incumbent_bn) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => challenger.merge_count > incumbent.merge_count,
            }
        }
    }
}

fn select_best_candidate(candidates: &[MergeCandidate]) -> Option<&MergeCandidate> {
    let mut best: Option<&MergeCandidate> = None;
    for candidate in candidates {
        match best {
            None => best = Some(candidate),
            Some(incumbent) => {
                if candidate_beats(candidate, incumbent) {
                    best = Some(candidate);
                }
            }
        }
    }
    best
}

/// Run the sliding-window merge over the entry list.
///
/// Candidate growth stops at `max_merge_count` absorbed captions, at the
/// window width, at the window edge, when the gap or min-length rules
/// refuse the extension, or when the joined text would exceed
/// `max_text_length` characters. Entries ahead of the winner inside the
/// window are emitted unmerged; the cursor then jumps past the winner, so
/// it advances by at least one entry per round.
pub fn merge_basic_entries(
    entries: Vec<SubtitleEntry>,
    options: &MergeOptions,
    analyzer: Option<&dyn SegmentAnalyzer>,
) -> Result<Vec<SubtitleEntry>, TimecodeError> {
    let chunk_size = options.effective_chunk_size();
    let max_merge_count = options.max_merge_count;
    let max_text_length = options.max_text_length;
    let language = options.segment_analyzer_language.as_str();

    debug!(
        "Window merge: chunk_size={}, max_merge_count={}, max_text_length={}, max_basic_gap={}, analyzer={}",
        chunk_size,
        max_merge_count,
        max_text_length,
        options.max_basic_gap,
        analyzer.is_some()
    );

    let mut processed = Vec::with_capacity(entries.len());
    let mut idx = 0;

    while idx < entries.len() {
        let window_end = (idx + chunk_size).min(entries.len());
        let mut window_candidates: Vec<MergeCandidate> = Vec::new();

        for start_idx in idx..window_end {
            let start_entry = &entries[start_idx];
            let mut current_text = start_entry.text.trim().to_string();
            let mut current_end_time = start_entry.end_time.clone();
            let mut merge_count = 1;
            let mut current_verdict = safe_analyze(analyzer, &current_text, language);

            loop {
                window_candidates.push(MergeCandidate {
                    entry: SubtitleEntry {
                        seq_num: start_entry.seq_num,
                        start_time: start_entry.start_time.clone(),
                        end_time: current_end_time.clone(),
                        text: current_text.clone(),
                    },
                    merge_count,
                    verdict: current_verdict,
                    score: candidate_score(current_verdict.as_ref()),
                    start_idx,
                });

                if merge_count >= max_merge_count
                    || merge_count >= chunk_size
                    || start_idx + merge_count >= window_end
                {
                    break;
                }

                let next_entry = &entries[start_idx + merge_count];
                if !can_extend_merge(&current_text, next_entry, &current_end_time, options)? {
                    break;
                }

                let combined_text =
                    join_segment_text(&current_text, &next_entry.text, options.enable_space_merge);
                if combined_text.chars().count() > max_text_length {
                    break;
                }

                current_text = combined_text;
                current_end_time = next_entry.end_time.clone();
                merge_count += 1;
                current_verdict = safe_analyze(analyzer, &current_text, language);
            }
        }

        if log::max_level() >= log::LevelFilter::Debug {
            trace_window(idx, window_end, &window_candidates);
        }

        let Some(best) = select_best_candidate(&window_candidates) else {
            processed.push(entries[idx].clone());
            idx += 1;
            continue;
        };

        // Entries ahead of the winner leave the window unmerged
        for fill_idx in idx..best.start_idx {
            processed.push(entries[fill_idx].clone());
        }

        processed.push(best.entry.clone());
        idx = best.start_idx + best.merge_count;
    }

    Ok(processed)
}

fn trace_window(window_start: usize, window_end: usize, candidates: &[MergeCandidate]) {
    let formatted: Vec<String> = candidates
        .iter()
        .map(|cand| {
            let mut text = cand.entry.text.clone();
            if text.chars().count() > 40 {
                text = cand.entry.text.chars().take(37).collect::<String>() + "...";
            }
            format!(
                "start={}|merge={}|score={:.3}|complete={}|text={}",
                cand.start_idx + 1,
                cand.merge_count,
                cand.score,
                if cand.verdict.is_some_and(|v| v.is_complete_sentence) {
                    "Y"
                } else {
                    "N"
                },
                text
            )
        })
        .collect();
    debug!(
        "Candidate window {}-{}: count={} [{}]",
        window_start + 1,
        window_end,
        formatted.len(),
        formatted.join("; ")
    );
}
