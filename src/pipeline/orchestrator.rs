/*!
 * Merge pipeline orchestrator.
 *
 * Runs the cleanup stages over parsed captions in fixed order:
 * 1. Time-range filter (only when window bounds are given)
 * 2. Bracket caption filter
 * 3. Minimum-duration filter
 * 4. Duplicate merge
 * 5. End/start boundary merge
 * 6. Sliding-window candidate merge
 *
 * Stages 3 to 6 are individually switchable through `MergeOptions`. Every
 * run ends with a reindex from 1 and serialization back to SRT text, and
 * returns the per-stage entry counts in a `MergeReport`.
 */

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;

use crate::analysis::heuristic::HeuristicAnalyzer;
use crate::analysis::SegmentAnalyzer;
use crate::app_config::MergeOptions;
use crate::errors::AppError;
use crate::subtitle_processor;

use super::{boundary, duplicates, filters, window};

/// Per-stage entry counts for one merge run.
///
/// Stage counts are `None` when the stage was disabled, `Some(len)` with the
/// entry count after the stage ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Entries entering the merge stages, after any time-range filtering
    pub input_entries: usize,

    /// Entries surviving all stages
    pub output_entries: usize,

    /// Pure bracket captions dropped
    pub brackets_removed: usize,

    /// Captions dropped by the minimum-duration filter
    pub short_removed: usize,

    /// Entry count after the duplicate merge
    pub after_duplicate_merge: Option<usize>,

    /// Entry count after the end/start boundary merge
    pub after_boundary_merge: Option<usize>,

    /// Entry count after the sliding-window merge
    pub after_window_merge: Option<usize>,

    /// Wall-clock duration of the run
    pub duration: Duration,
}

impl MergeReport {
    /// Net number of captions removed by the run
    pub fn captions_removed(&self) -> usize {
        self.input_entries.saturating_sub(self.output_entries)
    }

    /// Get a one-line summary of the run.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        parts.push(format!("Duration: {:.2}s", self.duration.as_secs_f32()));
        parts.push(format!(
            "Captions: {} -> {}",
            self.input_entries, self.output_entries
        ));

        if self.brackets_removed > 0 {
            parts.push(format!("Brackets: {} removed", self.brackets_removed));
        }

        if self.short_removed > 0 {
            parts.push(format!("Short: {} removed", self.short_removed));
        }

        if let Some(count) = self.after_duplicate_merge {
            parts.push(format!("After duplicate merge: {}", count));
        }

        if let Some(count) = self.after_boundary_merge {
            parts.push(format!("After boundary merge: {}", count));
        }

        if let Some(count) = self.after_window_merge {
            parts.push(format!("After window merge: {}", count));
        }

        parts.join(" | ")
    }
}

/// Result of one merge run: the serialized SRT text plus its report.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// Cleaned SRT text, reindexed from 1
    pub output: String,

    /// Per-stage counts for the run
    pub report: MergeReport,
}

/// The caption merge pipeline.
///
/// Holds the merge options and the segment analyzer used to score window
/// candidates. Cloning is cheap; clones share the analyzer.
#[derive(Debug, Clone)]
pub struct MergePipeline {
    options: MergeOptions,
    analyzer: Arc<dyn SegmentAnalyzer>,
}

impl MergePipeline {
    /// Create a pipeline with the heuristic analyzer.
    pub fn new(options: MergeOptions) -> Self {
        Self {
            options,
            analyzer: Arc::new(HeuristicAnalyzer::new()),
        }
    }

    /// Swap in a different analyzer implementation.
    pub fn with_analyzer(mut self, analyzer: Arc<dyn SegmentAnalyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Get the merge options.
    pub fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Run the full pipeline over SRT text.
    ///
    /// `start_time` and `end_time` bound an optional time window; captions
    /// starting outside it are dropped before any merge stage runs. The
    /// window bounds count as part of the input, so `input_entries` reflects
    /// the filtered count.
    pub fn process(
        &self,
        content: &str,
        start_time: Option<&str>,
        end_time: Option<&str>,
    ) -> Result<MergeOutcome, AppError> {
        let started = Instant::now();

        let mut entries = subtitle_processor::parse_srt_string(content);
        let parsed_count = entries.len();

        entries = filters::filter_by_time_range(entries, start_time, end_time)?;
        let input_entries = entries.len();
        if input_entries < parsed_count {
            debug!(
                "Time-range filter kept {} of {} captions",
                input_entries, parsed_count
            );
        }

        let before_brackets = entries.len();
        entries = filters::filter_bracket_entries(entries);
        let brackets_removed = before_brackets - entries.len();

        let short_removed = if self.options.enable_min_duration_remove {
            let before = entries.len();
            entries = filters::remove_short_entries(entries, self.options.min_duration_ms)?;
            before - entries.len()
        } else {
            0
        };

        let after_duplicate_merge = if self.options.enable_duplicate_merge {
            entries =
                duplicates::merge_duplicate_entries(entries, self.options.max_duplicate_gap)?;
            Some(entries.len())
        } else {
            None
        };

        let after_boundary_merge = if self.options.enable_end_start_merge {
            entries = boundary::merge_end_start_entries(
                entries,
                self.options.max_end_start_gap,
                self.options.enable_space_merge,
            )?;
            Some(entries.len())
        } else {
            None
        };

        let after_window_merge = if self.options.enable_basic_merge {
            let analyzer = self
                .options
                .enable_segment_analyzer
                .then(|| self.analyzer.as_ref());
            entries = window::merge_basic_entries(entries, &self.options, analyzer)?;
            Some(entries.len())
        } else {
            None
        };

        let output_entries = entries.len();
        subtitle_processor::reindex_entries(&mut entries);
        let output = subtitle_processor::to_srt_string(&entries);

        let report = MergeReport {
            input_entries,
            output_entries,
            brackets_removed,
            short_removed,
            after_duplicate_merge,
            after_boundary_merge,
            after_window_merge,
            duration: started.elapsed(),
        };
        debug!("Merge finished: {}", report.summary());

        Ok(MergeOutcome { output, report })
    }
}

impl Default for MergePipeline {
    fn default() -> Self {
        Self::new(MergeOptions::default())
    }
}
