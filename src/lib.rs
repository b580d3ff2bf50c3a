/*!
 * # Submerge - Subtitle Merge and Cleanup
 *
 * A Rust library for cleaning up machine-generated SRT subtitles by
 * merging fragmented, duplicated and overlapping captions.
 *
 * ## Features
 *
 * - Lenient SRT parsing that never rejects a file
 * - Collapse consecutive duplicate captions
 * - Stitch captions that share a word across an end/start boundary
 * - Sliding-window candidate merge scored by sentence heuristics
 * - Bracket, time-range and minimum-duration filters
 * - Per-run structured reports with per-stage entry counts
 * - Concurrent folder processing
 * - ISO 639-1 and ISO 639-2 language code support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: SRT parsing, serialization and the entry model
 * - `timecode`: Timestamp conversions
 * - `pipeline`: The merge pipeline:
 *   - `pipeline::filters`: Bracket, time-range and duration filters
 *   - `pipeline::duplicates`: Consecutive duplicate merge
 *   - `pipeline::boundary`: End/start boundary merge
 *   - `pipeline::window`: Sliding-window candidate merge
 *   - `pipeline::orchestrator`: Stage sequencing and reporting
 * - `analysis`: Segment analyzers scoring merge candidates:
 *   - `analysis::heuristic`: Profile-based sentence heuristics
 *   - `analysis::mock`: Scripted analyzer for tests
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod analysis;
pub mod app_config;
pub mod file_utils;
pub mod subtitle_processor;
pub mod timecode;
pub mod pipeline;
pub mod app_controller;
pub mod language_utils;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::{Config, MergeOptions};
pub use subtitle_processor::SubtitleEntry;
pub use pipeline::{MergeOutcome, MergePipeline, MergeReport};
pub use analysis::{SegmentAnalyzer, SegmentVerdict};
pub use language_utils::{get_language_name, normalize_to_part1_or_part2t};
pub use errors::{AnalyzerError, AppError, ConfigError, TimecodeError};
