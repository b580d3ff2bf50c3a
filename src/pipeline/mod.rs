/*!
 * Caption merge pipeline.
 *
 * This module contains the merge stages and their sequencing:
 * - `filters`: bracket, time-range and minimum-duration filters
 * - `duplicates`: collapse repeated identical captions
 * - `boundary`: stitch captions sharing an end/start word
 * - `window`: sliding-window candidate merge with analyzer scoring
 * - `orchestrator`: stage sequencing and the merge report
 */

pub mod filters;
pub mod duplicates;
pub mod boundary;
pub mod window;
pub mod orchestrator;

// Re-export main types
pub use orchestrator::{MergeOutcome, MergePipeline, MergeReport};
