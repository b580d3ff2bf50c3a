use anyhow::{anyhow, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Merge pipeline options
    #[serde(default)]
    pub merge: MergeOptions,

    /// Max files processed in parallel in folder mode
    #[serde(default = "default_concurrent_files")]
    pub concurrent_files: usize,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Options steering the merge pipeline.
///
/// Field names serialize in camelCase, matching the option payload the tool
/// has always accepted; unknown thresholds stay signed because caption
/// sources produce inverted ranges and the pipeline lets them through.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MergeOptions {
    /// Collapse repeated identical captions
    #[serde(default)]
    pub enable_duplicate_merge: bool,

    /// Max gap in ms between duplicates
    #[serde(default = "default_max_duplicate_gap")]
    pub max_duplicate_gap: i64,

    /// Stitch captions sharing an end/start word
    #[serde(default)]
    pub enable_end_start_merge: bool,

    /// Max gap in ms for end/start stitching
    #[serde(default = "default_max_end_start_gap")]
    pub max_end_start_gap: i64,

    /// Run the sliding-window candidate merge
    #[serde(default)]
    pub enable_basic_merge: bool,

    /// Sliding window width in entries, floored at 1
    #[serde(default = "default_candidate_chunk_size")]
    pub candidate_chunk_size: usize,

    /// Max captions absorbed into one candidate
    #[serde(default = "default_max_merge_count")]
    pub max_merge_count: usize,

    /// Max combined text length in chars
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,

    /// Max gap in ms for window extension
    #[serde(default = "default_max_basic_gap")]
    pub max_basic_gap: i64,

    /// Join merged texts with a space
    #[serde(default)]
    pub enable_space_merge: bool,

    /// Only merge when one side is still short
    #[serde(default)]
    pub enable_min_length_merge: bool,

    /// Length threshold for the min-length rule, non-space chars
    #[serde(default = "default_min_text_length")]
    pub min_text_length: usize,

    /// Drop captions shorter than the duration threshold
    #[serde(default)]
    pub enable_min_duration_remove: bool,

    /// Duration threshold in ms
    #[serde(default = "default_min_duration_ms")]
    pub min_duration_ms: i64,

    /// Score window candidates with the segment analyzer
    #[serde(default)]
    pub enable_segment_analyzer: bool,

    /// Language hint passed to the analyzer
    #[serde(default = "default_segment_analyzer_language")]
    pub segment_analyzer_language: String,
}

impl MergeOptions {
    /// Window width with the floor applied
    pub fn effective_chunk_size(&self) -> usize {
        self.candidate_chunk_size.max(1)
    }
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            enable_duplicate_merge: false,
            max_duplicate_gap: default_max_duplicate_gap(),
            enable_end_start_merge: false,
            max_end_start_gap: default_max_end_start_gap(),
            enable_basic_merge: false,
            candidate_chunk_size: default_candidate_chunk_size(),
            max_merge_count: default_max_merge_count(),
            max_text_length: default_max_text_length(),
            max_basic_gap: default_max_basic_gap(),
            enable_space_merge: false,
            enable_min_length_merge: false,
            min_text_length: default_min_text_length(),
            enable_min_duration_remove: false,
            min_duration_ms: default_min_duration_ms(),
            enable_segment_analyzer: false,
            segment_analyzer_language: default_segment_analyzer_language(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_concurrent_files() -> usize {
    4
}

fn default_max_duplicate_gap() -> i64 {
    300
}

fn default_max_end_start_gap() -> i64 {
    300
}

fn default_candidate_chunk_size() -> usize {
    3
}

fn default_max_merge_count() -> usize {
    2
}

fn default_max_text_length() -> usize {
    50
}

fn default_max_basic_gap() -> i64 {
    500
}

fn default_min_text_length() -> usize {
    1
}

fn default_min_duration_ms() -> i64 {
    300
}

fn default_segment_analyzer_language() -> String {
    "en".to_string()
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            anyhow!(
                "Failed to read configuration file {}: {}",
                path.as_ref().display(),
                e
            )
        })?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse configuration: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.concurrent_files == 0 {
            return Err(anyhow!("concurrent_files must be at least 1"));
        }

        // Unsupported analyzer languages fall back to English at analysis
        // time, so this only warns
        let language = &self.merge.segment_analyzer_language;
        if !crate::analysis::is_supported_language(language) {
            warn!(
                "Analyzer language '{}' has no native profile, English heuristics will be used",
                language
            );
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            merge: MergeOptions::default(),
            concurrent_files: default_concurrent_files(),
            log_level: LogLevel::default(),
        }
    }
}
