/*!
 * Segment analysis for merge candidate scoring.
 *
 * This module defines the analyzer capability consumed by the window merge:
 * - `SegmentAnalyzer`: the trait every analyzer implements
 * - `heuristic`: lexicon and punctuation based analyzer (English/Japanese)
 * - `mock`: scripted analyzer for tests
 */

use std::fmt::Debug;

use crate::errors::AnalyzerError;

/// Verdict an analyzer returns for one text segment.
///
/// Scores live in `[0.0, 1.0]`. `ok_as_segment` is the naturalness verdict
/// at the 0.5 threshold; it rides along for diagnostics and does not steer
/// candidate selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentVerdict {
    /// Whether the text reads as a finished sentence
    pub is_complete_sentence: bool,

    /// How close the text is to a finished sentence
    pub completeness_score: f64,

    /// How natural the text sounds when the caption breaks here
    pub break_naturalness: f64,

    /// Whether the break is acceptable as-is
    pub ok_as_segment: bool,
}

impl SegmentVerdict {
    /// All-zero verdict, used for empty segments
    pub fn empty() -> Self {
        SegmentVerdict {
            is_complete_sentence: false,
            completeness_score: 0.0,
            break_naturalness: 0.0,
            ok_as_segment: false,
        }
    }
}

/// Common trait for all segment analyzers
///
/// This trait defines the interface the window merge scores candidates
/// through, allowing analyzer implementations to be swapped freely. The
/// call site treats any error as "no verdict", so implementations may fail
/// without aborting a merge run.
pub trait SegmentAnalyzer: Send + Sync + Debug {
    /// Analyze a text segment in the given language
    ///
    /// # Arguments
    /// * `text` - The segment text to evaluate
    /// * `language` - ISO 639 language hint; unsupported codes fall back to English
    ///
    /// # Returns
    /// * `Result<SegmentVerdict, AnalyzerError>` - The verdict or an error
    fn analyze(&self, text: &str, language: &str) -> Result<SegmentVerdict, AnalyzerError>;
}

/// Whether a language code resolves to a native analyzer profile
pub fn is_supported_language(language: &str) -> bool {
    heuristic::LanguageProfile::lookup(language).is_some()
}

pub mod heuristic;
pub mod mock;
