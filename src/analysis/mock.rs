/*!
 * Mock analyzer implementations for testing.
 *
 * This module provides mock analyzers that simulate different behaviors:
 * - `MockAnalyzer::constant(verdict)` - Always returns the given verdict
 * - `MockAnalyzer::neutral()` - Returns a middle-of-the-road verdict
 * - `MockAnalyzer::failing()` - Always fails with an error
 */

// Allow dead code - mock analyzers are exercised from the test suite
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::analysis::{SegmentAnalyzer, SegmentVerdict};
use crate::errors::AnalyzerError;

/// Behavior mode for the mock analyzer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always returns the wrapped verdict
    Constant(SegmentVerdict),
    /// Always fails with an error
    Failing,
}

/// Mock analyzer for testing candidate scoring behavior
#[derive(Debug)]
pub struct MockAnalyzer {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of analyze calls observed
    call_count: Arc<AtomicUsize>,
    /// Custom verdict generator (optional, overrides the behavior verdict)
    custom_verdict: Option<fn(&str) -> SegmentVerdict>,
}

impl MockAnalyzer {
    /// Create a new mock analyzer with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            custom_verdict: None,
        }
    }

    /// Create a mock that always returns the given verdict
    pub fn constant(verdict: SegmentVerdict) -> Self {
        Self::new(MockBehavior::Constant(verdict))
    }

    /// Create a mock that returns a neutral verdict for every segment
    pub fn neutral() -> Self {
        Self::constant(SegmentVerdict {
            is_complete_sentence: false,
            completeness_score: 0.5,
            break_naturalness: 0.5,
            ok_as_segment: true,
        })
    }

    /// Create a failing mock analyzer that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Set a custom verdict generator keyed on the segment text
    pub fn with_custom_verdict(mut self, generator: fn(&str) -> SegmentVerdict) -> Self {
        self.custom_verdict = Some(generator);
        self
    }

    /// Number of analyze calls seen so far, shared across clones
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Clone for MockAnalyzer {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            call_count: Arc::clone(&self.call_count),
            custom_verdict: self.custom_verdict,
        }
    }
}

impl SegmentAnalyzer for MockAnalyzer {
    fn analyze(&self, text: &str, _language: &str) -> Result<SegmentVerdict, AnalyzerError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Constant(verdict) => {
                if let Some(generator) = self.custom_verdict {
                    Ok(generator(text))
                } else {
                    Ok(verdict)
                }
            }
            MockBehavior::Failing => Err(AnalyzerError::AnalysisFailed(
                "Simulated analyzer failure".to_string(),
            )),
        }
    }
}
