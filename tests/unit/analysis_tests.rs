/*!
 * Tests for segment analysis through the public analyzer surface
 */

use std::sync::Arc;

use submerge::analysis::heuristic::HeuristicAnalyzer;
use submerge::analysis::mock::MockAnalyzer;
use submerge::analysis::{is_supported_language, SegmentAnalyzer, SegmentVerdict};

/// Test native profile detection for analyzer language hints
#[test]
fn test_is_supported_language_withVariousCodes_shouldDetectNativeProfiles() {
    assert!(is_supported_language("en"));
    assert!(is_supported_language("eng"));
    assert!(is_supported_language("ja"));
    assert!(is_supported_language("jpn"));
    assert!(is_supported_language(" EN "));

    assert!(!is_supported_language("fr"));
    assert!(!is_supported_language("de"));
    assert!(!is_supported_language("xx"));
    assert!(!is_supported_language(""));
}

/// Test heuristic verdicts through a trait object
#[test]
fn test_heuristic_analyzer_throughTraitObject_shouldScoreSentences() {
    let analyzer: Box<dyn SegmentAnalyzer> = Box::new(HeuristicAnalyzer::new());

    let complete = analyzer
        .analyze("We finished the whole project.", "en")
        .unwrap();
    assert!(complete.is_complete_sentence);
    assert!(complete.completeness_score >= 0.7);
    assert!(complete.ok_as_segment);

    let dangling = analyzer.analyze("She handed it to", "en").unwrap();
    assert!(!dangling.is_complete_sentence);
    assert!(dangling.break_naturalness < 0.5);
    assert!(!dangling.ok_as_segment);
}

/// Test that verdict scores stay inside the unit interval
#[test]
fn test_heuristic_analyzer_withVariedInputs_shouldKeepScoresInRange() {
    let analyzer = HeuristicAnalyzer::new();
    let samples = [
        "Okay",
        "and then we",
        "A complete thought ends here.",
        "\"Unbalanced quote",
        "これは",
        "今日は学校に行きました。",
    ];

    for sample in samples {
        for language in ["en", "ja", "ko"] {
            let verdict = analyzer.analyze(sample, language).unwrap();
            assert!((0.0..=1.0).contains(&verdict.completeness_score));
            assert!((0.0..=1.0).contains(&verdict.break_naturalness));
        }
    }
}

/// Test the all-zero verdict for whitespace-only segments
#[test]
fn test_heuristic_analyzer_withBlankSegment_shouldReturnEmptyVerdict() {
    let analyzer = HeuristicAnalyzer::new();

    assert_eq!(analyzer.analyze("   ", "en").unwrap(), SegmentVerdict::empty());
    assert_eq!(analyzer.analyze("", "ja").unwrap(), SegmentVerdict::empty());
}

/// Test that unsupported language hints fall back to the English profile
#[test]
fn test_heuristic_analyzer_withUnsupportedLanguage_shouldUseEnglishProfile() {
    let analyzer = HeuristicAnalyzer::new();

    let fallback = analyzer.analyze("I went to", "fr").unwrap();
    let english = analyzer.analyze("I went to", "en").unwrap();
    assert_eq!(fallback, english);
}

/// Test the mock analyzer behind a shared trait object
#[test]
fn test_mock_analyzer_behindArc_shouldObserveEveryCall() {
    let mock = MockAnalyzer::neutral();
    let observer = mock.clone();
    let analyzer: Arc<dyn SegmentAnalyzer> = Arc::new(mock);

    analyzer.analyze("first segment", "en").unwrap();
    analyzer.analyze("second segment", "en").unwrap();

    assert_eq!(observer.call_count(), 2);
}

/// Test that the failing mock errors without panicking
#[test]
fn test_mock_analyzer_withFailingBehavior_shouldReturnError() {
    let mock = MockAnalyzer::failing();

    let result = mock.analyze("any segment", "en");
    assert!(result.is_err());
    assert_eq!(mock.call_count(), 1);
}
