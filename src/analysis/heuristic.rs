/*!
 * Lexicon and punctuation based segment analyzer.
 *
 * Scores caption fragments without a parser: sentence-end punctuation,
 * dangling function words, fragment length and unbalanced quote/bracket
 * pairs. English and Japanese carry native profiles; any other language
 * hint falls back to the English profile.
 */

use log::warn;

use crate::analysis::{SegmentAnalyzer, SegmentVerdict};
use crate::errors::AnalyzerError;
use crate::language_utils;

/// Per-language lexicon and thresholds.
///
/// Japanese counts fragment length in characters because the text carries
/// no word separators; English counts whitespace words. End/start word
/// checks are token equality for English and suffix/prefix matches for
/// Japanese.
#[derive(Debug)]
pub struct LanguageProfile {
    /// ISO 639-1 code the profile is keyed by
    pub code: &'static str,
    /// Characters that close a sentence
    sentence_end_punct: &'static [char],
    /// Function words a caption should not end on
    bad_end_words: &'static [&'static str],
    /// Conjunctions a caption should not start on
    bad_start_words: &'static [&'static str],
    /// Short utterances that are fine on their own
    short_ok_utterances: &'static [&'static str],
    /// Whether comparisons keep case
    case_sensitive: bool,
    /// Whether length is measured in characters instead of words
    counts_chars: bool,
    /// Length from which a fragment counts as a full clause
    body_len: usize,
    /// Length at or below which a fragment counts as too short
    short_len: usize,
}

static EN_PROFILE: LanguageProfile = LanguageProfile {
    code: "en",
    sentence_end_punct: &['.', '!', '?'],
    bad_end_words: &["to", "of", "in", "at", "for", "on", "with"],
    bad_start_words: &[
        "and", "but", "or", "nor", "so", "yet", "because", "since", "although", "though", "if",
        "while", "when", "unless",
    ],
    short_ok_utterances: &["yes", "no", "okay", "ok", "thanks", "thank you", "sure"],
    case_sensitive: false,
    counts_chars: false,
    body_len: 4,
    short_len: 2,
};

static JA_PROFILE: LanguageProfile = LanguageProfile {
    code: "ja",
    sentence_end_punct: &['。', '！', '？', '!', '?'],
    bad_end_words: &[
        "は", "が", "を", "に", "へ", "で", "と", "から", "まで", "より", "や", "の", "ね",
        "よ", "か", "も", "って",
    ],
    bad_start_words: &["そして", "しかし", "でも", "だから", "それで", "また"],
    short_ok_utterances: &[
        "はい",
        "いいえ",
        "了解",
        "了解です",
        "ありがとう",
        "ありがとうございます",
        "どうも",
        "うん",
    ],
    case_sensitive: true,
    counts_chars: true,
    body_len: 8,
    short_len: 4,
};

static PROFILES: [&LanguageProfile; 2] = [&EN_PROFILE, &JA_PROFILE];

impl LanguageProfile {
    /// Resolve a language hint to a native profile, if one exists
    pub fn lookup(language: &str) -> Option<&'static LanguageProfile> {
        let code = language_utils::normalize_to_part1_or_part2t(language).ok()?;
        PROFILES.iter().copied().find(|p| p.code == code)
    }

    // English fallback keeps unsupported hints from failing a merge run
    fn resolve(language: &str) -> &'static LanguageProfile {
        if language.trim().is_empty() {
            return &EN_PROFILE;
        }
        match Self::lookup(language) {
            Some(profile) => profile,
            None => {
                let shown = language_utils::get_language_name(language)
                    .unwrap_or_else(|_| language.to_string());
                warn!(
                    "No analyzer profile for '{}', using English heuristics",
                    shown
                );
                &EN_PROFILE
            }
        }
    }

    fn fragment_len(&self, text: &str) -> usize {
        if self.counts_chars {
            text.chars().filter(|c| !c.is_whitespace()).count()
        } else {
            text.split_whitespace().count()
        }
    }

    fn ends_with_sentence_punct(&self, text: &str) -> bool {
        text.chars()
            .last()
            .is_some_and(|c| self.sentence_end_punct.contains(&c))
    }

    fn ends_with_bad_word(&self, text: &str) -> bool {
        if self.counts_chars {
            self.bad_end_words.iter().any(|w| text.ends_with(w))
        } else {
            match text.split_whitespace().last() {
                Some(last) => self.bad_end_words.contains(&last),
                None => false,
            }
        }
    }

    fn starts_with_bad_word(&self, text: &str) -> bool {
        if self.counts_chars {
            self.bad_start_words.iter().any(|w| text.starts_with(w))
        } else {
            match text.split_whitespace().next() {
                Some(first) => self.bad_start_words.contains(&first),
                None => false,
            }
        }
    }

    fn is_short_ok(&self, text: &str) -> bool {
        self.short_ok_utterances.contains(&text)
    }
}

/// Quote/bracket pairing check; an odd double-quote count or a mismatched
/// bracket marks the fragment unbalanced
fn has_unmatched_pairs(text: &str) -> bool {
    if text.matches('"').count() % 2 == 1 {
        return true;
    }

    let mut stack: Vec<char> = Vec::new();
    for ch in text.chars() {
        match ch {
            '(' | '[' | '{' => stack.push(ch),
            ')' | ']' | '}' => {
                let opener = match ch {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(opener) {
                    return true;
                }
            }
            _ => {}
        }
    }

    !stack.is_empty()
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Stateless analyzer backed by the static language profiles
#[derive(Debug, Default, Clone)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        HeuristicAnalyzer
    }
}

impl SegmentAnalyzer for HeuristicAnalyzer {
    fn analyze(&self, text: &str, language: &str) -> Result<SegmentVerdict, AnalyzerError> {
        let stripped = text.trim();
        if stripped.is_empty() {
            return Ok(SegmentVerdict::empty());
        }

        let profile = LanguageProfile::resolve(language);
        let normalized = if profile.case_sensitive {
            stripped.to_string()
        } else {
            stripped.to_lowercase()
        };

        let length = profile.fragment_len(&normalized);
        let ends_complete = profile.ends_with_sentence_punct(stripped);
        let bad_end = profile.ends_with_bad_word(&normalized);
        let bad_start = profile.starts_with_bad_word(&normalized);
        let short_ok = profile.is_short_ok(&normalized);
        let unmatched = has_unmatched_pairs(stripped);

        let mut score: f64 = 0.0;
        if ends_complete {
            score += 0.4;
        }
        if !bad_end {
            score += 0.2;
        }
        if length >= profile.body_len {
            score += 0.2;
        }
        if !unmatched {
            score += 0.2;
        }
        if short_ok {
            score = score.max(0.8);
        }
        let completeness_score = score.clamp(0.0, 1.0);
        let is_complete = completeness_score >= 0.7;

        let mut awkward: f64 = 0.4;
        if !is_complete {
            awkward += 0.1;
        }
        if bad_end {
            awkward += 0.3;
        }
        if bad_start {
            awkward += 0.2;
        }
        if length <= profile.short_len && !short_ok {
            awkward += 0.2;
        }
        if unmatched {
            awkward += 0.2;
        }
        let break_naturalness = 1.0 - awkward.clamp(0.0, 1.0);
        let ok_as_segment = break_naturalness >= 0.5;

        Ok(SegmentVerdict {
            is_complete_sentence: is_complete,
            completeness_score: round3(completeness_score),
            break_naturalness: round3(break_naturalness),
            ok_as_segment,
        })
    }
}
