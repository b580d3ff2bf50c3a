use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// Analyzer language hints arrive as ISO 639-1 (2-letter) or ISO 639-2
/// (3-letter) codes in either the /T or /B variant. These helpers resolve
/// a hint to the canonical code the analyzer profiles are keyed on.
/// ISO 639-2/B codes that differ from their ISO 639-2/T counterpart
fn part2b_to_part2t(code: &str) -> Option<&'static str> {
    let part2t = match code {
        "fre" => "fra", // French
        "ger" => "deu", // German
        "dut" => "nld", // Dutch
        "gre" => "ell", // Greek
        "chi" => "zho", // Chinese
        "cze" => "ces", // Czech
        "ice" => "isl", // Icelandic
        "alb" => "sqi", // Albanian
        "arm" => "hye", // Armenian
        "baq" => "eus", // Basque
        "bur" => "mya", // Burmese
        "per" => "fas", // Persian
        "geo" => "kat", // Georgian
        "may" => "msa", // Malay
        "mac" => "mkd", // Macedonian
        "rum" => "ron", // Romanian
        "slo" => "slk", // Slovak
        "wel" => "cym", // Welsh
        _ => return None,
    };
    Some(part2t)
}

/// Parse a language code in any accepted form
fn parse_language(code: &str) -> Option<Language> {
    let normalized = code.trim().to_lowercase();

    match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => {
            let part2t = part2b_to_part2t(&normalized).unwrap_or(&normalized);
            Language::from_639_3(part2t)
        }
        _ => None,
    }
}

/// Normalize a language code to ISO 639-1 (2-letter) format if possible
/// Falls back to ISO 639-2/T if no ISO 639-1 code exists
pub fn normalize_to_part1_or_part2t(code: &str) -> Result<String> {
    let lang = parse_language(code)
        .ok_or_else(|| anyhow!("Cannot normalize invalid language code: {}", code))?;

    match lang.to_639_1() {
        Some(part1) => Ok(part1.to_string()),
        None => Ok(lang.to_639_3().to_string()),
    }
}

/// Get the language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let lang = parse_language(code)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", code))?;

    Ok(lang.to_name().to_string())
}
