use std::fmt;

use log::warn;

use crate::errors::TimecodeError;
use crate::timecode;

// @module: SRT parsing, serialization and the caption entry model

// @struct: Single subtitle entry
//
// Timestamps stay textual. Milliseconds are derived on demand so that a
// corrupt timestamp surfaces in whichever merge stage first needs it, not
// at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    // @field: Sequence number
    pub seq_num: usize,

    // @field: Start timestamp as written in the source (HH:MM:SS,mmm)
    pub start_time: String,

    // @field: End timestamp as written in the source
    pub end_time: String,

    // @field: Caption text, possibly multi-line
    pub text: String,
}

impl SubtitleEntry {
    /// Creates a new subtitle entry
    pub fn new(seq_num: usize, start_time: &str, end_time: &str, text: &str) -> Self {
        SubtitleEntry {
            seq_num,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            text: text.to_string(),
        }
    }

    /// Start timestamp in milliseconds
    pub fn start_ms(&self) -> Result<i64, TimecodeError> {
        timecode::time_to_ms(&self.start_time)
    }

    /// End timestamp in milliseconds
    pub fn end_ms(&self) -> Result<i64, TimecodeError> {
        timecode::time_to_ms(&self.end_time)
    }

    /// Signed duration in milliseconds; inverted ranges come out negative
    pub fn duration_ms(&self) -> Result<i64, TimecodeError> {
        Ok(self.end_ms()? - self.start_ms()?)
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(f, "{} --> {}", self.start_time, self.end_time)?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// Parse SRT text into subtitle entries.
///
/// The parser is deliberately lenient and never fails. Blocks are separated
/// by blank lines. Within a block the first bare-integer line is taken as
/// the sequence number, the first line containing `-->` as the time range
/// (split once, both halves trimmed, not validated), and every remaining
/// line accumulates as caption text. Blocks without text are dropped
/// silently; blocks with text but no time range are dropped with a warning.
pub fn parse_srt_string(content: &str) -> Vec<SubtitleEntry> {
    let mut entries: Vec<SubtitleEntry> = Vec::new();

    let mut seq_num: Option<usize> = None;
    let mut times: Option<(String, String)> = None;
    let mut text = String::new();

    let mut push_block =
        |seq_num: Option<usize>, times: Option<(String, String)>, text: &str| {
            if text.trim().is_empty() {
                return;
            }
            match times {
                Some((start_time, end_time)) => {
                    let fallback = entries.len() + 1;
                    entries.push(SubtitleEntry {
                        seq_num: seq_num.unwrap_or(fallback),
                        start_time,
                        end_time,
                        text: text.to_string(),
                    });
                }
                None => {
                    warn!("Dropping caption block without a time range: {:?}", text);
                }
            }
        };

    for raw_line in content.lines() {
        let line = raw_line.trim();

        if line.is_empty() {
            push_block(seq_num.take(), times.take(), &text);
            text.clear();
            continue;
        }

        if seq_num.is_none() && line.bytes().all(|b| b.is_ascii_digit()) {
            seq_num = line.parse::<usize>().ok();
            continue;
        }

        if times.is_none() && line.contains("-->") {
            if let Some((start, end)) = line.split_once("-->") {
                times = Some((start.trim().to_string(), end.trim().to_string()));
            }
            continue;
        }

        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(line);
    }

    push_block(seq_num, times, &text);

    entries
}

/// Serialize entries back to SRT text.
///
/// Each entry renders as index line, time-range line, text and a blank
/// separator; the result carries a single trailing newline.
pub fn to_srt_string(entries: &[SubtitleEntry]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(entries.len() * 4);
    for entry in entries {
        lines.push(entry.seq_num.to_string());
        lines.push(format!("{} --> {}", entry.start_time, entry.end_time));
        lines.push(entry.text.clone());
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Renumber entries sequentially from 1.
///
/// The only in-place mutation in the pipeline; applying it twice is a no-op.
pub fn reindex_entries(entries: &mut [SubtitleEntry]) {
    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.seq_num = idx + 1;
    }
}
