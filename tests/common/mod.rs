/*!
 * Common test utilities for the submerge test suite
 */

use std::path::PathBuf;
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Renders numbered blocks as SRT file content
pub fn srt_text(blocks: &[(usize, &str, &str, &str)]) -> String {
    let mut content = String::new();
    for (seq, start, end, text) in blocks {
        content.push_str(&format!("{}\n{} --> {}\n{}\n\n", seq, start, end, text));
    }
    content
}

/// Creates a sample subtitle file for testing
pub fn create_test_subtitle(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = r#"1
00:00:01,000 --> 00:00:04,000
This is a test subtitle.

2
00:00:05,000 --> 00:00:09,000
It contains multiple entries.

3
00:00:10,000 --> 00:00:14,000
For testing purposes.
"#;
    create_test_file(dir, filename, content)
}

/// Creates a subtitle file whose first two captions repeat the same text
pub fn create_duplicate_subtitle(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = srt_text(&[
        (1, "00:00:01,000", "00:00:02,000", "Hello there"),
        (2, "00:00:02,100", "00:00:03,000", "Hello there"),
        (3, "00:00:04,000", "00:00:05,000", "General Kenobi."),
    ]);
    create_test_file(dir, filename, &content)
}
