/*!
 * Tests for file utility functions
 */

use std::fs;
use std::path::Path;
use anyhow::Result;
use submerge::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "test_file_exists.tmp",
        "test content",
    )?;

    assert!(FileManager::file_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that dir_exists returns true for existing directories
#[test]
fn test_dir_exists_withExistingDir_shouldReturnTrue() {
    assert!(FileManager::dir_exists("."));
}

/// Test that dir_exists returns false for non-existent directories
#[test]
fn test_dir_exists_withNonExistentDir_shouldReturnFalse() {
    assert!(!FileManager::dir_exists("./non_existent_directory_12345"));
}

/// Test SRT extension detection
#[test]
fn test_is_srt_file_withVariousExtensions_shouldMatchCaseInsensitively() {
    assert!(FileManager::is_srt_file("episode.srt"));
    assert!(FileManager::is_srt_file("episode.SRT"));
    assert!(FileManager::is_srt_file("/path/to/episode.Srt"));

    assert!(!FileManager::is_srt_file("episode.txt"));
    assert!(!FileManager::is_srt_file("episode"));
    assert!(!FileManager::is_srt_file("srt"));
}

/// Test the merged output naming convention
#[test]
fn test_merged_output_path_withValidInputs_shouldCreateCorrectPath() {
    let input_file = Path::new("/tmp/input/episode.srt");
    let output_dir = Path::new("/tmp/output");

    let output_path = FileManager::merged_output_path(input_file, output_dir);

    assert_eq!(output_path, Path::new("/tmp/output/episode.merged.srt"));
}

/// Test that ensure_dir creates directories as needed
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_subdir = temp_dir.path().join("test_subdir");

    FileManager::ensure_dir(&test_subdir)?;

    assert!(test_subdir.exists());
    assert!(test_subdir.is_dir());

    Ok(())
}

/// Test that find_files discovers subtitle files recursively
#[test]
fn test_find_files_withNestedDirectories_shouldFindAllMatchingFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();
    common::create_test_file(&root, "a.srt", "x")?;
    common::create_test_file(&root, "b.SRT", "x")?;
    common::create_test_file(&root, "c.txt", "x")?;
    let nested = root.join("nested");
    FileManager::ensure_dir(&nested)?;
    common::create_test_file(&nested, "d.srt", "x")?;

    let files = FileManager::find_files(&root, "srt")?;

    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|f| {
        f.extension()
            .map(|e| e.to_string_lossy().eq_ignore_ascii_case("srt"))
            .unwrap_or(false)
    }));

    Ok(())
}

/// Test that read_to_string returns file content correctly
#[test]
fn test_read_to_string_withValidFile_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = "Hello, World!";
    let test_file = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "test_read_file.tmp",
        content,
    )?;

    let read_content = FileManager::read_to_string(&test_file)?;
    assert_eq!(read_content, content);

    Ok(())
}

/// Test that write_to_file creates the file and any missing parent directories
#[test]
fn test_write_to_file_withMissingParent_shouldCreateDirectories() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("deep").join("nested").join("out.srt");
    let content = "Test write content";

    FileManager::write_to_file(&target, content)?;

    assert!(target.exists());
    assert_eq!(fs::read_to_string(&target)?, content);

    Ok(())
}

/// Test that append_to_log_file accumulates timestamped lines
#[test]
fn test_append_to_log_file_withTwoWrites_shouldAccumulateLines() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let log_path = temp_dir.path().join("run.log");

    FileManager::append_to_log_file(&log_path, "first entry")?;
    FileManager::append_to_log_file(&log_path, "second entry")?;

    let content = fs::read_to_string(&log_path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with('['));
    assert!(lines[0].ends_with("first entry"));
    assert!(lines[1].ends_with("second entry"));

    Ok(())
}
