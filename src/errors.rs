/*!
 * Error types for the submerge application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when converting between timestamp notation and milliseconds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimecodeError {
    /// Error when a timestamp does not match `HH:MM:SS,mmm` or carries
    /// out-of-range time components
    #[error("Invalid timestamp format: {0}")]
    InvalidFormat(String),

    /// Error when asked to render a negative duration as a timestamp
    #[error("Cannot format negative milliseconds: {0}")]
    NegativeMillis(i64),
}

/// Errors that can occur while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Failed to read configuration: {0}")]
    ReadFailed(String),

    /// Error parsing the configuration payload
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Error when a configuration value is outside its usable range
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Errors raised by a segment analyzer implementation
///
/// These never abort a merge run; the caller downgrades them to "no verdict".
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Error while evaluating a text segment
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    /// Error when the analyzer is asked for a language it cannot serve
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from timestamp handling
    #[error("Timecode error: {0}")]
    Timecode(#[from] TimecodeError),

    /// Error from configuration handling
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from segment analysis
    #[error("Analyzer error: {0}")]
    Analyzer(#[from] AnalyzerError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
