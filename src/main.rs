// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::too_many_arguments)]

use anyhow::{Result, anyhow, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod pipeline;
mod subtitle_processor;
mod timecode;
mod analysis;
mod file_utils;
mod app_controller;
mod language_utils;
mod errors;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge and clean up subtitle captions (default command)
    #[command(alias = "merge")]
    Merge(MergeArgs),

    /// Generate shell completions for submerge
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct MergeArgs {
    /// Input subtitle file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Output directory for merged files (defaults to the input location)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Enable the duplicate caption merge for this run
    #[arg(long)]
    duplicate_merge: bool,

    /// Enable the end/start boundary merge for this run
    #[arg(long)]
    end_start_merge: bool,

    /// Enable the sliding-window candidate merge for this run
    #[arg(long)]
    basic_merge: bool,

    /// Score window candidates with the segment analyzer
    #[arg(long)]
    analyzer: bool,

    /// Language hint for the segment analyzer (e.g., 'en', 'ja')
    #[arg(long)]
    analyzer_language: Option<String>,

    /// Only keep captions starting at or after this timestamp (HH:MM:SS,mmm)
    #[arg(long)]
    start_time: Option<String>,

    /// Only keep captions starting at or before this timestamp (HH:MM:SS,mmm)
    #[arg(long)]
    end_time: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Submerge - Subtitle Merge and Cleanup
///
/// A subtitle cleanup tool that merges fragmented, duplicated and overlapping
/// captions in SRT files produced by speech-to-text systems.
#[derive(Parser, Debug)]
#[command(name = "submerge")]
#[command(author = "Submerge Team")]
#[command(version = "1.0.0")]
#[command(about = "SRT subtitle merge and cleanup tool")]
#[command(long_about = "Submerge cleans up SRT subtitles by merging fragmented, duplicated and overlapping captions.

EXAMPLES:
    submerge captions.srt                        # Merge using default config
    submerge -f captions.srt                     # Force overwrite existing files
    submerge --duplicate-merge --basic-merge captions.srt
    submerge --analyzer --analyzer-language ja episode.srt
    submerge --start-time 00:05:00,000 --end-time 00:40:00,000 captions.srt
    submerge --log-level debug /captions/        # Process entire directory with debug logging
    submerge completions bash > submerge.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

MERGE STAGES:
    duplicate  - collapse repeated identical captions
    end-start  - stitch captions sharing a word across a caption boundary
    window     - sliding-window candidate merge scored by sentence heuristics")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input subtitle file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Output directory for merged files (defaults to the input location)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Enable the duplicate caption merge for this run
    #[arg(long)]
    duplicate_merge: bool,

    /// Enable the end/start boundary merge for this run
    #[arg(long)]
    end_start_merge: bool,

    /// Enable the sliding-window candidate merge for this run
    #[arg(long)]
    basic_merge: bool,

    /// Score window candidates with the segment analyzer
    #[arg(long)]
    analyzer: bool,

    /// Language hint for the segment analyzer (e.g., 'en', 'ja')
    #[arg(long)]
    analyzer_language: Option<String>,

    /// Only keep captions starting at or after this timestamp (HH:MM:SS,mmm)
    #[arg(long)]
    start_time: Option<String>,

    /// Only keep captions starting at or before this timestamp (HH:MM:SS,mmm)
    #[arg(long)]
    end_time: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Display tag for log level
    fn get_tag_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "ERROR",
            Level::Warn => "WARN ",
            Level::Info => "INFO ",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");

            let mut stderr = std::io::stderr();
            let _ = match record.level() {
                Level::Error => {
                    let tag = Self::get_tag_for_level(record.level());
                    writeln!(
                        stderr,
                        "\x1B[1;31m{} {} {}\x1B[0m",
                        now, tag, record.args()
                    )
                },
                Level::Warn => {
                    let tag = Self::get_tag_for_level(record.level());
                    writeln!(
                        stderr,
                        "\x1B[1;33m{} {} {}\x1B[0m",
                        now, tag, record.args()
                    )
                },
                Level::Info => {
                    let tag = Self::get_tag_for_level(record.level());
                    writeln!(
                        stderr,
                        "\x1B[1;32m{} {} {}\x1B[0m",
                        now, tag, record.args()
                    )
                },
                Level::Debug => {
                    let tag = Self::get_tag_for_level(record.level());
                    writeln!(
                        stderr,
                        "\x1B[1;36m{} {} {}\x1B[0m",
                        now, tag, record.args()
                    )
                },
                Level::Trace => {
                    let tag = Self::get_tag_for_level(record.level());
                    writeln!(
                        stderr,
                        "\x1B[1;35m{} {} {}\x1B[0m",
                        now, tag, record.args()
                    )
                },
            };
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "submerge", &mut std::io::stdout());
            return Ok(());
        }
        Some(Commands::Merge(args)) => {
            // Use the explicit merge subcommand args
            return run_merge(args).await;
        }
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            let merge_args = MergeArgs {
                input_path,
                force_overwrite: cli.force_overwrite,
                output_dir: cli.output_dir,
                duplicate_merge: cli.duplicate_merge,
                end_start_merge: cli.end_start_merge,
                basic_merge: cli.basic_merge,
                analyzer: cli.analyzer,
                analyzer_language: cli.analyzer_language,
                start_time: cli.start_time,
                end_time: cli.end_time,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            return run_merge(merge_args).await;
        }
    }
}

async fn run_merge(options: MergeArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        let log_level = match config_log_level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        };
        log::set_max_level(log_level);
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if options.duplicate_merge {
        config.merge.enable_duplicate_merge = true;
    }

    if options.end_start_merge {
        config.merge.enable_end_start_merge = true;
    }

    if options.basic_merge {
        config.merge.enable_basic_merge = true;
    }

    if options.analyzer {
        config.merge.enable_segment_analyzer = true;
    }

    if let Some(language) = &options.analyzer_language {
        config.merge.segment_analyzer_language = language.clone();
    }

    // Update log level in config if specified via command line
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        let log_level = match config.log_level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        };

        // Just update the max level without reinitializing the logger
        log::set_max_level(log_level);
    }

    // Create controller
    let controller = Controller::with_config(config)?
        .with_time_window(options.start_time.clone(), options.end_time.clone());

    // Run the controller with the input file(s) and output directory
    if options.input_path.is_file() {
        // Process a single file
        let output_dir = options.output_dir.clone().unwrap_or_else(|| {
            options.input_path.parent().unwrap_or(Path::new(".")).to_path_buf()
        });

        controller.run(
            options.input_path.clone(),
            output_dir,
            options.force_overwrite
        ).await?;
    } else if options.input_path.is_dir() {
        // Process a directory
        controller.run_folder(
            options.input_path.clone(),
            options.force_overwrite
        ).await?;
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }

    Ok(())
}
