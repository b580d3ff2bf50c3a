use anyhow::{Result, Context};
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle, MultiProgress};
use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::pipeline::{MergeOutcome, MergePipeline, MergeReport};

// @module: Application controller for caption merging

// @enum: Per-file outcome in folder mode
enum FileStatus {
    Merged(MergeReport),
    Skipped,
}

/// Main application controller for subtitle merging
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Merge pipeline shared across files
    pipeline: MergePipeline,

    // @field: Optional lower time-range bound applied before merging
    window_start: Option<String>,

    // @field: Optional upper time-range bound applied before merging
    window_end: Option<String>,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let pipeline = MergePipeline::new(config.merge.clone());

        Ok(Self {
            config,
            pipeline,
            window_start: None,
            window_end: None,
        })
    }

    /// Restrict merging to captions starting inside a time window.
    pub fn with_time_window(mut self, start: Option<String>, end: Option<String>) -> Self {
        self.window_start = start;
        self.window_end = end;
        self
    }

    /// Run the merge workflow for a single subtitle file
    pub async fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        // Check if the input file exists
        if !input_file.exists() {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        if !FileManager::is_srt_file(&input_file) {
            return Err(anyhow::anyhow!("Input file is not an SRT file: {:?}", input_file));
        }

        // Ensure the output directory exists
        FileManager::ensure_dir(&output_dir)?;

        // Check if merged output already exists
        let output_path = FileManager::merged_output_path(&input_file, &output_dir);
        if output_path.exists() && !force_overwrite {
            warn!("Skipping file, merged output already exists (use -f to force overwrite)");
            return Ok(());
        }

        let outcome = self.merge_file(&input_file).await?;
        FileManager::write_to_file(&output_path, &outcome.output)?;

        info!("Success: {}", output_path.display());
        info!("{}", outcome.report.summary());

        Ok(())
    }

    /// Run the workflow in folder mode, processing all subtitle files in a directory
    /// Files that already have merged output will be skipped
    pub async fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        // Check if the input directory exists
        if !input_dir.exists() {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        // Find all subtitle files in the directory (recursive), leaving out
        // output from earlier runs
        let subtitle_files: Vec<PathBuf> = FileManager::find_files(&input_dir, "srt")?
            .into_iter()
            .filter(|path| !path.to_string_lossy().ends_with(".merged.srt"))
            .collect();

        // If no subtitle files found, return error
        if subtitle_files.is_empty() {
            return Err(anyhow::anyhow!("No subtitle files found in directory: {:?}", input_dir));
        }

        info!(
            "Merging {} subtitle files, {} in parallel",
            subtitle_files.len(),
            self.config.concurrent_files
        );

        // Create a progress bar for folder processing
        let multi_progress = MultiProgress::new();
        let folder_pb = multi_progress.add(ProgressBar::new(subtitle_files.len() as u64));
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));
        folder_pb.set_message("Merging files");

        let input_dir_ref = &input_dir;
        let folder_pb_ref = &folder_pb;

        // Process files concurrently; a failing file never aborts the run
        let results = stream::iter(subtitle_files.iter())
            .map(|subtitle_file| async move {
                let file_name = subtitle_file
                    .file_name()
                    .map(|f| f.to_string_lossy().to_string())
                    .unwrap_or_else(|| "unknown".to_string());

                folder_pb_ref.set_message(format!("Merging: {}", file_name));

                // Output lands next to the input file
                let output_dir = match subtitle_file.parent() {
                    Some(parent) => parent.to_path_buf(),
                    None => input_dir_ref.clone(),
                };

                // Check if merged output already exists
                let output_path = FileManager::merged_output_path(subtitle_file, &output_dir);
                if output_path.exists() && !force_overwrite {
                    debug!(
                        "Skipping {}, merged output already exists (use -f to force overwrite)",
                        file_name
                    );
                    folder_pb_ref.inc(1);
                    return (file_name, Ok(FileStatus::Skipped));
                }

                let result = match self.merge_file(subtitle_file).await {
                    Ok(outcome) => FileManager::write_to_file(&output_path, &outcome.output)
                        .map(|_| FileStatus::Merged(outcome.report)),
                    Err(e) => Err(e),
                };

                folder_pb_ref.inc(1);
                (file_name, result)
            })
            .buffer_unordered(self.config.concurrent_files)
            .collect::<Vec<_>>()
            .await;

        // Track success and failure counts
        let mut success_count = 0;
        let mut skip_count = 0;
        let mut error_count = 0;
        let mut captions_removed = 0;

        for (file_name, result) in results {
            match result {
                Ok(FileStatus::Merged(report)) => {
                    success_count += 1;
                    captions_removed += report.captions_removed();
                    info!("Merged {}: {}", file_name, report.summary());
                }
                Ok(FileStatus::Skipped) => {
                    skip_count += 1;
                }
                Err(e) => {
                    error!("Error processing file {}: {}", file_name, e);
                    error_count += 1;
                }
            }
        }

        // Finish the folder progress bar
        folder_pb.finish_with_message("Folder processing complete");

        // Calculate and display the total elapsed time
        let duration = start_time.elapsed();

        // Give summary results - important for batch operations
        let summary_message = format!(
            "Folder processing completed: {} merged, {} skipped, {} errors, {} captions removed",
            success_count, skip_count, error_count, captions_removed
        );
        info!("{}", summary_message);

        // Write summary to the report log
        let log_file_path = input_dir.join("submerge.report.log");
        if let Err(e) = FileManager::append_to_log_file(
            &log_file_path,
            &format!("{} - Duration: {}", summary_message, Self::format_duration(duration)),
        ) {
            warn!("Failed to write folder report: {}", e);
        } else {
            info!("Folder report written to {}", log_file_path.display());
        }

        Ok(())
    }

    /// Merge one subtitle file, running the pipeline off the async runtime
    async fn merge_file(&self, input_file: &Path) -> Result<MergeOutcome> {
        let content = FileManager::read_to_string(input_file)?;
        let pipeline = self.pipeline.clone();
        let window_start = self.window_start.clone();
        let window_end = self.window_end.clone();

        let outcome = tokio::task::spawn_blocking(move || {
            pipeline.process(&content, window_start.as_deref(), window_end.as_deref())
        })
        .await
        .context("Merge task panicked")??;

        Ok(outcome)
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
