use crate::config::StackshiftConfig;
use crate::output::{create_writer, OutputFormat};
use crate::pipeline::{analyze_project, TargetSpec};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub target: String,
    pub target_version: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub jobs: Option<usize>,
}

pub fn run(config: AnalyzeConfig) -> Result<()> {
    if !config.path.is_dir() {
        anyhow::bail!("{} is not a directory", config.path.display());
    }

    if let Some(jobs) = config.jobs {
        // only effective once per process; later calls keep the first pool
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    let project_config = StackshiftConfig::load(&config.path);
    let target = TargetSpec::new(&config.target).with_version(config.target_version.clone());

    let spinner = progress_spinner(config.format, config.output.is_some());
    let analysis = analyze_project(&config.path, &target, &project_config);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let writer: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };
    create_writer(writer, config.format).write_analysis(&analysis)?;

    Ok(())
}

/// Spinner on stderr while the scan runs; suppressed when the report goes
/// to stdout in a machine-readable format.
fn progress_spinner(format: OutputFormat, to_file: bool) -> Option<ProgressBar> {
    if format == OutputFormat::Json && !to_file {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Analyzing project...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}
