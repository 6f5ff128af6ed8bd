//! Split command implementation

use anyhow::{Context, Result};
use clap::Args;
use pretok_core::{Config, Mode, Segmenter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::{CliConfig, PerformanceConfig, SegmentationConfig};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use crate::CliError;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE", conflicts_with = "split_files")]
    pub output: Option<PathBuf>,

    /// Write each input to `<input>.splitted` next to it
    #[arg(long)]
    pub split_files: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Segmentation mode (default: improved)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Marker appended to every split-off morpheme
    #[arg(short, long, value_name = "SEP", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Ignore single-character prefixes
    #[arg(long)]
    pub no_unichar: bool,

    /// Lexicon file (default: bundled lexicon)
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Exception word list (default: bundled list)
    #[arg(long, value_name = "FILE")]
    pub exceptions: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Force parallel processing even for small files
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel processing
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One segmented line per input line
    Text,
    /// JSON array of `{file, line, text}` records
    Json,
}

/// Segmentation modes
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ModeArg {
    /// Split whenever a prefix matches
    Classic,
    /// Keep exception words and short stems intact
    Improved,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Classic => Mode::Classic,
            ModeArg::Improved => Mode::Improved,
        }
    }
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting segmentation");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let segmenter = self.build_segmenter(&file_config.segmentation)?;
        let files = resolve_patterns(&self.input)?;
        let pool = self.build_pool(&file_config.performance)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut shared = if self.split_files {
            None
        } else {
            Some(self.create_formatter(self.output.as_deref())?)
        };

        for path in &files {
            let text = FileReader::read_text(path)?;
            let lines: Vec<&str> = text.lines().collect();

            let segmented = if self.should_parallelize(lines.len(), &file_config.performance) {
                log::debug!("Segmenting {} in parallel", path.display());
                pool.install(|| segmenter.par_segment_lines(&lines))
            } else {
                segmenter.segment_lines(&lines).collect()
            };

            match shared.as_mut() {
                Some(formatter) => write_lines(formatter.as_mut(), path, &segmented)?,
                None => {
                    let out_path = FileReader::splitted_path(path);
                    let mut formatter = self.create_formatter(Some(&out_path))?;
                    write_lines(formatter.as_mut(), path, &segmented)?;
                    formatter.finish()?;
                    log::info!("Wrote {}", out_path.display());
                }
            }

            progress.file_completed(&path.display().to_string(), lines.len());
        }

        if let Some(mut formatter) = shared {
            formatter.finish()?;
        }
        progress.finish();

        log::info!("Segmented {} file(s)", files.len());
        Ok(())
    }

    /// Merge command-line flags over the configuration file
    fn build_segmenter(&self, file: &SegmentationConfig) -> Result<Segmenter> {
        let mode = self.mode.map(Mode::from).unwrap_or(file.mode);
        let separator = self.separator.as_deref().unwrap_or(&file.separator);

        let mut builder = Config::builder()
            .mode(mode)
            .separator(separator)
            .use_unichar(file.use_unichar && !self.no_unichar);

        if let Some(path) = self.lexicon.as_ref().or(file.lexicon.as_ref()) {
            builder = builder.lexicon_path(path);
        }
        if let Some(path) = self.exceptions.as_ref().or(file.exceptions.as_ref()) {
            builder = builder.exceptions_path(path);
        }

        let config = builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        let segmenter = Segmenter::with_config(config).map_err(|e| match e {
            pretok_core::Error::InvalidConfiguration(_) => {
                anyhow::Error::new(CliError::ConfigError(e.to_string()))
            }
            other => anyhow::Error::new(other).context("Failed to load segmentation rules"),
        })?;

        log::info!(
            "Mode: {}, rules: {}, exceptions: {}",
            segmenter.mode(),
            segmenter.rules().len(),
            segmenter.exceptions().len()
        );
        Ok(segmenter)
    }

    fn build_pool(&self, performance: &PerformanceConfig) -> Result<rayon::ThreadPool> {
        if self.threads == Some(0) {
            return Err(CliError::ConfigError("thread count must be greater than 0".into()).into());
        }

        let threads = self.threads.unwrap_or(performance.worker_threads);
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")
    }

    fn should_parallelize(&self, lines: usize, performance: &PerformanceConfig) -> bool {
        self.parallel
            || (performance.parallel_threshold_lines > 0
                && lines >= performance.parallel_threshold_lines)
    }

    fn create_formatter(&self, path: Option<&Path>) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send> = match path {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        })
    }
}

fn write_lines(formatter: &mut dyn OutputFormatter, source: &Path, lines: &[String]) -> Result<()> {
    for (index, line) in lines.iter().enumerate() {
        formatter.format_line(source, index + 1, line)?;
    }
    Ok(())
}
