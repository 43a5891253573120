// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use app_controller::Controller;
use crate::app_config::Config;

mod app_config;
mod app_controller;
mod document;
mod document_processor;
mod errors;
mod providers;
mod template_store;
mod translation;

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
    /// Translate a document through the configured endpoint (default command)
    #[command(alias = "translate")]
    Translate(TranslateArgs),

    /// Generate shell completions for doctran
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input document file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Translation endpoint URL
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Maximum number of concurrent translation requests
    #[arg(short = 'n', long)]
    concurrent_requests: Option<usize>,

    /// Output directory for filled documents
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Extract placeholders without translation, writing the item record
    #[arg(short = 'x', long)]
    extract_only: bool,
}

/// doctran - document translation through numbered placeholders
///
/// Extracts translatable text from structured documents into numbered
/// placeholder slots, translates every slot through an external endpoint,
/// and refills the document with layout and formatting preserved.
#[derive(Parser, Debug)]
#[command(name = "doctran")]
#[command(version = "0.1.0")]
#[command(about = "Placeholder-based document translation tool")]
#[command(long_about = "doctran extracts text from structured documents and translates it through an external service.

EXAMPLES:
    doctran report.json                      # Translate using default config
    doctran -f report.json                   # Force overwrite existing output
    doctran -e http://host:5000/translate report.json
    doctran -n 8 report.json                 # Cap in-flight requests at 8
    doctran -x report.json                   # Extract placeholders only
    doctran --log-level debug documents/     # Process a whole directory
    doctran completions bash > doctran.bash  # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path; missing files fall back to
    built-in defaults.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input document file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Translation endpoint URL
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Maximum number of concurrent translation requests
    #[arg(short = 'n', long)]
    concurrent_requests: Option<usize>,

    /// Output directory for filled documents
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Extract placeholders without translation, writing the item record
    #[arg(short = 'x', long)]
    extract_only: bool,
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

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
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
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install the logger wide open; the effective level is governed by
    // log::set_max_level, updated after loading the config
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "doctran", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let translate_args = TranslateArgs {
                input_path,
                force_overwrite: cli.force_overwrite,
                endpoint: cli.endpoint,
                concurrent_requests: cli.concurrent_requests,
                output_dir: cli.output_dir,
                config_path: cli.config_path,
                log_level: cli.log_level,
                extract_only: cli.extract_only,
            };
            run_translate(translate_args).await
        }
    }
}

async fn run_translate(args: TranslateArgs) -> Result<()> {
    // Load the config file if present; fall back to built-in defaults
    let mut config = if std::path::Path::new(&args.config_path).exists() {
        Config::from_file(&args.config_path)?
    } else {
        Config::default()
    };

    // Apply CLI overrides on top of the file config
    if let Some(endpoint) = args.endpoint {
        config.translation.endpoint = endpoint;
    }
    if let Some(concurrent_requests) = args.concurrent_requests {
        config.translation.concurrent_requests = concurrent_requests;
    }
    if let Some(output_dir) = args.output_dir {
        config.storage.product_dir = output_dir;
    }
    if let Some(log_level) = args.log_level {
        config.log_level = log_level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config.clone())?;

    if args.extract_only {
        let record = controller.extract_to_record(&args.input_path)?;
        let record_filename = format!(
            "{}.record.json",
            args.input_path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "document".to_string())
        );
        let record_path = config.storage.product_dir.join(record_filename);
        if let Some(parent) = record_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&record_path, serde_json::to_string_pretty(&record)?)?;
        info!(
            "Extracted {} item(s); record written to {:?}",
            record.items.len(),
            record_path
        );
        return Ok(());
    }

    if args.input_path.is_dir() {
        controller.run_folder(args.input_path, args.force_overwrite).await
    } else {
        controller.run(args.input_path, args.force_overwrite).await
    }
}
