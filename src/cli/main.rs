//! drift - rank the columns of two CSV snapshots by distribution drift

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use data_drift_sdk::cli::commands::compare::{CompareArgs, DEFAULT_TABLE_TOP_N, handle_compare};
use data_drift_sdk::cli::commands::schema::handle_schema;
use data_drift_sdk::cli::output::OutputFormat;
use data_drift_sdk::export::DEFAULT_REPORT_TOP_N;

#[derive(Parser, Debug)]
#[command(name = "drift")]
#[command(
    version,
    about = "Detect distribution drift between a baseline and a current CSV snapshot",
    after_help = "\
Examples:
  drift compare baseline.csv current.csv                  Ranked drift table
  drift compare baseline.csv current.csv --format json    JSON for scripting
  drift compare baseline.csv current.csv --export-dir out Write drift_report.json and .md
  drift schema baseline.csv                               Show column classification"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two CSV files and rank features by drift
    Compare {
        /// Baseline (reference) CSV file
        baseline: PathBuf,

        /// Current CSV file
        current: PathBuf,

        /// Read at most this many data rows from each file
        #[arg(long)]
        max_rows: Option<usize>,

        /// TOML file with drift settings
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Number of ranked features to show
        #[arg(long, default_value_t = DEFAULT_TABLE_TOP_N)]
        top_n: usize,

        /// Only show features whose name contains this text (case-insensitive)
        #[arg(long)]
        filter: Option<String>,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Directory to write drift_report.json and drift_report.md into
        #[arg(long)]
        export_dir: Option<PathBuf>,

        /// Number of features included in exported reports
        #[arg(long, default_value_t = DEFAULT_REPORT_TOP_N)]
        report_top_n: usize,
    },

    /// Show how each column of a CSV file is classified
    Schema {
        /// CSV file to classify
        file: PathBuf,

        /// Read at most this many data rows
        #[arg(long)]
        max_rows: Option<usize>,

        /// TOML file with drift settings
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compare {
            baseline,
            current,
            max_rows,
            config,
            top_n,
            filter,
            format,
            export_dir,
            report_top_n,
        } => {
            let args = CompareArgs {
                baseline,
                current,
                max_rows,
                config,
                top_n,
                filter,
                format,
                export_dir,
                report_top_n,
            };
            handle_compare(&args)?;
        }
        Commands::Schema {
            file,
            max_rows,
            config,
            format,
        } => {
            handle_schema(&file, max_rows, config.as_deref(), format)?;
        }
    }

    Ok(())
}
