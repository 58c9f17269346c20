mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "repscan",
    version,
    about = "Turn OCR'd workout plans into structured training days"
)]
struct Cli {
    /// Log pipeline decisions to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a workout plan (text or XLSX) into training days
    Parse {
        /// Path to a text file or XLSX workbook
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write parsed output to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Date of the first day (YYYY-MM-DD), defaults to today
        #[arg(long, value_name = "DATE")]
        today: Option<String>,

        /// Skip detection: en, es, fr, de, sv, no, da, fi
        #[arg(short, long)]
        language: Option<String>,

        /// JSON options file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Show detected language, scores and layout without parsing
    Detect {
        /// Path to a text file or XLSX workbook
        input_file: PathBuf,
    },
    /// List supported languages and their labels
    Languages,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            out,
            today,
            language,
            config,
        } => commands::parse::run(
            input_file,
            &output,
            out,
            commands::parse::Overrides {
                today,
                language,
                config,
            },
        ),
        Commands::Detect { input_file } => commands::detect::run(&input_file),
        Commands::Languages => commands::languages::list(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
