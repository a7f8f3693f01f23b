mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "vitae",
    version,
    about = "Import resume PDFs into structured resume data"
)]
struct Cli {
    /// PDF text backend: pdftotext (default) or pdf-extract
    #[arg(long, global = true, default_value = "pdftotext")]
    backend: String,

    /// Largest accepted PDF, in MiB
    #[arg(long = "max-size-mb", global = true, default_value_t = 10)]
    max_size_mb: usize,

    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract resume fields from a PDF (or a .txt file of raw text)
    Parse {
        /// Path to PDF or text file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted fields to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Show the section spans detected in a resume
    Sections {
        /// Path to PDF or text file
        input_file: PathBuf,
    },
    /// Merge extracted fields into a resume record
    Import {
        /// Path to PDF or text file
        input_file: PathBuf,

        /// Existing resume record (JSON) to merge into; a new record is created otherwise
        #[arg(long, value_name = "FILE")]
        into: Option<PathBuf>,

        /// Write the merged record here instead of back to --into
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("vitae_core={default_level},vitae={default_level}"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = commands::Source {
        backend: cli.backend,
        max_bytes: cli.max_size_mb.saturating_mul(1024 * 1024),
    };

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            out,
        } => commands::parse::run(&source, input_file, &output, out),
        Commands::Sections { input_file } => commands::sections::run(&source, input_file),
        Commands::Import {
            input_file,
            into,
            out,
        } => commands::import::run(&source, input_file, into, out),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
