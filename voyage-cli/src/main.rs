//! Voyage CLI - Command-line interface for book content expansion

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate jobs argument (must be at least 1)
fn parse_jobs(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("jobs must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "voyage")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand every book file in a content directory with generated sections
    Expand {
        /// Content directory
        content_dir: String,

        /// Extension of the book files to process
        #[arg(short, long, default_value = "txt")]
        extension: String,

        /// Report what would happen without writing any file
        #[arg(long)]
        dry_run: bool,

        /// Number of parallel jobs (must be at least 1)
        #[arg(short, long, default_value = "1", value_parser = parse_jobs)]
        jobs: usize,
    },

    /// Display the fields extracted from a book file
    Info {
        /// Input file path
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "voyage_cli=debug,voyage_core=debug"
    } else {
        "voyage_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Expand {
            content_dir,
            extension,
            dry_run,
            jobs,
        } => commands::expand(&content_dir, &extension, dry_run, jobs),

        Commands::Info { input, json } => commands::info(&input, json),
    }
}
