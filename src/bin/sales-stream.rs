//! Command-line sales report over a product CSV file
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use sales_stream::analysis::{build_report, ReportOptions};
use sales_stream::ingestion::{
    CompositeObserver, CsvProductSource, FileObserver, IngestionObserver, IngestionOptions, StdErrObserver,
};
use sales_stream::report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "sales-stream", version)]
#[command(about = "Stream analysis report over an Amazon-style product sales CSV")]
struct Args {
    /// Path to the product CSV file
    #[arg(default_value = "data/amazon.csv")]
    path: PathBuf,

    /// Number of products listed in the ranked sections
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Verified hits must be rated above this
    #[arg(long, default_value_t = 4.5)]
    min_rating: f64,

    /// Verified hits must have more reviews than this
    #[arg(long, default_value_t = 1000)]
    min_reviews: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log ingestion events to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Append ingestion events to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Treat a missing data file as empty instead of failing
    #[arg(long)]
    allow_missing: bool,
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let ingestion = IngestionOptions {
        observer: observer_for(&args),
        allow_missing: args.allow_missing,
        ..Default::default()
    };
    let source = CsvProductSource::with_options(&args.path, ingestion);
    let options = ReportOptions {
        top_n: args.top,
        min_rating: args.min_rating,
        min_rating_count: args.min_reviews,
    };

    let sales = build_report(&source, &options)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => report::write_text(&mut out, &sales, &options)?,
        OutputFormat::Json => writeln!(out, "{}", report::to_json(&sales)?)?,
    }
    Ok(())
}

fn observer_for(args: &Args) -> Option<Arc<dyn IngestionObserver>> {
    let mut observers: Vec<Arc<dyn IngestionObserver>> = Vec::new();
    if args.verbose {
        observers.push(Arc::new(StdErrObserver));
    }
    if let Some(path) = &args.log_file {
        observers.push(Arc::new(FileObserver::new(path)));
    }

    match observers.len() {
        0 => None,
        1 => observers.pop(),
        _ => Some(Arc::new(CompositeObserver::new(observers))),
    }
}
