//! Resultgrid CLI - render search results as a fixed-width table.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resultgrid::{render_evaluation, Config, Error, Evaluation};

/// Render search results as a box-drawn table
#[derive(Parser)]
#[command(name = "resultgrid")]
#[command(version)]
struct Args {
    /// Expression shown in the caption line
    #[arg(short, long, default_value = "")]
    query: String,

    /// Viewport width (defaults to $RESULTGRID_WIDTH, then the terminal width)
    #[arg(short, long)]
    width: Option<usize>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render this diagnostic as a failed evaluation instead of reading records
    #[arg(long, conflicts_with = "records")]
    error: Option<String>,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// JSON records file (reads stdin when omitted)
    records: Option<PathBuf>,
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_evaluation(args: &Args) -> Result<Evaluation, Error> {
    if let Some(message) = &args.error {
        return Ok(Evaluation::Failed {
            error: message.clone(),
        });
    }

    match &args.records {
        Some(path) => Evaluation::load(path),
        None => {
            let mut json = String::new();
            io::stdin().read_to_string(&mut json).map_err(Error::Stdin)?;
            Evaluation::from_json(&json)
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let width = config.resolve_width(args.width);
    debug!(width, "resolved viewport width");

    let evaluation = read_evaluation(args)?;
    for line in render_evaluation(&config, width, &args.query, evaluation) {
        println!("{}", line);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
