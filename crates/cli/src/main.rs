use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use pipeline::observers::{self, CountObserver, PrintObserver};
use pipeline::{resolve_strategy, FilterRegistry, NumberProcessor};
use reader::NumberReader;
use std::path::PathBuf;

/// numsift - filter integers from a file
#[derive(Parser)]
#[command(name = "numsift")]
#[command(about = "Reads integers from a file, applies a filter, prints the survivors", long_about = None)]
struct Cli {
    /// Filter to apply: even, odd, or gt<n> (e.g. gt15, gt-3)
    filter: String,

    /// Path to a text file of whitespace-separated integers
    input: PathBuf,
}

fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so stdout stays a pure
    // observer channel.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    filter_numbers(&cli).inspect_err(|_| print_usage())
}

/// Resolve the filter token, wire up the pipeline, and run one pass.
fn filter_numbers(cli: &Cli) -> Result<()> {
    let mut registry = FilterRegistry::with_builtins();
    let strategy = resolve_strategy(&mut registry, &cli.filter)?;
    tracing::debug!("Resolved filter token '{}' to {}", cli.filter, strategy.name());

    let processor = NumberProcessor::new(NumberReader::new(), strategy)
        .add_observer(observers::shared(PrintObserver))
        .add_observer(observers::shared(CountObserver::new()));

    processor
        .run(&cli.input)
        .with_context(|| format!("Failed to filter numbers from {}", cli.input.display()))?;

    Ok(())
}

/// Usage synopsis printed to stderr on every fatal path.
fn print_usage() {
    eprintln!("{}", "Possible filters:".bold());
    eprintln!("    even  - even numbers");
    eprintln!("    odd   - odd numbers");
    eprintln!("    gt<n> - numbers greater than n (e.g. gt15, gt-3)");
}
