//! # ibanx CLI entry point
//!
//! Parses command-line arguments, initializes logging on stderr, and
//! dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ibanx_cli::countries::{run_countries, CountriesArgs};
use ibanx_cli::format::{run_format, FormatArgs};
use ibanx_cli::inspect::{run_inspect, InspectArgs};
use ibanx_cli::validate::{run_validate, ValidateArgs};
use ibanx_cli::OutputFormat;

/// IBAN validation toolkit.
///
/// Checks the ISO 13616 mod-97 checksum, the country's BBAN structure, and
/// national check digits where a country defines them.
#[derive(Parser, Debug)]
#[command(name = "ibanx", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate IBANs given as arguments or one per line on stdin.
    Validate(ValidateArgs),

    /// Show the decomposition of one IBAN.
    Inspect(InspectArgs),

    /// Print one IBAN in pretty or compact form.
    Format(FormatArgs),

    /// List countries with a documented BBAN structure.
    Countries(CountriesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "ibanx starting");

    let result = match &cli.command {
        Commands::Validate(args) => run_validate(args, cli.format),
        Commands::Inspect(args) => run_inspect(args, cli.format),
        Commands::Format(args) => run_format(args, cli.format),
        Commands::Countries(args) => run_countries(args, cli.format),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
