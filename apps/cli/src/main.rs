//! Carrysplit CLI
//!
//! Runs the allocation engine against a built-in or file-based scenario.
//!
//! # Commands
//!
//! - `allocate`: split a realized profit with carry (plus optional fees and
//!   a moonshot pool)
//! - `moonshot`: split a pool with the fixed 75/25 rule
//! - `scenarios`: print the built-in scenario records

use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;
mod render;

use config::Config;

/// Profit split calculator for the Founders / Laura / Damon pool
#[derive(Parser)]
#[command(name = "carrysplit")]
#[command(version)]
#[command(about = "Profit split calculator for a Founders + two investor pool")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a realized profit with carry routed to Founders
    Allocate(commands::allocate::AllocateArgs),
    /// Split a pool 25% Founders / 75% investors
    Moonshot(commands::moonshot::MoonshotArgs),
    /// Print the built-in scenarios as JSON
    Scenarios,
}

fn init_tracing(verbose: u8, log_format: &str) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_tracing(cli.verbose, &config.log_format);

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Allocate(args) => commands::allocate::run(&args, &config, &mut stdout),
        Commands::Moonshot(args) => commands::moonshot::run(&args, &config, &mut stdout),
        Commands::Scenarios => commands::scenarios::run(&mut stdout),
    }
}
