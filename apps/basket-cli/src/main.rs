//! # Basket CLI
//!
//! Thin demonstration harness over `basket-core`.
//!
//! ## Usage
//! ```bash
//! # Run the demo scenarios
//! cargo run -p basket-cli
//!
//! # Price a basket
//! cargo run -p basket-cli -- B01 G01
//!
//! # Custom rules, JSON breakdown
//! cargo run -p basket-cli -- --rules ./rules.json --json R01 R01
//! ```
//!
//! ## Startup Sequence
//! 1. Load configuration (env, then args)
//! 2. Initialize tracing (stderr)
//! 3. Load pricing rules (standard or from file)
//! 4. Run the requested command, results on stdout

mod config;
mod demo;
mod error;

use std::fs;
use std::process::ExitCode;

use basket_core::{Basket, PricingRules};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, Command, USAGE};
use crate::error::{CliError, CliResult};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let config = CliConfig::load()?;
    init_tracing(&config.log_filter)?;
    debug!(?config, "Configuration loaded");

    if config.command == Command::Help {
        println!("{}", USAGE);
        return Ok(());
    }

    let loaded;
    let rules: &PricingRules = match &config.rules_path {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| CliError::ReadRules {
                path: path.clone(),
                source,
            })?;
            loaded = PricingRules::from_json(&json)?;
            info!(path = %path.display(), "Loaded pricing rules from file");
            &loaded
        }
        None => PricingRules::standard(),
    };

    match &config.command {
        Command::Help => {}
        Command::DumpRules => {
            println!("{}", serde_json::to_string_pretty(&rules.to_document())?);
        }
        Command::Demo => {
            let reports = demo::run_scenarios(rules)?;
            if config.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    println!("{}", report.render());
                }
            }
        }
        Command::Price(codes) => {
            let basket = Basket::from_codes(rules, codes)?;
            if config.json {
                println!("{}", serde_json::to_string_pretty(&basket.totals())?);
            } else {
                println!("Basket total: {}", basket.total());
            }
        }
    }

    Ok(())
}

/// Installs the stderr fmt subscriber.
fn init_tracing(filter: &str) -> CliResult<()> {
    let filter = EnvFilter::try_new(filter).map_err(|e| CliError::LogFilter(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
