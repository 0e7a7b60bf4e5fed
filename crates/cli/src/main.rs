//! typed-env - load an env file and print the configs each schema validates.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load the Mailer and/or Postgres configs from one env file.
//! - Print the validated configs as pretty JSON on stdout.
//!
//! Does NOT handle:
//! - Field validation or env file parsing (see `crates/config`).
//!
//! Invariants:
//! - Logging goes to stderr so stdout stays machine-readable.
//! - Any load failure terminates the process with a structured exit code.

mod args;
mod error;
mod schemas;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use error::ExitCodeExt;
use serde_json::{Map, Value};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use typed_env_config::{EnvLoader, constants::DEBUG_TARGET};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.debug) {
        eprintln!("Failed to initialize logging: {:#}", e);
        std::process::exit(error::ExitCode::GeneralError.as_i32());
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}

/// Install the fmt subscriber; `--debug` enables loader diagnostics on top of `RUST_LOG`.
fn init_logging(debug: bool) -> Result<()> {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if debug {
        let directive: Directive = format!("{}=debug", DEBUG_TARGET).parse()?;
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let mut loader = EnvLoader::new().with_debug(cli.debug);
    if let Some(ref path) = cli.env_file {
        loader = loader.with_path(path.clone());
    }

    let mut output = Map::new();

    if cli.schema.includes_mailer() {
        let mailer = loader
            .load(&schemas::mailer_schema())
            .context("Failed to load mailer config")?;
        output.insert("mailer".to_string(), serde_json::to_value(mailer)?);
    }

    if cli.schema.includes_postgres() {
        let postgres = loader
            .load(&schemas::postgres_schema())
            .context("Failed to load postgres config")?;
        tracing::info!(
            target: DEBUG_TARGET,
            host = %postgres.host,
            port = postgres.port,
            "Postgres config loaded"
        );
        output.insert("postgres".to_string(), serde_json::to_value(postgres)?);
    }

    println!("{}", serde_json::to_string_pretty(&Value::Object(output))?);
    Ok(())
}
