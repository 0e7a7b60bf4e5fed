//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not load or validate configuration (see `main`).

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "typed-env")]
#[command(about = "Load an env file and print the configs validated by each schema", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  typed-env --env-file crates/cli/demo/.env\n  typed-env --env-file crates/cli/demo/.env --schema postgres\n  PG_PORT=7000 typed-env -f crates/cli/demo/.env --debug\n"
)]
pub struct Cli {
    /// Path to the env file (defaults to .env in the working directory)
    #[arg(short = 'f', long, env = "TYPED_ENV_FILE", value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Log which keys were loaded and which were overridden by the environment
    #[arg(long)]
    pub debug: bool,

    /// Which config to load
    #[arg(short, long, value_enum, default_value = "all")]
    pub schema: SchemaChoice,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaChoice {
    Mailer,
    Postgres,
    All,
}

impl SchemaChoice {
    pub fn includes_mailer(self) -> bool {
        matches!(self, SchemaChoice::Mailer | SchemaChoice::All)
    }

    pub fn includes_postgres(self) -> bool {
        matches!(self, SchemaChoice::Postgres | SchemaChoice::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["typed-env"]).unwrap();
        assert_eq!(cli.schema, SchemaChoice::All);
        assert!(!cli.debug);
    }

    #[test]
    fn test_schema_selection() {
        let cli = Cli::try_parse_from(["typed-env", "--schema", "postgres", "-f", "x.env"]).unwrap();
        assert!(cli.schema.includes_postgres());
        assert!(!cli.schema.includes_mailer());
        assert_eq!(cli.env_file, Some(PathBuf::from("x.env")));
    }

    #[test]
    fn test_unknown_schema_rejected() {
        assert!(Cli::try_parse_from(["typed-env", "--schema", "redis"]).is_err());
    }
}
