//! Command line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Canteen point-of-sale terminal.
#[derive(Debug, Parser)]
#[command(name = "canteen", about = "Canteen point-of-sale terminal", version, long_about = None)]
pub struct Cli {
    /// SQLite database file (defaults to the platform data directory)
    #[arg(long, env = "CANTEEN_DB_PATH", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Currency symbol shown before amounts
    #[arg(long, env = "CANTEEN_CURRENCY", default_value = "R$", value_name = "SYMBOL")]
    pub currency: String,

    /// Log filter, e.g. `debug` or `canteen_db=debug` (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Insert a demo canteen menu into an empty database
    Seed {
        /// Number of items to insert
        #[arg(long, short, default_value_t = 12)]
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shell_invocation() {
        let cli = Cli::try_parse_from(["canteen", "--db", "/tmp/c.db", "--currency", "€"]).unwrap();

        assert_eq!(cli.db, Some(PathBuf::from("/tmp/c.db")));
        assert_eq!(cli.currency, "€");
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_seed() {
        let cli = Cli::try_parse_from(["canteen", "--db", "/tmp/c.db", "seed", "--count", "5"]).unwrap();

        assert!(matches!(cli.command, Some(Command::Seed { count: 5 })));
    }

    #[test]
    fn test_seed_count_must_be_a_number() {
        assert!(Cli::try_parse_from(["canteen", "seed", "--count", "many"]).is_err());
    }
}
