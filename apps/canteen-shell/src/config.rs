//! Shell configuration.
//!
//! Resolved once at startup from the command line, with environment
//! variable fallbacks handled by clap.

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::{ShellError, ShellResult};

/// Log filter used when neither `--log` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn,sqlx=warn";

/// Database file name inside the platform data directory.
const DATABASE_FILE: &str = "canteen.db";

/// Resolved shell configuration.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// SQLite database file.
    pub database_path: PathBuf,

    /// Currency symbol printed before amounts.
    pub currency: String,
}

impl ShellConfig {
    /// Builds the configuration from parsed arguments.
    pub fn from_cli(cli: &Cli) -> ShellResult<Self> {
        let database_path = match &cli.db {
            Some(path) => path.clone(),
            None => default_database_path()?,
        };

        Ok(ShellConfig {
            database_path,
            currency: cli.currency.trim().to_string(),
        })
    }
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.canteen.pos/canteen.db`
/// - **Windows**: `%APPDATA%\canteen\pos\data\canteen.db`
/// - **Linux**: `~/.local/share/pos/canteen.db`
///
/// The directory is created if it doesn't exist.
pub fn default_database_path() -> ShellResult<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "canteen", "pos")
        .ok_or_else(|| ShellError::internal("Could not determine app data directory"))?;

    let data_dir = proj_dirs.data_dir();

    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join(DATABASE_FILE))
}

/// Picks the log filter: `--log`, else `RUST_LOG`, else the default.
pub fn log_filter(cli_filter: Option<&str>) -> EnvFilter {
    cli_filter
        .and_then(|filter| EnvFilter::try_new(filter).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_explicit_database_path_wins() {
        let cli = Cli::try_parse_from(["canteen", "--db", "/tmp/shop.db", "--currency", " $ "]).unwrap();
        let config = ShellConfig::from_cli(&cli).unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/shop.db"));
        assert_eq!(config.currency, "$");
    }

    #[test]
    fn test_explicit_log_filter_is_used() {
        let filter = log_filter(Some("canteen_db=debug"));
        assert_eq!(filter.to_string(), "canteen_db=debug");
    }
}
