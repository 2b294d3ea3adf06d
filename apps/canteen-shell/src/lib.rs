//! # Canteen Shell
//!
//! Interactive terminal for the canteen POS.
//!
//! ## Module Organization
//! ```text
//! canteen_shell/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── Command line arguments
//! ├── config.rs       ◄─── Database path, currency, log filter
//! ├── console.rs      ◄─── Prompt helpers over BufRead/Write
//! ├── shell.rs        ◄─── Menu loop and dispatch
//! ├── commands/       ◄─── One handler per menu option
//! ├── render.rs       ◄─── Text tables
//! ├── seed.rs         ◄─── Demo data
//! └── error.rs        ◄─── Error type shown to the operator
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod render;
pub mod seed;
pub mod shell;

use std::io;

use canteen_db::{Database, DbConfig};
use tracing::info;

use cli::{Cli, Command};
use config::ShellConfig;
use error::ShellResult;
use shell::Shell;

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Resolve configuration ─── --db / CANTEEN_DB_PATH or data dir       │
/// │  2. Connect to database ───── SQLite (WAL), run pending migrations     │
/// │  3. Run command ───────────── seed, or the interactive menu            │
/// │  4. Close the pool                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> ShellResult<()> {
    let config = ShellConfig::from_cli(&cli)?;
    info!(db_path = ?config.database_path, "Database path determined");

    let db = Database::new(DbConfig::new(&config.database_path)).await?;
    info!("Database connected and migrations applied");

    let result = match cli.command {
        Some(Command::Seed { count }) => seed::seed(&db, count, &mut io::stdout().lock())
            .await
            .map(|_| ()),
        None => {
            Shell::new(db.clone(), config.currency, io::stdin().lock(), io::stdout().lock())
                .run()
                .await
        }
    };

    db.close().await;
    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
pub fn init_tracing(filter: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(config::log_filter(filter))
        .with_writer(io::stderr)
        .init();
}
