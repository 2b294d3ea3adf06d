//! Canteen POS terminal entry point.

use std::process::ExitCode;

use clap::Parser;

use canteen_shell::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    canteen_shell::init_tracing(cli.log.as_deref());

    match canteen_shell::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(code = %err.code, "{}", err.message);
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
