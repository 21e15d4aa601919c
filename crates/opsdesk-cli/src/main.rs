//! Console entry point - the composition root.
//!
//! Wires configuration, logging, and the bootstrapped context together,
//! then hands the terminal to the read-dispatch loop.

use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use opsdesk_cli::{CliError, ConsoleConfig, Dispatcher, TerminalSource, bootstrap, repl};

fn init_tracing() {
    // Diagnostics go to stderr; stdout belongs to the console.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env();
    let mut dispatcher = Dispatcher::new(bootstrap(&config));
    let mut source = TerminalSource::new().context("Failed to open the terminal")?;

    repl::run(&mut source, &mut dispatcher).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before the filter reads RUST_LOG
    dotenvy::dotenv().ok();
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
