//! # Jsonnet Playground Entry Point
//!
//! Run, share and open playground snippets from the terminal.

use anyhow::Result;
use jsonnet_playground::cmd_args::{CommandLineArgs, OutputFormat};
use jsonnet_playground::config::LOG_LEVEL_ENV_VAR;
use jsonnet_playground::{AppController, JsonView, SessionView, TextView};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let level = if verbose {
        "debug".to_string()
    } else {
        std::env::var(LOG_LEVEL_ENV_VAR).unwrap_or_else(|_| "error".to_string())
    };
    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_with<V: SessionView>(cmd_args: &CommandLineArgs, view: V) -> Result<bool> {
    let mut app = AppController::new(cmd_args, view)?;
    app.run().await
}

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    init_tracing(cmd_args.verbose());
    tracing::debug!("Starting with {:?}", cmd_args);

    let succeeded = match cmd_args.format() {
        OutputFormat::Text => run_with(&cmd_args, TextView::stdout()).await?,
        OutputFormat::Json => run_with(&cmd_args, JsonView::stdout()).await?,
    };

    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}
