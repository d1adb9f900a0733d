mod app;
mod budget_sync;
mod cache;
mod client;
mod config;
mod error;
mod session;
mod ui;

use tracing_subscriber::EnvFilter;

use crate::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Stdout belongs to the terminal UI; diagnostics go to stderr and are
    // normally silenced unless EXPENSE_TUI_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("EXPENSE_TUI_LOG").unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::load()?;
    let mut app = app::App::new(config)?;
    app.run().await?;
    Ok(())
}
