//! Dreamrocket TUI
//!
//! Terminal frontend for the Mood Diary contract. Connects the wallet on
//! startup, reads the stored dream, and lets the user send a new one.

use std::sync::Arc;

use dreamrocket::config::{Config, LoggingConfig};
use dreamrocket::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_tracing(&config.logging)?;

    tracing::info!("Dreamrocket v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        endpoint = %config.wallet.rpc_url,
        contract = %config.contract.address,
        "Starting terminal app"
    );

    let app = App::new(config)?;

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}

/// Initialize logging. With a file configured, diagnostics stay out of the
/// terminal the UI is drawing on; otherwise they go to stderr.
fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("dreamrocket={}", config.level)),
    );

    match &config.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            let writer = Arc::new(file);
            if config.format == "json" {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(writer),
                    )
                    .init();
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .with_ansi(false)
                            .with_writer(writer),
                    )
                    .init();
            }
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
