//! # Dreamrocket
//!
//! Mood Diary dApp client - a terminal Rust application for connecting a
//! wallet, reading the dream stored in the Mood Diary contract, and sending
//! a new one on-chain.
//!
//! ## Features
//!
//! - **Wallet connector**: one lazily-built, cached provider/signer handle
//! - **Network guard**: hard chain-id check on every fresh acquisition
//! - **Contract glue**: typed `getMood`/`setMood` bindings, one-confirmation writes
//! - **Explicit view state**: {connected, loading, sent} flags drive the UI
//!
//! ## Modules
//!
//! - [`wallet`]: Connector adapter and network guard
//! - [`contract`]: Mood Diary reader and writer
//! - [`session`]: View state and the flags-to-controls mapping
//! - [`app`]: Terminal event loop
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dreamrocket::config::Config;
//! use dreamrocket::contract::{self, parse_address};
//! use dreamrocket::wallet::WalletConnector;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let address = parse_address(&config.contract.address)?;
//!
//!     let mut connector = WalletConnector::new(config.wallet_config());
//!     let handle = connector.connect().await?;
//!
//!     let mood = contract::read_mood(&handle, address).await?;
//!     println!("Current dream: {mood}");
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod config;
pub mod contract;
pub mod session;
pub mod wallet;

// Re-export top-level types for convenience
pub use app::App;

pub use config::{Config, ConfigError, LoggingConfig};

pub use contract::{
    parse_address, read_mood, write_mood, ContractError, ContractResult, MinedMood, MoodDiary,
};

pub use session::{
    controls, validate_input, Alert, Control, ControlSet, Phase, RocketState, Session,
    SessionError,
};

pub use wallet::{
    chain_name, check_chain, establish, probe, WalletConfig, WalletConnector, WalletError,
    WalletHandle, WalletResult,
};
