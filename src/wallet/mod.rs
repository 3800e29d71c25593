//! Wallet connection layer
//!
//! The connector adapter that acquires (and caches) the provider/signer
//! handle, plus the network guard that rejects providers sitting on the
//! wrong chain.

pub mod connector;
pub mod error;
pub mod network;

pub use connector::{establish, probe, WalletConfig, WalletConnector, WalletHandle};
pub use error::{WalletError, WalletResult};
pub use network::{chain_name, check_chain, SEPOLIA_CHAIN_ID};
