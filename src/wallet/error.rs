//! Wallet connector error types
//!
//! Defines all errors that can occur while acquiring or validating
//! the wallet provider handle.

use thiserror::Error;

/// Errors that can occur in the wallet layer
#[derive(Error, Debug)]
pub enum WalletError {
    /// Connected chain does not match the configured network
    #[error("Wrong network: connected to chain {actual}, expected chain {expected}")]
    WrongNetwork { expected: u64, actual: u64 },

    /// Provider construction or RPC transport failure
    #[error("Wallet connection failed: {0}")]
    Connection(String),

    /// RPC endpoint refused the connection
    #[error("RPC endpoint unavailable")]
    Unavailable,

    /// RPC endpoint did not answer in time
    #[error("RPC request timeout")]
    Timeout,

    /// No signing key configured (the wallet equivalent of an absent extension)
    #[error("No signing key configured: set DREAMROCKET_PRIVATE_KEY or [wallet] private_key")]
    MissingKey,

    /// Signing key could not be parsed
    #[error("Invalid signing key: {0}")]
    InvalidKey(String),
}

/// Result type alias for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WalletError::WrongNetwork {
            expected: 11155111,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Wrong network: connected to chain 1, expected chain 11155111"
        );

        let err = WalletError::Unavailable;
        assert_eq!(err.to_string(), "RPC endpoint unavailable");
    }
}
