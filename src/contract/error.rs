//! Contract call error types

use alloy::primitives::TxHash;
use thiserror::Error;

/// Errors that can occur while calling the Mood Diary contract
#[derive(Error, Debug)]
pub enum ContractError {
    /// Read-only call failed at the RPC layer
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Broadcast or confirmation-wait failed
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// Transaction mined but the contract reverted
    #[error("Transaction {tx_hash} reverted on-chain")]
    Reverted { tx_hash: TxHash },

    /// Contract address left at the zero-address placeholder
    #[error("Contract address not configured: set [contract] address or DREAMROCKET_CONTRACT_ADDRESS")]
    AddressNotConfigured,

    /// Configured contract address is not valid hex
    #[error("Invalid contract address: {0}")]
    InvalidAddress(String),
}

/// Result type alias for contract operations
pub type ContractResult<T> = Result<T, ContractError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::b256;

    #[test]
    fn test_error_display() {
        let err = ContractError::Rpc("connection reset".to_string());
        assert_eq!(err.to_string(), "RPC error: connection reset");

        let hash = b256!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
        let err = ContractError::Reverted { tx_hash: hash };
        assert!(err.to_string().contains("reverted on-chain"));
    }
}
