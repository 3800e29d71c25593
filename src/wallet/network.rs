//! Network Guard
//!
//! Verifies that a freshly acquired provider is connected to the expected
//! chain before any contract call happens. The check is a hard failure:
//! there is no retry, the user has to point the wallet at the right network
//! and connect again.

use super::error::{WalletError, WalletResult};

/// Chain id of the Sepolia test network, the default target.
pub const SEPOLIA_CHAIN_ID: u64 = 11155111;

/// Reject a provider whose chain id does not match the configured one.
///
/// Invoked on every fresh provider acquisition; a cached handle has always
/// passed this check.
pub fn check_chain(expected: u64, actual: u64) -> WalletResult<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(WalletError::WrongNetwork { expected, actual })
    }
}

/// Human-readable name for well-known chain ids, used in alerts and logs.
pub fn chain_name(chain_id: u64) -> &'static str {
    match chain_id {
        1 => "mainnet",
        4 => "rinkeby",
        5 => "goerli",
        17000 => "holesky",
        11155111 => "sepolia",
        31337 => "anvil",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_chain_passes() {
        assert!(check_chain(SEPOLIA_CHAIN_ID, SEPOLIA_CHAIN_ID).is_ok());
        assert!(check_chain(31337, 31337).is_ok());
    }

    #[test]
    fn test_mismatched_chain_fails() {
        let err = check_chain(SEPOLIA_CHAIN_ID, 1).unwrap_err();
        match err {
            WalletError::WrongNetwork { expected, actual } => {
                assert_eq!(expected, SEPOLIA_CHAIN_ID);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_chain_names() {
        assert_eq!(chain_name(11155111), "sepolia");
        assert_eq!(chain_name(31337), "anvil");
        assert_eq!(chain_name(424242), "unknown");
    }
}
