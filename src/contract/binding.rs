//! Mood Diary contract binding
//!
//! The on-chain ABI has exactly two entry points: a zero-argument getter
//! returning the stored dream and a one-argument setter replacing it.

use alloy::primitives::Address;
use alloy::sol;

use super::error::{ContractError, ContractResult};

sol! {
    #[sol(rpc)]
    contract MoodDiary {
        function getMood() external view returns (string memory);
        function setMood(string memory _mood) external;
    }
}

/// Parse a configured contract address.
pub fn parse_address(raw: &str) -> ContractResult<Address> {
    raw.trim()
        .parse::<Address>()
        .map_err(|e| ContractError::InvalidAddress(format!("{raw:?}: {e}")))
}

/// Reject the zero-address placeholder before building a contract handle.
pub fn ensure_configured(address: Address) -> ContractResult<()> {
    if address == Address::ZERO {
        return Err(ContractError::AddressNotConfigured);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::keccak256;
    use alloy::sol_types::{SolCall, SolValue};

    #[test]
    fn test_selectors_match_abi() {
        let get = &keccak256("getMood()".as_bytes())[..4];
        assert_eq!(MoodDiary::getMoodCall::SELECTOR.as_slice(), get);

        let set = &keccak256("setMood(string)".as_bytes())[..4];
        assert_eq!(MoodDiary::setMoodCall::SELECTOR.as_slice(), set);
    }

    #[test]
    fn test_getter_return_decodes_to_string() {
        let encoded = "fly to mars".to_string().abi_encode();
        let decoded = MoodDiary::getMoodCall::abi_decode_returns(&encoded).unwrap();
        assert_eq!(decoded, "fly to mars");
    }

    #[test]
    fn test_setter_roundtrip() {
        let call = MoodDiary::setMoodCall {
            _mood: "learn to sail".to_string(),
        };
        let encoded = call.abi_encode();
        let decoded = MoodDiary::setMoodCall::abi_decode(&encoded).unwrap();
        assert_eq!(decoded._mood, "learn to sail");
    }

    #[test]
    fn test_parse_address() {
        let addr = parse_address("0x000000000000000000000000000000000000dEaD").unwrap();
        assert!(ensure_configured(addr).is_ok());

        assert!(parse_address("not-an-address").is_err());

        let zero = parse_address("0x0000000000000000000000000000000000000000").unwrap();
        assert!(matches!(
            ensure_configured(zero),
            Err(ContractError::AddressNotConfigured)
        ));
    }
}
