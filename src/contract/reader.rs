//! Contract Reader
//!
//! Read-only access to the stored dream. No signer is needed here; the
//! handle's provider is used as-is.

use alloy::primitives::Address;

use super::binding::{ensure_configured, MoodDiary};
use super::error::{ContractError, ContractResult};
use crate::wallet::WalletHandle;

/// Invoke the zero-argument getter and return the stored dream text.
pub async fn read_mood(handle: &WalletHandle, address: Address) -> ContractResult<String> {
    ensure_configured(address)?;

    let contract = MoodDiary::new(address, handle.provider().clone());
    let mood = contract
        .getMood()
        .call()
        .await
        .map_err(|e| ContractError::Rpc(e.to_string()))?;

    tracing::debug!(%address, len = mood.len(), "Read mood from contract");
    Ok(mood)
}
