//! Contract Writer
//!
//! Broadcasts the setter transaction and waits for it to be mined. One
//! confirmation, no configurable threshold, no timeout: an unconfirmed
//! transaction keeps the awaiting task suspended while the UI stays
//! responsive. A broadcast transaction cannot be aborted.

use alloy::primitives::{Address, TxHash};

use super::binding::{ensure_configured, MoodDiary};
use super::error::{ContractError, ContractResult};
use crate::wallet::WalletHandle;

/// Outcome of a mined setter transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinedMood {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
}

/// Invoke the one-argument setter with the validated dream text.
///
/// The non-empty precondition is enforced by the session layer before this
/// is called; nothing is re-checked here.
pub async fn write_mood(
    handle: &WalletHandle,
    address: Address,
    text: &str,
) -> ContractResult<MinedMood> {
    ensure_configured(address)?;

    let contract = MoodDiary::new(address, handle.provider().clone());

    tracing::info!(%address, sender = %handle.sender(), "Broadcasting setMood");
    let pending = contract
        .setMood(text.to_string())
        .send()
        .await
        .map_err(|e| ContractError::Transaction(e.to_string()))?;

    let tx_hash = *pending.tx_hash();
    tracing::info!(%tx_hash, "Transaction broadcast, awaiting confirmation");

    let receipt = pending
        .get_receipt()
        .await
        .map_err(|e| ContractError::Transaction(e.to_string()))?;

    if !receipt.status() {
        return Err(ContractError::Reverted { tx_hash });
    }

    tracing::info!(%tx_hash, block = ?receipt.block_number, "Transaction mined");
    Ok(MinedMood {
        tx_hash: receipt.transaction_hash,
        block_number: receipt.block_number,
    })
}
