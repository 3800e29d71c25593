//! Wallet Connector Adapter
//!
//! Acquires the provider/signer pair the rest of the app runs against.
//! The underlying provider is built once, on the first `connect` call, and
//! the resulting [`WalletHandle`] is cached for the lifetime of the process:
//! repeated calls reuse the same handle, nothing is ever disposed explicitly.
//!
//! Every *fresh* acquisition runs the network guard; a handle that made it
//! into the cache is guaranteed to sit on the expected chain.

use std::time::Duration;

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;

use super::error::{WalletError, WalletResult};
use super::network::{self, check_chain};

/// Configuration for the wallet connector
#[derive(Debug, Clone)]
pub struct WalletConfig {
    /// JSON-RPC endpoint URL (e.g., "https://rpc.sepolia.org")
    pub rpc_url: String,
    /// Hex-encoded signing key; `None` means no wallet is available
    pub private_key: Option<String>,
    /// Chain id the connected endpoint must report
    pub expected_chain_id: u64,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            private_key: None,
            expected_chain_id: network::SEPOLIA_CHAIN_ID,
            request_timeout_ms: 10_000,
        }
    }
}

/// Long-lived handle over the connected provider.
///
/// Cheap to clone; the provider inside is shared. Passed by reference into
/// the contract-call functions rather than re-created per call.
#[derive(Clone, Debug)]
pub struct WalletHandle {
    provider: DynProvider,
    sender: Address,
    chain_id: u64,
}

impl WalletHandle {
    /// The signer-bound provider for reads and writes
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// Address the signing key controls
    pub fn sender(&self) -> Address {
        self.sender
    }

    /// Chain id the handle was validated against
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }
}

#[cfg(test)]
impl WalletHandle {
    /// Handle over a provider that never performs I/O in tests.
    pub(crate) fn test_handle(chain_id: u64) -> Self {
        let provider = ProviderBuilder::new()
            .connect_http("http://localhost:0".parse().expect("static url"))
            .erased();
        Self {
            provider,
            sender: Address::ZERO,
            chain_id,
        }
    }
}

/// Owns the connector config and the cached provider handle.
pub struct WalletConnector {
    config: WalletConfig,
    handle: Option<WalletHandle>,
}

impl WalletConnector {
    pub fn new(config: WalletConfig) -> Self {
        Self {
            config,
            handle: None,
        }
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    /// Whether a validated handle is already cached
    pub fn is_connected(&self) -> bool {
        self.handle.is_some()
    }

    /// The cached handle, if any
    pub fn handle(&self) -> Option<&WalletHandle> {
        self.handle.as_ref()
    }

    /// Adopt a handle established elsewhere (e.g., on a background task).
    ///
    /// First handle wins; a concurrent second connect is discarded so the
    /// cached identity never changes under the caller.
    pub fn adopt(&mut self, handle: WalletHandle) {
        if self.handle.is_none() {
            self.handle = Some(handle);
        }
    }

    /// Acquire the provider handle, building it on first use.
    pub async fn connect(&mut self) -> WalletResult<WalletHandle> {
        if let Some(handle) = &self.handle {
            return Ok(handle.clone());
        }

        let handle = establish(self.config.clone()).await?;
        self.handle = Some(handle.clone());
        Ok(handle)
    }
}

/// Build a signer-bound provider and run it through the network guard.
///
/// On mismatch the handle is discarded, so `wallet_connected` can never be
/// observed true on the wrong chain.
pub async fn establish(config: WalletConfig) -> WalletResult<WalletHandle> {
    let key = config
        .private_key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or(WalletError::MissingKey)?;

    let signer = key
        .parse::<PrivateKeySigner>()
        .map_err(|e| WalletError::InvalidKey(e.to_string()))?;
    let sender = signer.address();

    tracing::info!(endpoint = %config.rpc_url, %sender, "Connecting wallet");

    let wallet = EthereumWallet::from(signer);
    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect(&config.rpc_url)
        .await
        .map_err(|e| WalletError::Connection(e.to_string()))?
        .erased();

    let chain_id = tokio::time::timeout(
        Duration::from_millis(config.request_timeout_ms),
        provider.get_chain_id(),
    )
    .await
    .map_err(|_| WalletError::Timeout)?
    .map_err(|e| WalletError::Connection(e.to_string()))?;

    check_chain(config.expected_chain_id, chain_id)?;

    tracing::info!(
        chain_id,
        chain = network::chain_name(chain_id),
        "Wallet connected"
    );

    Ok(WalletHandle {
        provider,
        sender,
        chain_id,
    })
}

/// Preflight the RPC endpoint with a `web3_clientVersion` call.
///
/// Lets the headless `status` command distinguish an unreachable endpoint
/// from a wallet problem without building a provider first.
pub async fn probe(rpc_url: &str, timeout_ms: u64) -> WalletResult<String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()
        .map_err(|e| WalletError::Connection(e.to_string()))?;

    let body = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "web3_clientVersion",
        "params": [],
    });

    let response = client.post(rpc_url).json(&body).send().await.map_err(|e| {
        if e.is_timeout() {
            WalletError::Timeout
        } else if e.is_connect() {
            WalletError::Unavailable
        } else {
            WalletError::Connection(e.to_string())
        }
    })?;

    if !response.status().is_success() {
        return Err(WalletError::Unavailable);
    }

    let payload: serde_json::Value = response
        .json()
        .await
        .map_err(|e| WalletError::Connection(e.to_string()))?;

    payload
        .get("result")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| WalletError::Connection("malformed web3_clientVersion response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WalletConfig::default();
        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(config.expected_chain_id, network::SEPOLIA_CHAIN_ID);
        assert!(config.private_key.is_none());
    }

    #[tokio::test]
    async fn test_connect_without_key_fails() {
        let mut connector = WalletConnector::new(WalletConfig::default());
        let err = connector.connect().await.unwrap_err();
        assert!(matches!(err, WalletError::MissingKey));
        assert!(!connector.is_connected());
    }

    #[tokio::test]
    async fn test_connect_with_garbage_key_fails() {
        let mut connector = WalletConnector::new(WalletConfig {
            private_key: Some("not-a-key".to_string()),
            ..WalletConfig::default()
        });
        let err = connector.connect().await.unwrap_err();
        assert!(matches!(err, WalletError::InvalidKey(_)));
        assert!(!connector.is_connected());
    }

    #[tokio::test]
    async fn test_blank_key_counts_as_missing() {
        let mut connector = WalletConnector::new(WalletConfig {
            private_key: Some("   ".to_string()),
            ..WalletConfig::default()
        });
        let err = connector.connect().await.unwrap_err();
        assert!(matches!(err, WalletError::MissingKey));
    }
}
