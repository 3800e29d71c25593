//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::wallet;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wallet: WalletSection,

    #[serde(default)]
    pub chain: ChainSection,

    #[serde(default)]
    pub contract: ContractSection,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Wallet / RPC endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WalletSection {
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Prefer the DREAMROCKET_PRIVATE_KEY environment variable over this
    #[serde(default)]
    pub private_key: Option<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_rpc_url() -> String {
    "https://rpc.sepolia.org".to_string()
}

fn default_request_timeout() -> u64 {
    10_000
}

impl Default for WalletSection {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            private_key: None,
            request_timeout_ms: default_request_timeout(),
        }
    }
}

/// Expected network configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChainSection {
    #[serde(default = "default_chain_id")]
    pub expected_id: u64,
}

fn default_chain_id() -> u64 {
    wallet::SEPOLIA_CHAIN_ID
}

impl Default for ChainSection {
    fn default() -> Self {
        Self {
            expected_id: default_chain_id(),
        }
    }
}

/// Mood Diary contract configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ContractSection {
    #[serde(default = "default_contract_address")]
    pub address: String,
}

fn default_contract_address() -> String {
    // Zero-address placeholder; rejected at call time until configured.
    "0x0000000000000000000000000000000000000000".to_string()
}

impl Default for ContractSection {
    fn default() -> Self {
        Self {
            address: default_contract_address(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("dreamrocket").join("config.toml")),
            Some(PathBuf::from("./dreamrocket.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(rpc_url) = std::env::var("DREAMROCKET_RPC_URL") {
            self.wallet.rpc_url = rpc_url;
        }
        if let Ok(key) = std::env::var("DREAMROCKET_PRIVATE_KEY") {
            self.wallet.private_key = Some(key);
        }

        if let Ok(chain_id) = std::env::var("DREAMROCKET_CHAIN_ID") {
            if let Ok(id) = chain_id.parse() {
                self.chain.expected_id = id;
            }
        }

        if let Ok(address) = std::env::var("DREAMROCKET_CONTRACT_ADDRESS") {
            self.contract.address = address;
        }

        if let Ok(level) = std::env::var("DREAMROCKET_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("DREAMROCKET_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// The wallet-layer view of this configuration
    pub fn wallet_config(&self) -> wallet::WalletConfig {
        wallet::WalletConfig {
            rpc_url: self.wallet.rpc_url.clone(),
            private_key: self
                .wallet
                .private_key
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
            expected_chain_id: self.chain.expected_id,
            request_timeout_ms: self.wallet.request_timeout_ms,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wallet: WalletSection::default(),
            chain: ChainSection::default(),
            contract: ContractSection::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Dreamrocket Configuration
#
# Environment variables override these settings:
# - DREAMROCKET_RPC_URL
# - DREAMROCKET_PRIVATE_KEY
# - DREAMROCKET_CHAIN_ID
# - DREAMROCKET_CONTRACT_ADDRESS
# - DREAMROCKET_LOG_LEVEL
# - DREAMROCKET_LOG_FORMAT

[wallet]
# JSON-RPC endpoint to connect through
rpc_url = "https://rpc.sepolia.org"

# Hex signing key; prefer DREAMROCKET_PRIVATE_KEY over writing it here
private_key = ""

# Request timeout (ms)
request_timeout_ms = 10000

[chain]
# Chain id the endpoint must report (11155111 = Sepolia, 31337 = local Anvil)
expected_id = 11155111

[contract]
# Deployed Mood Diary contract address
address = "0x0000000000000000000000000000000000000000"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path; keeps diagnostics out of the TUI
# file = "/tmp/dreamrocket.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.wallet.rpc_url, "https://rpc.sepolia.org");
        assert_eq!(config.chain.expected_id, wallet::SEPOLIA_CHAIN_ID);
        assert_eq!(
            config.contract.address,
            "0x0000000000000000000000000000000000000000"
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"
[wallet]
rpc_url = "http://localhost:8545"

[chain]
expected_id = 31337

[contract]
address = "0x000000000000000000000000000000000000dEaD"
"#
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.wallet.rpc_url, "http://localhost:8545");
        assert_eq!(config.chain.expected_id, 31337);
        assert_eq!(
            config.contract.address,
            "0x000000000000000000000000000000000000dEaD"
        );
        // Unspecified sections fall back to defaults.
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_generated_template_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.wallet.rpc_url, default_rpc_url());
        assert_eq!(config.chain.expected_id, default_chain_id());
        // The template's empty key is filtered out of the wallet config.
        assert!(config.wallet_config().private_key.is_none());
    }

    #[test]
    fn test_wallet_config_conversion() {
        let mut config = Config::default();
        config.wallet.private_key = Some("  0xabc  ".to_string());
        let wallet_config = config.wallet_config();
        assert_eq!(wallet_config.private_key.as_deref(), Some("0xabc"));
        assert_eq!(wallet_config.expected_chain_id, wallet::SEPOLIA_CHAIN_ID);
    }
}
