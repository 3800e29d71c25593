//! Dreamrocket CLI
//!
//! Headless command-line interface for the Mood Diary flows:
//! - Read the stored dream
//! - Send a new one and wait for confirmation
//! - Check endpoint / wallet / network status
//! - Generate a default config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dreamrocket::config::{generate_default_config, Config};
use dreamrocket::{contract, session, wallet};
use dreamrocket::wallet::WalletConnector;

#[derive(Parser)]
#[command(name = "dreamrocket")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Mood Diary dApp client for the terminal")]
#[command(long_about = "Dreamrocket talks to the Mood Diary contract.\nRead the dream stored on-chain, or send your own to the moon.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path (default: standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON-RPC endpoint override
    #[arg(long, global = true)]
    pub rpc_url: Option<String>,

    /// Contract address override
    #[arg(long, global = true)]
    pub contract: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read the dream currently stored in the contract
    Read,

    /// Send a new dream on-chain, wait for it to mine, and read it back
    Send {
        /// Dream text (must be non-empty)
        text: String,
    },

    /// Probe the RPC endpoint and check the wallet/network setup
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "dreamrocket=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.rpc_url {
        config.wallet.rpc_url = url;
    }
    if let Some(address) = cli.contract {
        config.contract.address = address;
    }

    match cli.command {
        Commands::Read => {
            let address = contract::parse_address(&config.contract.address)?;
            let mut connector = WalletConnector::new(config.wallet_config());
            let handle = connector.connect().await?;

            let mood = contract::read_mood(&handle, address).await?;
            println!("{mood}");
        }

        Commands::Send { text } => {
            let text = session::validate_input(&text)?;
            let address = contract::parse_address(&config.contract.address)?;
            let mut connector = WalletConnector::new(config.wallet_config());
            let handle = connector.connect().await?;

            let mined = contract::write_mood(&handle, address, &text).await?;
            println!(
                "Mined: tx {} (block {})",
                mined.tx_hash,
                mined
                    .block_number
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "pending".to_string())
            );

            // Same flow as the page: confirm by reading the value back.
            let mood = contract::read_mood(&handle, address).await?;
            println!("Stored dream: {mood}");
        }

        Commands::Status => {
            let wallet_config = config.wallet_config();

            match wallet::probe(&wallet_config.rpc_url, wallet_config.request_timeout_ms).await {
                Ok(version) => {
                    println!("Endpoint:  {} ({version})", wallet_config.rpc_url);
                }
                Err(err) => {
                    println!("Endpoint:  {} - unreachable: {err}", wallet_config.rpc_url);
                    return Ok(());
                }
            }

            println!(
                "Expected:  chain {} ({})",
                wallet_config.expected_chain_id,
                wallet::chain_name(wallet_config.expected_chain_id)
            );
            println!("Contract:  {}", config.contract.address);

            let mut connector = WalletConnector::new(wallet_config);
            match connector.connect().await {
                Ok(handle) => {
                    println!(
                        "Wallet:    {} on chain {} ({})",
                        handle.sender(),
                        handle.chain_id(),
                        wallet::chain_name(handle.chain_id())
                    );
                }
                Err(err) => {
                    println!("Wallet:    not connected - {err}");
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Wrote config to {}", path.display());
                }
                None => print!("{content}"),
            }
        }
    }

    Ok(())
}
