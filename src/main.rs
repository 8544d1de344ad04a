//! Devnet ping client entry point.
//!
//! One run resolves a signing identity, tops it up from the faucet when the
//! balance sits below the floor, submits a single empty instruction to the
//! ping program, and prints an explorer link for the confirmed transaction.

use std::path::PathBuf;

use clap::Parser;
use solana_sdk::signature::Signer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devnet_ping::config::loader::{load_config, ConfigError};
use devnet_ping::config::validation::validate_config;
use devnet_ping::config::AppConfig;
use devnet_ping::ledger::ping::{explorer_url, submit_ping};
use devnet_ping::ledger::RpcLedgerClient;
use devnet_ping::wallet::{resolve_identity, EnvFileStore};

/// Ping a fixed program on the Solana devnet.
#[derive(Parser, Debug)]
#[command(name = "devnet-ping", version)]
struct Cli {
    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the cluster RPC endpoint URL.
    #[arg(long)]
    rpc_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Pull a previously persisted secret into the environment before reading it.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(rpc_url) = cli.rpc_url {
        config.cluster.rpc_url = rpc_url;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(&config.observability.log_level)
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("devnet-ping v0.1.0 starting");
    tracing::info!(
        rpc_url = %config.cluster.rpc_url,
        commitment = %config.cluster.commitment,
        min_balance_lamports = config.funding.min_balance_lamports,
        "Configuration loaded"
    );

    // The ambient secret is captured exactly once; everything downstream gets
    // it through the store.
    let env_secret = std::env::var(&config.wallet.secret_env_var).ok();
    let store = EnvFileStore::new(
        &config.wallet.secret_env_var,
        config.wallet.env_file.clone(),
        env_secret,
    );

    let client = RpcLedgerClient::new(&config.cluster)?;

    let signer = resolve_identity(&client, &store, &config.funding).await?;
    tracing::info!(pubkey = %signer.pubkey(), "signer ready");

    let signature = submit_ping(&client, &signer).await?;
    println!(
        "{}",
        explorer_url(&signature, &config.cluster.explorer_cluster)
    );

    tracing::info!("finished successfully");
    Ok(())
}
