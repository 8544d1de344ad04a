//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use solana_sdk::native_token::LAMPORTS_PER_SOL;

/// Root configuration for the devnet ping client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Cluster connection settings (RPC endpoint, commitment).
    pub cluster: ClusterConfig,

    /// Funding thresholds for the airdrop check.
    pub funding: FundingConfig,

    /// Wallet secret sourcing and persistence.
    pub wallet: WalletConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Cluster connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Commitment level for queries and confirmation (processed, confirmed, finalized).
    pub commitment: String,

    /// Cluster name appended to explorer links (`?cluster=...`).
    pub explorer_cluster: String,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://api.devnet.solana.com".to_string(),
            commitment: "confirmed".to_string(),
            explorer_cluster: "devnet".to_string(),
        }
    }
}

/// Funding assurance configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FundingConfig {
    /// Balance floor in lamports; below this a single airdrop is requested.
    pub min_balance_lamports: u64,

    /// Airdrop request size in lamports.
    pub airdrop_lamports: u64,
}

impl Default for FundingConfig {
    fn default() -> Self {
        Self {
            min_balance_lamports: LAMPORTS_PER_SOL,
            airdrop_lamports: LAMPORTS_PER_SOL,
        }
    }
}

/// Wallet secret configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Environment variable holding the serialized secret key.
    pub secret_env_var: String,

    /// Env file written when a fresh keypair is generated.
    pub env_file: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            secret_env_var: "PRIVATE_KEY".to_string(),
            env_file: ".env".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
