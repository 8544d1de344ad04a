//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (lamport amounts, commitment levels)
//! - Check the RPC endpoint parses as a URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::AppConfig;
use solana_sdk::native_token::LAMPORTS_PER_SOL;

/// The devnet faucet rejects requests above this amount.
const MAX_AIRDROP_LAMPORTS: u64 = 2 * LAMPORTS_PER_SOL;

const COMMITMENT_LEVELS: &[&str] = &["processed", "confirmed", "finalized"];
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid RPC URL '{url}': {reason}")]
    InvalidRpcUrl { url: String, reason: String },

    #[error("unknown commitment level '{0}' (expected processed, confirmed or finalized)")]
    UnknownCommitment(String),

    #[error("airdrop_lamports must be nonzero")]
    ZeroAirdrop,

    #[error("airdrop_lamports {0} exceeds the faucet per-request cap of {MAX_AIRDROP_LAMPORTS}")]
    AirdropTooLarge(u64),

    #[error("min_balance_lamports must be nonzero")]
    ZeroMinBalance,

    #[error("wallet.secret_env_var must not be empty")]
    EmptySecretEnvVar,

    #[error("wallet.env_file must not be empty")]
    EmptyEnvFile,

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

/// Validate an already-deserialized configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = url::Url::parse(&config.cluster.rpc_url) {
        errors.push(ValidationError::InvalidRpcUrl {
            url: config.cluster.rpc_url.clone(),
            reason: e.to_string(),
        });
    }

    if !COMMITMENT_LEVELS.contains(&config.cluster.commitment.as_str()) {
        errors.push(ValidationError::UnknownCommitment(
            config.cluster.commitment.clone(),
        ));
    }

    if config.funding.airdrop_lamports == 0 {
        errors.push(ValidationError::ZeroAirdrop);
    } else if config.funding.airdrop_lamports > MAX_AIRDROP_LAMPORTS {
        errors.push(ValidationError::AirdropTooLarge(
            config.funding.airdrop_lamports,
        ));
    }

    if config.funding.min_balance_lamports == 0 {
        errors.push(ValidationError::ZeroMinBalance);
    }

    if config.wallet.secret_env_var.is_empty() {
        errors.push(ValidationError::EmptySecretEnvVar);
    }

    if config.wallet.env_file.is_empty() {
        errors.push(ValidationError::EmptyEnvFile);
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
