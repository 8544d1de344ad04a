//! Identity resolution and secret key serialization.
//!
//! # Security
//! - Secret keys are never logged; log lines carry the public key only
//! - The secret reaches this module through an explicit [`SecretStore`], not
//!   ambient process state

use solana_sdk::signature::{Keypair, Signer};
use thiserror::Error;
use tracing::info;

use crate::config::schema::FundingConfig;
use crate::ledger::client::LedgerClient;
use crate::ledger::funding::ensure_funded;
use crate::ledger::types::LedgerError;
use crate::wallet::store::{SecretStore, StoreError};

/// Serialized secret length: 32-byte seed followed by the 32-byte public key.
pub const SECRET_KEY_BYTES: usize = 64;

/// Errors during identity resolution.
#[derive(Debug, Error)]
pub enum WalletError {
    /// The stored secret could not be turned back into a keypair.
    #[error("malformed secret key: {0}")]
    MalformedSecret(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Reconstruct a keypair from its serialized form, a JSON array of bytes.
///
/// The same secret always reproduces the same public key.
pub fn parse_secret(secret: &str) -> Result<Keypair, WalletError> {
    let bytes: Vec<u8> = serde_json::from_str(secret)
        .map_err(|e| WalletError::MalformedSecret(format!("expected a JSON byte array: {e}")))?;

    if bytes.len() != SECRET_KEY_BYTES {
        return Err(WalletError::MalformedSecret(format!(
            "expected {SECRET_KEY_BYTES} bytes, got {}",
            bytes.len()
        )));
    }

    Keypair::from_bytes(&bytes).map_err(|e| WalletError::MalformedSecret(e.to_string()))
}

/// Serialize a keypair as a bracketed, comma-separated byte list.
///
/// Round-trips through [`parse_secret`].
pub fn format_secret(keypair: &Keypair) -> String {
    let bytes = keypair.to_bytes();
    let mut out = String::with_capacity(SECRET_KEY_BYTES * 4);
    out.push('[');
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&byte.to_string());
    }
    out.push(']');
    out
}

/// Obtain the signing identity for this run.
///
/// A stored secret is deserialized and topped up; with no stored secret, a
/// fresh keypair is generated, funded, and then persisted so the next run
/// reloads the same identity. Funding always happens against the identity
/// that is returned.
pub async fn resolve_identity<C, S>(
    client: &C,
    store: &S,
    funding: &FundingConfig,
) -> Result<Keypair, WalletError>
where
    C: LedgerClient,
    S: SecretStore,
{
    match store.load()? {
        Some(secret) => {
            let keypair = parse_secret(&secret)?;
            info!(pubkey = %keypair.pubkey(), "loaded signing identity from stored secret");
            ensure_funded(client, &keypair.pubkey(), funding).await?;
            Ok(keypair)
        }
        None => {
            info!("no stored secret found, generating new keypair");
            let keypair = Keypair::new();
            ensure_funded(client, &keypair.pubkey(), funding).await?;
            store.save(&format_secret(&keypair))?;
            info!(pubkey = %keypair.pubkey(), "new signing identity persisted");
            Ok(keypair)
        }
    }
}
