//! Remote ledger client.
//!
//! # Responsibilities
//! - Define the ledger capability the workflow depends on
//! - Implement it over the cluster's JSON-RPC endpoint
//! - Map SDK errors into [`LedgerError`]
//!
//! The workflow only ever talks to [`LedgerClient`], so tests can substitute a
//! deterministic fake for the network.

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::{Transaction, TransactionError};

use crate::config::schema::ClusterConfig;
use crate::ledger::types::{LedgerError, LedgerResult};

/// The five remote operations a run performs.
#[allow(async_fn_in_trait)]
pub trait LedgerClient {
    /// Lamport balance of an account.
    async fn balance(&self, pubkey: &Pubkey) -> LedgerResult<u64>;

    /// Request test funds for an account; returns the funding signature.
    async fn request_airdrop(&self, pubkey: &Pubkey, lamports: u64) -> LedgerResult<Signature>;

    /// Latest blockhash and the last block height at which it is valid.
    async fn latest_blockhash(&self) -> LedgerResult<(Hash, u64)>;

    /// Current block height, used to detect blockhash expiry.
    async fn block_height(&self) -> LedgerResult<u64>;

    /// Processed status of a signature: `None` while unseen, then the
    /// cluster's accept/reject verdict.
    async fn signature_status(
        &self,
        signature: &Signature,
    ) -> LedgerResult<Option<Result<(), TransactionError>>>;

    /// Submit a signed transaction; returns its identifying signature.
    async fn send_transaction(&self, transaction: &Transaction) -> LedgerResult<Signature>;
}

/// [`LedgerClient`] over a cluster JSON-RPC endpoint.
pub struct RpcLedgerClient {
    rpc: RpcClient,
    commitment: CommitmentConfig,
    rpc_url: String,
}

impl RpcLedgerClient {
    /// Create a client for the configured cluster.
    pub fn new(config: &ClusterConfig) -> LedgerResult<Self> {
        let commitment = parse_commitment(&config.commitment)?;
        let rpc = RpcClient::new_with_commitment(config.rpc_url.clone(), commitment);

        tracing::info!(
            rpc_url = %config.rpc_url,
            commitment = %config.commitment,
            "ledger client initialized"
        );

        Ok(Self {
            rpc,
            commitment,
            rpc_url: config.rpc_url.clone(),
        })
    }
}

fn parse_commitment(level: &str) -> LedgerResult<CommitmentConfig> {
    match level {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => Err(LedgerError::UnsupportedCommitment(other.to_string())),
    }
}

impl LedgerClient for RpcLedgerClient {
    async fn balance(&self, pubkey: &Pubkey) -> LedgerResult<u64> {
        self.rpc
            .get_balance(pubkey)
            .await
            .map_err(|e| LedgerError::Rpc(format!("balance query failed: {e}")))
    }

    async fn request_airdrop(&self, pubkey: &Pubkey, lamports: u64) -> LedgerResult<Signature> {
        self.rpc
            .request_airdrop(pubkey, lamports)
            .await
            .map_err(|e| LedgerError::Rpc(format!("airdrop request failed: {e}")))
    }

    async fn latest_blockhash(&self) -> LedgerResult<(Hash, u64)> {
        self.rpc
            .get_latest_blockhash_with_commitment(self.commitment)
            .await
            .map_err(|e| LedgerError::Rpc(format!("blockhash query failed: {e}")))
    }

    async fn block_height(&self) -> LedgerResult<u64> {
        self.rpc
            .get_block_height()
            .await
            .map_err(|e| LedgerError::Rpc(format!("block height query failed: {e}")))
    }

    async fn signature_status(
        &self,
        signature: &Signature,
    ) -> LedgerResult<Option<Result<(), TransactionError>>> {
        self.rpc
            .get_signature_status(signature)
            .await
            .map_err(|e| LedgerError::Rpc(format!("signature status query failed: {e}")))
    }

    async fn send_transaction(&self, transaction: &Transaction) -> LedgerResult<Signature> {
        self.rpc
            .send_transaction(transaction)
            .await
            .map_err(|e| LedgerError::Rpc(format!("transaction submission failed: {e}")))
    }
}

impl std::fmt::Debug for RpcLedgerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcLedgerClient")
            .field("rpc_url", &self.rpc_url)
            .field("commitment", &self.commitment)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commitment_levels() {
        assert_eq!(
            parse_commitment("confirmed").unwrap(),
            CommitmentConfig::confirmed()
        );
        assert_eq!(
            parse_commitment("finalized").unwrap(),
            CommitmentConfig::finalized()
        );
        let err = parse_commitment("instant").unwrap_err();
        assert!(matches!(err, LedgerError::UnsupportedCommitment(_)));
    }

    #[test]
    fn test_client_creation_from_default_config() {
        let client = RpcLedgerClient::new(&ClusterConfig::default()).unwrap();
        assert_eq!(client.rpc_url, "https://api.devnet.solana.com");
    }

    #[test]
    fn test_client_rejects_unknown_commitment() {
        let mut config = ClusterConfig::default();
        config.commitment = "instant".to_string();
        assert!(RpcLedgerClient::new(&config).is_err());
    }
}
