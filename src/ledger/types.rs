//! Ledger-specific error definitions.

use solana_sdk::signature::Signature;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Commitment level from configuration is not one the cluster understands.
    #[error("unsupported commitment level '{0}'")]
    UnsupportedCommitment(String),

    /// The cluster processed the transaction and rejected it.
    #[error("transaction {signature} failed: {reason}")]
    TransactionFailed { signature: Signature, reason: String },

    /// The blockhash the transaction referenced expired before confirmation.
    #[error(
        "blockhash expired before {signature} was confirmed \
         (block height {block_height}, last valid {last_valid_block_height})"
    )]
    BlockhashExpired {
        signature: Signature,
        block_height: u64,
        last_valid_block_height: u64,
    },
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Rpc("connection refused".to_string());
        assert_eq!(err.to_string(), "RPC error: connection refused");

        let err = LedgerError::BlockhashExpired {
            signature: Signature::default(),
            block_height: 205,
            last_valid_block_height: 200,
        };
        assert!(err.to_string().contains("block height 205"));
        assert!(err.to_string().contains("last valid 200"));
    }

    #[test]
    fn test_transaction_failed_carries_reason() {
        let err = LedgerError::TransactionFailed {
            signature: Signature::default(),
            reason: "insufficient funds for fee".to_string(),
        };
        assert!(err.to_string().contains("insufficient funds"));
    }
}
