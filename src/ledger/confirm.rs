//! Confirmation polling.
//!
//! A submitted signature is polled until the cluster reports a verdict. The
//! only bound is the one the network itself enforces: once the chain's block
//! height passes the blockhash's last-valid height, the transaction can no
//! longer land and the wait fails.

use std::time::Duration;

use solana_sdk::signature::Signature;
use tracing::debug;

use crate::ledger::client::LedgerClient;
use crate::ledger::types::{LedgerError, LedgerResult};

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Block until the cluster confirms or rejects `signature`.
///
/// # Arguments
/// * `signature` - Signature to monitor
/// * `last_valid_block_height` - Expiry height of the blockhash the
///   transaction referenced
pub async fn wait_for_confirmation<C: LedgerClient>(
    client: &C,
    signature: &Signature,
    last_valid_block_height: u64,
) -> LedgerResult<()> {
    loop {
        match client.signature_status(signature).await? {
            Some(Ok(())) => {
                debug!(%signature, "transaction confirmed");
                return Ok(());
            }
            Some(Err(e)) => {
                return Err(LedgerError::TransactionFailed {
                    signature: *signature,
                    reason: e.to_string(),
                });
            }
            None => {
                let block_height = client.block_height().await?;
                if block_height > last_valid_block_height {
                    return Err(LedgerError::BlockhashExpired {
                        signature: *signature,
                        block_height,
                        last_valid_block_height,
                    });
                }
                debug!(%signature, block_height, "transaction pending");
                tokio::time::sleep(POLL_INTERVAL).await;
            }
        }
    }
}
