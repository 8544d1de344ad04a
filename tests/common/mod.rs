//! Shared fake ledger for integration testing.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::{Transaction, TransactionError};

use devnet_ping::ledger::types::{LedgerError, LedgerResult};
use devnet_ping::ledger::LedgerClient;

/// Deterministic in-memory stand-in for the cluster.
///
/// Balance queries replay a scripted sequence (the last value repeats once
/// the script runs out). Airdrops and submissions are recorded for
/// assertions; signatures confirm immediately unless a status script says
/// otherwise.
pub struct FakeLedger {
    balances: Mutex<VecDeque<u64>>,
    statuses: Mutex<VecDeque<Option<Result<(), TransactionError>>>>,
    pub airdrops: Mutex<Vec<(Pubkey, u64)>>,
    pub sent: Mutex<Vec<Transaction>>,
    pub fail_airdrop: AtomicBool,
    pub fail_send: AtomicBool,
    last_valid_block_height: u64,
}

impl FakeLedger {
    pub fn with_balances(balances: &[u64]) -> Self {
        Self {
            balances: Mutex::new(balances.iter().copied().collect()),
            statuses: Mutex::new(VecDeque::new()),
            airdrops: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
            fail_airdrop: AtomicBool::new(false),
            fail_send: AtomicBool::new(false),
            last_valid_block_height: 1_000,
        }
    }

    /// Queue explicit signature statuses ahead of the immediate-confirm default.
    pub fn script_statuses(&self, statuses: Vec<Option<Result<(), TransactionError>>>) {
        *self.statuses.lock().unwrap() = statuses.into();
    }

    pub fn airdrop_count(&self) -> usize {
        self.airdrops.lock().unwrap().len()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl LedgerClient for FakeLedger {
    async fn balance(&self, _pubkey: &Pubkey) -> LedgerResult<u64> {
        let mut balances = self.balances.lock().unwrap();
        match balances.len() {
            0 => panic!("balance queried with an empty script"),
            1 => Ok(*balances.front().unwrap()),
            _ => Ok(balances.pop_front().unwrap()),
        }
    }

    async fn request_airdrop(&self, pubkey: &Pubkey, lamports: u64) -> LedgerResult<Signature> {
        if self.fail_airdrop.load(Ordering::SeqCst) {
            return Err(LedgerError::Rpc("airdrop request failed: faucet dry".into()));
        }
        self.airdrops.lock().unwrap().push((*pubkey, lamports));
        Ok(Signature::default())
    }

    async fn latest_blockhash(&self) -> LedgerResult<(Hash, u64)> {
        Ok((Hash::new_from_array([7; 32]), self.last_valid_block_height))
    }

    async fn block_height(&self) -> LedgerResult<u64> {
        Ok(self.last_valid_block_height - 1)
    }

    async fn signature_status(
        &self,
        _signature: &Signature,
    ) -> LedgerResult<Option<Result<(), TransactionError>>> {
        match self.statuses.lock().unwrap().pop_front() {
            Some(status) => Ok(status),
            None => Ok(Some(Ok(()))),
        }
    }

    async fn send_transaction(&self, transaction: &Transaction) -> LedgerResult<Signature> {
        if self.fail_send.load(Ordering::SeqCst) {
            return Err(LedgerError::Rpc(
                "transaction submission failed: connection reset".into(),
            ));
        }
        self.sent.lock().unwrap().push(transaction.clone());
        Ok(transaction.signatures[0])
    }
}
