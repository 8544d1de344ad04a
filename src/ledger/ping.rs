//! The ping itself: one empty instruction to a fixed program.

use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;
use tracing::info;

use crate::ledger::client::LedgerClient;
use crate::ledger::confirm::wait_for_confirmation;
use crate::ledger::types::LedgerResult;

/// The on-chain program the ping targets.
pub const PING_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("ChT1B39WKLS8qUrkLvFDXMhEJ4F1XZzwUNHUt4AU9aVa");

/// The program's data account; executable code and state live in separate
/// accounts, and the ping writes to the state side.
pub const PING_DATA_ACCOUNT: Pubkey =
    Pubkey::from_str_const("Ah9K7dQ8EHaZqcAsgBW8w37yN2eAy3koFmUn4x3CJtod");

/// Build the single ping instruction: fixed program, the data account as the
/// one writable non-signing account, zero-length payload.
pub fn build_ping_instruction() -> Instruction {
    Instruction {
        program_id: PING_PROGRAM_ID,
        accounts: vec![AccountMeta::new(PING_DATA_ACCOUNT, false)],
        data: Vec::new(),
    }
}

/// Submit one ping transaction signed and fee-paid by `payer`, then block
/// until the cluster confirms it. Returns the transaction signature.
pub async fn submit_ping<C: LedgerClient>(
    client: &C,
    payer: &Keypair,
) -> LedgerResult<Signature> {
    let instruction = build_ping_instruction();
    let (blockhash, last_valid_block_height) = client.latest_blockhash().await?;

    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&payer.pubkey()),
        &[payer],
        blockhash,
    );

    let signature = client.send_transaction(&transaction).await?;
    info!(%signature, "ping transaction submitted");

    wait_for_confirmation(client, &signature, last_valid_block_height).await?;
    info!(%signature, "ping transaction confirmed");
    Ok(signature)
}

/// Explorer link for a submitted transaction.
pub fn explorer_url(signature: &Signature, cluster: &str) -> String {
    format!("https://explorer.solana.com/tx/{signature}?cluster={cluster}")
}
