//! Funding assurance via the devnet faucet.

use solana_sdk::native_token::lamports_to_sol;
use solana_sdk::pubkey::Pubkey;
use tracing::info;

use crate::config::schema::FundingConfig;
use crate::ledger::client::LedgerClient;
use crate::ledger::confirm::wait_for_confirmation;
use crate::ledger::types::LedgerResult;

/// Top up `pubkey` when its balance sits below the configured floor.
///
/// At most one airdrop is requested per run. The funding transaction is
/// confirmed against the latest blockhash before the balance is re-queried
/// and reported; the new balance is not re-checked against the floor — a
/// still-underfunded identity surfaces as a submission failure later.
pub async fn ensure_funded<C: LedgerClient>(
    client: &C,
    pubkey: &Pubkey,
    config: &FundingConfig,
) -> LedgerResult<()> {
    let balance = client.balance(pubkey).await?;
    info!(lamports = balance, sol = lamports_to_sol(balance), "current balance");

    if balance >= config.min_balance_lamports {
        return Ok(());
    }

    info!(
        lamports = config.airdrop_lamports,
        sol = lamports_to_sol(config.airdrop_lamports),
        "balance below floor, requesting airdrop"
    );
    let signature = client.request_airdrop(pubkey, config.airdrop_lamports).await?;
    let (_blockhash, last_valid_block_height) = client.latest_blockhash().await?;
    wait_for_confirmation(client, &signature, last_valid_block_height).await?;

    let new_balance = client.balance(pubkey).await?;
    info!(
        lamports = new_balance,
        sol = lamports_to_sol(new_balance),
        "new balance"
    );
    Ok(())
}
