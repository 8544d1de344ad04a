//! Devnet Ping Client Library
//!
//! A small client for the Solana devnet: resolve a signing identity, make
//! sure it holds test funds, and ping a fixed on-chain program once.
//!
//! # Workflow
//! ```text
//! environment / .env ──▶ wallet (resolve or generate identity)
//!                              │
//!                              ▼
//!                        ledger::funding (balance check, airdrop if short)
//!                              │
//!                              ▼
//!                        ledger::ping (one empty instruction, sign, submit)
//!                              │
//!                              ▼
//!                        explorer link on stdout
//! ```

pub mod config;
pub mod ledger;
pub mod wallet;

pub use config::AppConfig;
pub use ledger::{LedgerClient, RpcLedgerClient};
pub use wallet::resolve_identity;
