//! Remote ledger subsystem.
//!
//! # Data Flow
//! ```text
//! ClusterConfig (RPC URL, commitment)
//!     → client.rs (LedgerClient trait, RPC implementation)
//!     → funding.rs (balance floor check, single airdrop)
//!     → ping.rs (build, sign, submit one instruction)
//!     → confirm.rs (poll until confirmed or blockhash expires)
//! ```
//!
//! Every network touchpoint goes through the [`LedgerClient`] trait so the
//! workflow can run against a deterministic fake in tests.

pub mod client;
pub mod confirm;
pub mod funding;
pub mod ping;
pub mod types;

pub use client::{LedgerClient, RpcLedgerClient};
pub use funding::ensure_funded;
pub use ping::{explorer_url, submit_ping};
pub use types::{LedgerError, LedgerResult};
