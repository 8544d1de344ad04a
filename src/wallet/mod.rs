//! Signing identity subsystem.
//!
//! # Data Flow
//! ```text
//! Environment (dotenv preload, captured once in main)
//!     → store.rs (SecretStore: load stored secret / persist new one)
//!     → keypair.rs (secret codec, resolve_identity)
//!     → Keypair used for funding and signing
//! ```
//!
//! # Security Constraints
//! - Secret keys only from the captured environment value or generation
//! - Never log secret material
//! - Generation persists the secret so later runs reuse the same identity

pub mod keypair;
pub mod store;

pub use keypair::{format_secret, parse_secret, resolve_identity, WalletError};
pub use store::{EnvFileStore, MemoryStore, SecretStore};
