//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → passed explicitly to the workflow
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no reload path
//! - All fields have defaults so running without a config file works
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::AppConfig;
pub use schema::ClusterConfig;
pub use schema::FundingConfig;
pub use schema::WalletConfig;
