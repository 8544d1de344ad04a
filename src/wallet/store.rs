//! Secret persistence behind a small store capability.
//!
//! The ambient environment value is captured once at startup and handed to the
//! store explicitly, so identity resolution never reads process state itself.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

/// Errors from secret store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Writing the secret file failed.
    #[error("failed to write secret file {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Load/save capability for the serialized secret key.
pub trait SecretStore {
    /// Return the stored secret, if any.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Persist the secret, creating or overwriting the underlying storage.
    fn save(&self, secret: &str) -> Result<(), StoreError>;
}

/// Store backed by the process environment (read) and an env file (write).
///
/// `load` returns the environment value captured at construction; `save`
/// writes `VAR=secret` to the env file so the next run picks it up through
/// the dotenv preload.
#[derive(Debug)]
pub struct EnvFileStore {
    var_name: String,
    path: PathBuf,
    env_value: Option<String>,
}

impl EnvFileStore {
    /// # Arguments
    /// * `var_name` - Environment variable name the secret lives under
    /// * `path` - Env file to write on save
    /// * `env_value` - The variable's value as captured at startup, if set
    pub fn new(var_name: &str, path: impl Into<PathBuf>, env_value: Option<String>) -> Self {
        Self {
            var_name: var_name.to_string(),
            path: path.into(),
            env_value,
        }
    }
}

impl SecretStore for EnvFileStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.env_value.clone())
    }

    fn save(&self, secret: &str) -> Result<(), StoreError> {
        let contents = format!("{}={}\n", self.var_name, secret);
        fs::write(&self.path, contents).map_err(|source| StoreError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    secret: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: Mutex::new(secret),
        }
    }

    /// Current stored secret, if any.
    pub fn secret(&self) -> Option<String> {
        self.secret.lock().unwrap().clone()
    }
}

impl SecretStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.secret.lock().unwrap().clone())
    }

    fn save(&self, secret: &str) -> Result<(), StoreError> {
        *self.secret.lock().unwrap() = Some(secret.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_file_store_load_returns_captured_value() {
        let store = EnvFileStore::new("PRIVATE_KEY", "/tmp/unused.env", Some("[1,2,3]".into()));
        assert_eq!(store.load().unwrap(), Some("[1,2,3]".to_string()));

        let empty = EnvFileStore::new("PRIVATE_KEY", "/tmp/unused.env", None);
        assert_eq!(empty.load().unwrap(), None);
    }

    #[test]
    fn test_env_file_store_save_writes_var_assignment() {
        let path = std::env::temp_dir().join("devnet_ping_store_test.env");
        let store = EnvFileStore::new("PRIVATE_KEY", &path, None);
        store.save("[4,5,6]").unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "PRIVATE_KEY=[4,5,6]\n");
    }

    #[test]
    fn test_env_file_store_save_overwrites() {
        let path = std::env::temp_dir().join("devnet_ping_store_overwrite.env");
        let store = EnvFileStore::new("PRIVATE_KEY", &path, None);
        store.save("[1]").unwrap();
        store.save("[2]").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "PRIVATE_KEY=[2]\n");
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::default();
        assert_eq!(store.load().unwrap(), None);
        store.save("[9,9]").unwrap();
        assert_eq!(store.load().unwrap(), Some("[9,9]".to_string()));
        assert_eq!(store.secret(), Some("[9,9]".to_string()));
    }
}
