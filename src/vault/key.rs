//! Vault encryption key
//!
//! A single 32-byte AES-256 key, injected explicitly from configuration.
//! The key is never given a default value: vault operations fail up front
//! when the key is absent rather than falling back to a weak built-in.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{KeeperError, KeeperResult};

/// Environment variable supplying the vault key material
pub const VAULT_KEY_ENV: &str = "VAULT_SECRET_KEY";

/// Minimum acceptable key material length in bytes
pub const MIN_KEY_LEN: usize = 32;

/// A 32-byte vault encryption key, zeroed from memory on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct VaultKey {
    key: [u8; 32],
}

impl VaultKey {
    /// Build a key from raw secret material.
    ///
    /// Requires at least 32 bytes and uses the first 32, so longer
    /// passphrase-style secrets are accepted unchanged.
    pub fn from_secret(secret: &str) -> KeeperResult<Self> {
        let bytes = secret.as_bytes();
        if bytes.len() < MIN_KEY_LEN {
            return Err(KeeperError::Config(format!(
                "Vault key must be at least {} bytes ({} provided)",
                MIN_KEY_LEN,
                bytes.len()
            )));
        }

        let mut key = [0u8; 32];
        key.copy_from_slice(&bytes[..32]);
        Ok(Self { key })
    }

    /// Build a key from the `VAULT_SECRET_KEY` environment variable.
    ///
    /// There is no fallback value; a missing variable is a configuration
    /// error.
    pub fn from_env() -> KeeperResult<Self> {
        let secret = std::env::var(VAULT_KEY_ENV).map_err(|_| {
            KeeperError::Config(format!(
                "{} is not set; vault operations require a {}-byte secret key",
                VAULT_KEY_ENV, MIN_KEY_LEN
            ))
        })?;
        Self::from_secret(&secret)
    }

    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.key
    }
}
