//! Vault secret encryption
//!
//! AES-256-CBC envelope encryption with an explicitly injected key. See
//! [`cipher::VaultCipher`] for the envelope format and failure semantics.

pub mod cipher;
pub mod key;

pub use cipher::{DecryptionError, VaultCipher};
pub use key::{VaultKey, MIN_KEY_LEN, VAULT_KEY_ENV};
