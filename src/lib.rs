//! keeper-cli - Terminal-based personal management application
//!
//! This library provides the core functionality for keeper-cli: money
//! management with automatically reconciled bank account balances, an
//! encrypted password vault, sticky-note todos, and a daily diary.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, tasks, vaults, todos, diary)
//! - `ledger`: Pure balance reconciliation engine
//! - `vault`: Envelope encryption for vault secrets
//! - `storage`: JSON file document store
//! - `services`: Business logic layer
//! - `audit`: Append-only audit logging
//! - `export`: CSV export
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use keeper::config::{paths::KeeperPaths, settings::Settings};
//! use keeper::storage::Storage;
//!
//! let paths = KeeperPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod services;
pub mod storage;
pub mod vault;

pub use error::{KeeperError, KeeperResult};
