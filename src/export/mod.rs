//! Data export

pub mod csv;

pub use csv::{export_account_csv, export_vault_csv};
