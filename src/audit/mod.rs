//! Audit logging system
//!
//! Every create/update/delete across the application is appended to a JSONL
//! audit log with before/after snapshots.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
