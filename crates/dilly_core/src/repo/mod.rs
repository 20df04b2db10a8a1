//! Repository layer for persisted records.
//!
//! # Responsibility
//! - Define the storage contract the document store depends on.
//! - Isolate SQLite query details from store orchestration.

pub mod document_repo;
