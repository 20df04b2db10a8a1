//! Use-case services over document storage.
//!
//! # Responsibility
//! - Load and save the persisted document defensively.
//! - Expose every checklist operation as one persisted call.

pub mod checklist_service;
pub mod clock;
pub mod document_store;
