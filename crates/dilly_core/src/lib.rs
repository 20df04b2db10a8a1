//! Core state store for the Dilly daily checklist.
//! This crate is the single source of truth for template/day invariants;
//! rendering layers call into it and re-render from the returned document.

pub mod db;
pub mod logging;
pub mod model;
pub mod ops;
pub mod repo;
pub mod service;
pub mod views;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{Category, MAX_CATEGORIES, SEEDED_CATEGORY_COUNT};
pub use model::day::{CurrentDay, OneOffItem};
pub use model::document::{Document, Settings, Theme};
pub use model::migration::{merge_stored_document, MergeReport, Merged};
pub use model::task::Task;
pub use model::template_item::TemplateItem;
pub use model::ItemId;
pub use ops::{OneOffEditOutcome, OpError, OpResult};
pub use repo::document_repo::{
    DocumentRepository, RepoError, RepoResult, SqliteDocumentRepository,
};
pub use service::checklist_service::{ChecklistService, Mutation};
pub use service::clock::{Clock, SystemClock};
pub use service::document_store::{DocumentStore, SaveError, STORAGE_KEY};
pub use views::{date_label, relative_time, DoneEntry, Scorecard};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
