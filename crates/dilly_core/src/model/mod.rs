//! Persisted document model for the daily checklist.
//!
//! # Responsibility
//! - Define the single persisted aggregate (`Document`) and its parts.
//! - Define the defensive merge that turns stored bytes into a `Document`.
//!
//! # Invariants
//! - Template `order` values form a dense `0..n` permutation.
//! - An id is never in both `pending` and `done`.
//! - Items reference categories by name; dangling names are allowed.

pub mod category;
pub mod day;
pub mod document;
pub mod migration;
pub mod task;
pub mod template_item;

/// Opaque identifier shared by template items and one-off items.
///
/// Kept as a plain string so ids written by older builds stay valid.
pub type ItemId = String;

/// Generates a fresh opaque item id.
pub fn generate_item_id() -> ItemId {
    uuid::Uuid::new_v4().to_string()
}
