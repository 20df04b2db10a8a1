//! Checklist use-case service.
//!
//! # Responsibility
//! - Run each operation as read-fresh, mutate, save-whole-document.
//! - Hand the resulting document back so callers can re-render from it.
//!
//! # Invariants
//! - The document is re-read from storage at the start of every call.
//! - Refused operations (`OpError`) do not write.
//! - A failed save never undoes the in-memory mutation; it is reported via
//!   `Mutation::saved`.

use super::clock::{Clock, SystemClock};
use super::document_store::DocumentStore;
use crate::model::document::{Document, Theme};
use crate::model::ItemId;
use crate::ops::{OneOffEditOutcome, OpResult};
use crate::repo::document_repo::DocumentRepository;
use crate::views::Scorecard;
use log::{debug, info};

/// Outcome of one persisted operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation<T> {
    /// Document after the operation, whether or not it was saved.
    pub document: Document,
    /// Operation-specific result (new id, changed flag, ...).
    pub value: T,
    /// `false` when storage rejected the write.
    pub saved: bool,
}

/// Checklist facade over a document repository.
pub struct ChecklistService<R: DocumentRepository, C: Clock = SystemClock> {
    store: DocumentStore<R>,
    clock: C,
}

impl<R: DocumentRepository> ChecklistService<R> {
    /// Creates a service on the default storage key and wall clock.
    pub fn new(repo: R) -> Self {
        Self::with_store(DocumentStore::new(repo), SystemClock)
    }
}

impl<R: DocumentRepository, C: Clock> ChecklistService<R, C> {
    pub fn with_store(store: DocumentStore<R>, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &DocumentStore<R> {
        &self.store
    }

    /// Current document as stored (merged over defaults).
    pub fn document(&self) -> Document {
        self.store.load_document(self.clock.today())
    }

    /// Persists `document` as-is.
    pub fn save_document(&self, document: &Document) -> bool {
        self.store.save_document(document)
    }

    pub fn scorecard(&self) -> Scorecard {
        self.document().scorecard()
    }

    pub fn add_template_item(&self, category: Option<&str>) -> Mutation<ItemId> {
        self.apply("add_template_item", |doc| doc.add_template_item(category))
    }

    pub fn delete_template_item(&self, id: &str) -> Mutation<bool> {
        self.apply("delete_template_item", |doc| doc.delete_template_item(id))
    }

    pub fn update_template_item_title(&self, id: &str, title: &str) -> OpResult<Mutation<bool>> {
        self.try_apply("update_template_item_title", |doc| {
            doc.update_template_item_title(id, title)
        })
    }

    pub fn update_template_item_category(&self, id: &str, category: &str) -> Mutation<bool> {
        self.apply("update_template_item_category", |doc| {
            doc.update_template_item_category(id, category)
        })
    }

    pub fn reorder_template(&self, new_order: &[ItemId]) -> Mutation<()> {
        self.apply("reorder_template", |doc| doc.reorder_template(new_order))
    }

    pub fn add_custom_category(&self) -> OpResult<Mutation<usize>> {
        self.try_apply("add_custom_category", Document::add_custom_category)
    }

    pub fn delete_category(&self, index: usize) -> OpResult<Mutation<bool>> {
        self.try_apply("delete_category", |doc| doc.delete_category(index))
    }

    pub fn rename_category(&self, index: usize, name: &str) -> OpResult<Mutation<bool>> {
        self.try_apply("rename_category", |doc| doc.rename_category(index, name))
    }

    pub fn set_category_emoji(&self, index: usize, emoji: &str) -> OpResult<Mutation<bool>> {
        self.try_apply("set_category_emoji", |doc| doc.set_category_emoji(index, emoji))
    }

    pub fn reset_day(&self) -> Mutation<()> {
        let today = self.clock.today();
        self.apply("reset_day", |doc| doc.reset_day(today))
    }

    pub fn mark_done(&self, id: &str) -> Mutation<bool> {
        let now = self.clock.now();
        self.apply("mark_done", |doc| doc.mark_done(id, now))
    }

    pub fn undo(&self, id: &str) -> Mutation<bool> {
        self.apply("undo", |doc| doc.undo(id))
    }

    pub fn skip_today(&self, id: &str) -> Mutation<bool> {
        self.apply("skip_today", |doc| doc.skip_today(id))
    }

    pub fn add_one_off_task(&self) -> Mutation<ItemId> {
        self.apply("add_one_off_task", Document::add_one_off_task)
    }

    pub fn delete_one_off_task(&self, id: &str) -> Mutation<bool> {
        self.apply("delete_one_off_task", |doc| doc.delete_one_off_task(id))
    }

    pub fn update_one_off_title(&self, id: &str, title: &str) -> Mutation<bool> {
        self.apply("update_one_off_title", |doc| doc.update_one_off_title(id, title))
    }

    pub fn update_one_off_category(&self, id: &str, category: &str) -> Mutation<bool> {
        self.apply("update_one_off_category", |doc| {
            doc.update_one_off_category(id, category)
        })
    }

    pub fn finish_one_off_edit(&self, id: &str, title: &str) -> Mutation<OneOffEditOutcome> {
        self.apply("finish_one_off_edit", |doc| doc.finish_one_off_edit(id, title))
    }

    pub fn reorder_pending(&self, new_order: &[ItemId]) -> Mutation<()> {
        self.apply("reorder_pending", |doc| doc.reorder_pending(new_order))
    }

    pub fn set_theme(&self, theme: Theme) -> Mutation<()> {
        self.apply("set_theme", |doc| doc.set_theme(theme))
    }

    fn apply<T>(&self, op: &'static str, mutate: impl FnOnce(&mut Document) -> T) -> Mutation<T> {
        let mut document = self.document();
        let value = mutate(&mut document);
        self.persist(op, document, value)
    }

    fn try_apply<T>(
        &self,
        op: &'static str,
        mutate: impl FnOnce(&mut Document) -> OpResult<T>,
    ) -> OpResult<Mutation<T>> {
        let mut document = self.document();
        match mutate(&mut document) {
            Ok(value) => Ok(self.persist(op, document, value)),
            Err(err) => {
                info!("event=op_apply module=service op={op} status=refused error={err}");
                Err(err)
            }
        }
    }

    fn persist<T>(&self, op: &'static str, document: Document, value: T) -> Mutation<T> {
        let saved = self.store.save_document(&document);
        debug!("event=op_apply module=service op={op} status=ok saved={saved}");
        Mutation {
            document,
            value,
            saved,
        }
    }
}
