//! Document load/save over a record repository.
//!
//! # Responsibility
//! - Produce a usable `Document` from whatever is stored, including nothing.
//! - Persist a `Document` as one whole-record overwrite.
//!
//! # Invariants
//! - `load_document` never fails; storage and decode problems fall back to
//!   defaults and are logged, never surfaced.
//! - `save_document` never panics or propagates; failure is a `false`
//!   return and the caller's in-memory document stays authoritative.

use crate::model::document::Document;
use crate::model::migration::merge_stored_document;
use crate::repo::document_repo::{DocumentRepository, RepoError};
use chrono::NaiveDate;
use log::{debug, error, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key the document is stored under.
pub const STORAGE_KEY: &str = "dilly-data";

/// Reason a save did not reach storage.
#[derive(Debug)]
pub enum SaveError {
    Serialize(serde_json::Error),
    Repo(RepoError),
}

impl Display for SaveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "failed to serialize document: {err}"),
            Self::Repo(err) => write!(f, "failed to write document: {err}"),
        }
    }
}

impl Error for SaveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

/// Loads and saves the single persisted document.
pub struct DocumentStore<R: DocumentRepository> {
    repo: R,
    key: String,
}

impl<R: DocumentRepository> DocumentStore<R> {
    /// Store using the default `STORAGE_KEY`.
    pub fn new(repo: R) -> Self {
        Self::with_key(repo, STORAGE_KEY)
    }

    pub fn with_key(repo: R, key: impl Into<String>) -> Self {
        Self {
            repo,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the stored document and merges it over defaults for `today`.
    pub fn load_document(&self, today: NaiveDate) -> Document {
        let raw = match self.repo.read_document(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=doc_load module=store status=empty");
                return Document::new_default(today);
            }
            Err(err) => {
                warn!("event=doc_load module=store status=fallback reason=read_failed error={err}");
                return Document::new_default(today);
            }
        };

        let merged = merge_stored_document(&raw, today);
        let report = &merged.report;
        if report.unreadable {
            warn!(
                "event=doc_load module=store status=fallback reason=unparsable bytes={}",
                raw.len()
            );
        } else if !report.is_clean() {
            warn!(
                "event=doc_load module=store status=repaired defaulted_fields={} dropped_entries={} theme_reset={}",
                report.defaulted_fields.join(","),
                report.dropped_entries,
                report.theme_reset
            );
        } else {
            debug!("event=doc_load module=store status=ok bytes={}", raw.len());
        }
        merged.document
    }

    /// Writes the whole document. Returns `false` when storage rejected it.
    pub fn save_document(&self, document: &Document) -> bool {
        match self.try_save_document(document) {
            Ok(()) => true,
            Err(err) => {
                error!("event=doc_save module=store status=error error={err}");
                false
            }
        }
    }

    /// Writes the whole document, reporting why a write failed.
    pub fn try_save_document(&self, document: &Document) -> Result<(), SaveError> {
        let raw = serde_json::to_string(document).map_err(SaveError::Serialize)?;
        self.repo
            .write_document(&self.key, &raw)
            .map_err(SaveError::Repo)?;
        debug!("event=doc_save module=store status=ok bytes={}", raw.len());
        Ok(())
    }
}
