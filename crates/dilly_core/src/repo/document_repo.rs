//! Raw document record storage.
//!
//! # Responsibility
//! - Read and overwrite opaque document records addressed by key.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Writes replace the whole record; there are no partial updates.
//! - Keys are non-blank.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Failure while reading or writing a stored record.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidKey(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidKey(key) => write!(f, "invalid storage key `{key}`"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidKey(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-addressed storage for serialized documents.
pub trait DocumentRepository {
    /// Returns the raw record, or `None` when nothing is stored under `key`.
    fn read_document(&self, key: &str) -> RepoResult<Option<String>>;
    /// Overwrites the record under `key`.
    fn write_document(&self, key: &str, raw: &str) -> RepoResult<()>;
}

/// SQLite-backed record storage using the `kv_store` table.
pub struct SqliteDocumentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDocumentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DocumentRepository for SqliteDocumentRepository<'_> {
    fn read_document(&self, key: &str) -> RepoResult<Option<String>> {
        ensure_key(key)?;
        let raw = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(raw)
    }

    fn write_document(&self, key: &str, raw: &str) -> RepoResult<()> {
        ensure_key(key)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, raw],
        )?;
        Ok(())
    }
}

impl<R: DocumentRepository + ?Sized> DocumentRepository for &R {
    fn read_document(&self, key: &str) -> RepoResult<Option<String>> {
        (**self).read_document(key)
    }

    fn write_document(&self, key: &str, raw: &str) -> RepoResult<()> {
        (**self).write_document(key, raw)
    }
}

fn ensure_key(key: &str) -> RepoResult<()> {
    if key.trim().is_empty() {
        return Err(RepoError::InvalidKey(key.to_string()));
    }
    Ok(())
}
