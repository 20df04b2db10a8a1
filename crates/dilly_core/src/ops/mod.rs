//! Document mutations.
//!
//! # Responsibility
//! - Implement every template, category and daily-cycle mutation as a
//!   method on `Document`.
//!
//! # Invariants
//! - Validation happens before any field is touched, so a refused
//!   operation leaves the document unchanged.
//! - Unknown ids and indices are no-ops (`false`), never errors.
//! - Operations never read the clock; callers pass `now`/`today`.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod category;
mod daily;
mod template;

pub use daily::OneOffEditOutcome;

pub type OpResult<T> = Result<T, OpError>;

/// Caller-visible refusal of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    /// Category list already holds the maximum number of entries.
    CategoryLimitReached { limit: usize },
    /// Seeded categories cannot be deleted or renamed.
    SeededCategory { index: usize },
    /// Template item titles must not be blank.
    BlankTitle,
    BlankCategoryName,
    BlankEmoji,
}

impl Display for OpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CategoryLimitReached { limit } => {
                write!(f, "category limit reached: at most {limit} categories allowed")
            }
            Self::SeededCategory { index } => {
                write!(f, "category at index {index} is seeded and cannot be changed")
            }
            Self::BlankTitle => write!(f, "title must not be blank"),
            Self::BlankCategoryName => write!(f, "category name must not be blank"),
            Self::BlankEmoji => write!(f, "category emoji must not be blank"),
        }
    }
}

impl Error for OpError {}

pub(crate) fn non_blank(value: &str, error: OpError) -> OpResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed.to_string())
}
