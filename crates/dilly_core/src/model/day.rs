//! Current-day record and one-off items.
//!
//! # Invariants
//! - `pending` holds unique ids.
//! - `pending` and the keys of `done` are disjoint.

use super::ItemId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Format of `CurrentDay::date_string`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Non-recurring task scoped to the current day.
///
/// `title` may be empty until the first edit completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneOffItem {
    pub id: ItemId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
}

/// The single active day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentDay {
    /// `YYYY-MM-DD`.
    pub date_string: String,
    /// Ids still to do today, in display order.
    pub pending: Vec<ItemId>,
    /// Completed ids mapped to their ISO-8601 completion timestamp.
    pub done: BTreeMap<ItemId, String>,
    pub one_off_items: Vec<OneOffItem>,
}

impl CurrentDay {
    /// Creates an empty day for `today`.
    pub fn empty(today: NaiveDate) -> Self {
        Self {
            date_string: format_date(today),
            pending: Vec::new(),
            done: BTreeMap::new(),
            one_off_items: Vec::new(),
        }
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.iter().any(|pending_id| pending_id == id)
    }

    pub fn is_done(&self, id: &str) -> bool {
        self.done.contains_key(id)
    }

    pub fn one_off(&self, id: &str) -> Option<&OneOffItem> {
        self.one_off_items.iter().find(|item| item.id == id)
    }

    /// Parsed `date_string`, or `None` for malformed legacy values.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date_string, DATE_FORMAT).ok()
    }

    pub(crate) fn remove_everywhere(&mut self, id: &str) {
        self.pending.retain(|pending_id| pending_id != id);
        self.done.remove(id);
    }
}

/// Formats a calendar date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
