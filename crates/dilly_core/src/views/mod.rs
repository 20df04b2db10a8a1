//! Side-effect-free queries over a `Document`.
//!
//! Everything here is derived on demand; nothing is cached or persisted.

mod display;
mod scorecard;

pub use display::{date_label, relative_time};
pub use scorecard::Scorecard;

use crate::model::document::Document;
use crate::model::task::Task;
use chrono::{DateTime, FixedOffset};
use std::cmp::Reverse;

/// One completed task with its stored completion timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoneEntry<'a> {
    pub task: Task<'a>,
    pub completed_at: &'a str,
}

impl Document {
    /// Pending tasks in display order. Ids that resolve to nothing are
    /// skipped.
    pub fn pending_tasks(&self) -> Vec<Task<'_>> {
        self.current_day
            .pending
            .iter()
            .filter_map(|id| self.find_task(id))
            .collect()
    }

    /// Completed tasks, most recently completed first.
    ///
    /// Unparsable timestamps sort last; ties break by id.
    pub fn done_tasks(&self) -> Vec<DoneEntry<'_>> {
        let mut entries: Vec<DoneEntry<'_>> = self
            .current_day
            .done
            .iter()
            .filter_map(|(id, completed_at)| {
                self.find_task(id).map(|task| DoneEntry {
                    task,
                    completed_at: completed_at.as_str(),
                })
            })
            .collect();
        entries.sort_by_key(|entry| {
            (
                Reverse(parse_timestamp(entry.completed_at)),
                entry.task.id(),
            )
        });
        entries
    }

    pub fn is_done(&self, id: &str) -> bool {
        self.current_day.is_done(id)
    }

    pub fn scorecard(&self) -> Scorecard {
        Scorecard::compute(self)
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).ok()
}
