//! Daily-cycle operations.
//!
//! Per id within a day: `pending -> done -> pending (undo) -> ...`, and
//! `pending -> gone` through skip or delete.

use crate::model::day::{CurrentDay, OneOffItem};
use crate::model::document::{Document, Theme};
use crate::model::generate_item_id;
use crate::model::ItemId;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

impl Document {
    /// Starts the day over from the template.
    ///
    /// `pending` becomes every template id in template order; completions
    /// and one-off items are discarded.
    pub fn reset_day(&mut self, today: NaiveDate) {
        let pending: Vec<ItemId> = self
            .template_in_order()
            .into_iter()
            .map(|item| item.id.clone())
            .collect();
        self.current_day = CurrentDay {
            pending,
            ..CurrentDay::empty(today)
        };
    }

    /// Moves a pending id to `done`, stamped with `now`.
    ///
    /// No-op (returns `false`) when `id` is not pending.
    pub fn mark_done(&mut self, id: &str, now: DateTime<Utc>) -> bool {
        let day = &mut self.current_day;
        if !day.is_pending(id) {
            return false;
        }
        day.pending.retain(|pending_id| pending_id != id);
        day.done
            .insert(id.to_string(), now.to_rfc3339_opts(SecondsFormat::Millis, true));
        true
    }

    /// Moves a done id back to the end of `pending`.
    ///
    /// No-op when `id` is not done; never duplicates a pending id.
    pub fn undo(&mut self, id: &str) -> bool {
        let day = &mut self.current_day;
        if day.done.remove(id).is_none() {
            return false;
        }
        if !day.is_pending(id) {
            day.pending.push(id.to_string());
        }
        true
    }

    /// Drops a template item from today's pending list without recording a
    /// completion. It comes back on the next `reset_day`.
    ///
    /// One-off ids are not skippable; they are deleted instead.
    pub fn skip_today(&mut self, id: &str) -> bool {
        if !self.is_template_id(id) || !self.current_day.is_pending(id) {
            return false;
        }
        self.current_day
            .pending
            .retain(|pending_id| pending_id != id);
        true
    }

    /// Creates an untitled one-off task in the first category and queues it
    /// at the end of `pending`.
    pub fn add_one_off_task(&mut self) -> ItemId {
        let id = generate_item_id();
        let category = self.first_category_name();
        let day = &mut self.current_day;
        day.one_off_items.push(OneOffItem {
            id: id.clone(),
            title: String::new(),
            category,
        });
        day.pending.push(id.clone());
        id
    }

    /// Deletes a one-off task and purges its id from today's lists.
    pub fn delete_one_off_task(&mut self, id: &str) -> bool {
        let day = &mut self.current_day;
        let before = day.one_off_items.len();
        day.one_off_items.retain(|item| item.id != id);
        if day.one_off_items.len() == before {
            return false;
        }
        day.remove_everywhere(id);
        true
    }

    /// Stores a one-off title as given. Empty titles are valid here.
    pub fn update_one_off_title(&mut self, id: &str, title: &str) -> bool {
        match self.one_off_mut(id) {
            Some(item) => {
                item.title = title.to_string();
                true
            }
            None => false,
        }
    }

    pub fn update_one_off_category(&mut self, id: &str, category: &str) -> bool {
        match self.one_off_mut(id) {
            Some(item) => {
                item.category = category.to_string();
                true
            }
            None => false,
        }
    }

    /// Ends a one-off title edit session.
    ///
    /// A title that is blank after trimming deletes the task; anything else
    /// is stored trimmed. Returns the outcome so callers can re-render.
    pub fn finish_one_off_edit(&mut self, id: &str, title: &str) -> OneOffEditOutcome {
        if self.current_day.one_off(id).is_none() {
            return OneOffEditOutcome::NotFound;
        }
        let title = title.trim();
        if title.is_empty() {
            self.delete_one_off_task(id);
            return OneOffEditOutcome::Deleted;
        }
        self.update_one_off_title(id, title);
        OneOffEditOutcome::Saved
    }

    /// Replaces the pending order with `new_order`.
    ///
    /// Duplicates, ids that are currently done and ids that resolve to no
    /// task are dropped.
    pub fn reorder_pending(&mut self, new_order: &[ItemId]) {
        let mut pending: Vec<ItemId> = Vec::with_capacity(new_order.len());
        for id in new_order {
            if !self.current_day.is_done(id)
                && self.find_task(id).is_some()
                && !pending.contains(id)
            {
                pending.push(id.clone());
            }
        }
        self.current_day.pending = pending;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
    }

    fn one_off_mut(&mut self, id: &str) -> Option<&mut OneOffItem> {
        self.current_day
            .one_off_items
            .iter_mut()
            .find(|item| item.id == id)
    }
}

/// Result of `Document::finish_one_off_edit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneOffEditOutcome {
    Saved,
    Deleted,
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::OneOffEditOutcome;
    use crate::model::document::Document;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn done_timestamp_is_iso_utc_with_millis() {
        let mut doc = Document::new_default(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        let id = doc.add_one_off_task();
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 8, 30, 0).unwrap();

        assert!(doc.mark_done(&id, now));
        assert_eq!(doc.current_day.done[&id], "2026-10-17T08:30:00.000Z");
    }

    #[test]
    fn blank_edit_deletes_one_off() {
        let mut doc = Document::new_default(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        let id = doc.add_one_off_task();

        assert_eq!(doc.finish_one_off_edit(&id, "   "), OneOffEditOutcome::Deleted);
        assert!(doc.current_day.one_off_items.is_empty());
        assert!(doc.current_day.pending.is_empty());
        assert_eq!(doc.finish_one_off_edit(&id, "x"), OneOffEditOutcome::NotFound);
    }
}
