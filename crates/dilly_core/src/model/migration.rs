//! Defensive merge of stored document bytes over the default document.
//!
//! # Responsibility
//! - Turn whatever was persisted by any earlier build into a well-formed
//!   `Document`.
//! - Report what had to be defaulted so the store can log it.
//!
//! # Invariants
//! - Never fails: unreadable input yields the default document.
//! - Stored values win over defaults wherever they decode.
//! - `null` is treated as absent, for top-level fields and for the keys of
//!   individual list entries alike.
//! - Every `pending` id and `done` key resolves to a template item or a
//!   one-off item.
//! - Theme is revalidated against `Theme::ALL` on every load.

use super::category::seeded_categories;
use super::day::{CurrentDay, OneOffItem};
use super::document::{Document, Settings, Theme};
use super::template_item::TemplateItem;
use super::ItemId;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};

/// Result of merging stored data over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged {
    pub document: Document,
    pub report: MergeReport,
}

/// What the merge had to repair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Input was not a JSON object; the whole document is the default.
    pub unreadable: bool,
    /// Dotted paths of fields that were absent, null or undecodable.
    pub defaulted_fields: Vec<&'static str>,
    /// List/map entries dropped because they did not decode or were
    /// duplicates.
    pub dropped_entries: usize,
    /// A stored theme existed but is not recognized any more.
    pub theme_reset: bool,
}

impl MergeReport {
    /// True when the stored document was used as-is.
    pub fn is_clean(&self) -> bool {
        !self.unreadable
            && self.defaulted_fields.is_empty()
            && self.dropped_entries == 0
            && !self.theme_reset
    }
}

/// Merges raw stored bytes over the default document for `today`.
pub fn merge_stored_document(raw: &str, today: NaiveDate) -> Merged {
    let mut report = MergeReport::default();
    let root = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(root)) => root,
        _ => {
            report.unreadable = true;
            return Merged {
                document: Document::new_default(today),
                report,
            };
        }
    };

    let template = list_field::<TemplateItem>(&root, "template", &mut report)
        .unwrap_or_default();
    let categories = list_field(&root, "categories", &mut report)
        .filter(|categories: &Vec<_>| !categories.is_empty())
        .unwrap_or_else(seeded_categories);
    let current_day = merge_current_day(object_field(&root, "currentDay"), today, &mut report);
    let settings = merge_settings(object_field(&root, "settings"), &mut report);

    let mut document = Document {
        template,
        categories,
        current_day,
        settings,
    };
    normalize(&mut document, &mut report);

    Merged { document, report }
}

fn merge_current_day(
    stored: Option<&Map<String, Value>>,
    today: NaiveDate,
    report: &mut MergeReport,
) -> CurrentDay {
    let mut day = CurrentDay::empty(today);
    let Some(stored) = stored else {
        report.defaulted_fields.push("currentDay");
        return day;
    };

    match stored.get("dateString").and_then(Value::as_str) {
        Some(date) => day.date_string = date.to_string(),
        None => report.defaulted_fields.push("currentDay.dateString"),
    }

    match present(stored, "pending").and_then(Value::as_array) {
        Some(values) => {
            day.pending = values
                .iter()
                .filter_map(|value| value.as_str().map(str::to_string))
                .collect();
            report.dropped_entries += values.len() - day.pending.len();
        }
        None => report.defaulted_fields.push("currentDay.pending"),
    }

    match present(stored, "done").and_then(Value::as_object) {
        Some(entries) => {
            day.done = entries
                .iter()
                .filter_map(|(id, at)| at.as_str().map(|at| (id.clone(), at.to_string())))
                .collect::<BTreeMap<ItemId, String>>();
            report.dropped_entries += entries.len() - day.done.len();
        }
        None => report.defaulted_fields.push("currentDay.done"),
    }

    match list_values::<OneOffItem>(present(stored, "oneOffItems"), report) {
        Some(items) => day.one_off_items = items,
        None => report.defaulted_fields.push("currentDay.oneOffItems"),
    }

    day
}

fn merge_settings(stored: Option<&Map<String, Value>>, report: &mut MergeReport) -> Settings {
    let Some(stored) = stored else {
        report.defaulted_fields.push("settings");
        return Settings::default();
    };

    match present(stored, "theme") {
        Some(value) => match value.as_str().and_then(Theme::parse) {
            Some(theme) => Settings { theme },
            None => {
                report.theme_reset = true;
                Settings::default()
            }
        },
        None => {
            report.defaulted_fields.push("settings.theme");
            Settings::default()
        }
    }
}

/// Restores the structural invariants older data may violate.
fn normalize(document: &mut Document, report: &mut MergeReport) {
    let mut seen = HashSet::new();
    let before = document.template.len();
    document.template.retain(|item| seen.insert(item.id.clone()));
    report.dropped_entries += before - document.template.len();
    document.template.sort_by_key(|item| item.order);
    document.densify_order();

    let day = &mut document.current_day;
    let mut seen = HashSet::new();
    let before = day.one_off_items.len();
    day.one_off_items.retain(|item| seen.insert(item.id.clone()));
    report.dropped_entries += before - day.one_off_items.len();

    let known: HashSet<ItemId> = document
        .template
        .iter()
        .map(|item| item.id.clone())
        .chain(day.one_off_items.iter().map(|item| item.id.clone()))
        .collect();

    let before = day.done.len();
    day.done.retain(|id, _| known.contains(id));
    report.dropped_entries += before - day.done.len();

    let mut seen = HashSet::new();
    let before = day.pending.len();
    let done = &day.done;
    day.pending.retain(|id| {
        known.contains(id) && !done.contains_key(id) && seen.insert(id.clone())
    });
    report.dropped_entries += before - day.pending.len();
}

fn present<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}

fn object_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    present(object, key).and_then(Value::as_object)
}

fn list_field<T: DeserializeOwned>(
    object: &Map<String, Value>,
    key: &'static str,
    report: &mut MergeReport,
) -> Option<Vec<T>> {
    let decoded = list_values(present(object, key), report);
    if decoded.is_none() {
        report.defaulted_fields.push(key);
    }
    decoded
}

/// Decodes a JSON array element by element, dropping entries that do not
/// decode. Returns `None` when the value is not an array.
fn list_values<T: DeserializeOwned>(
    value: Option<&Value>,
    report: &mut MergeReport,
) -> Option<Vec<T>> {
    let values = value?.as_array()?;
    let decoded: Vec<T> = values
        .iter()
        .filter_map(|value| serde_json::from_value(without_null_keys(value)).ok())
        .collect();
    report.dropped_entries += values.len() - decoded.len();
    Some(decoded)
}

/// Copies a list entry, omitting object keys whose value is `null` so serde
/// field defaults apply to them.
fn without_null_keys(value: &Value) -> Value {
    match value {
        Value::Object(entry) => Value::Object(
            entry
                .iter()
                .filter(|(_, field)| !field.is_null())
                .map(|(key, field)| (key.clone(), field.clone()))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::merge_stored_document;
    use crate::model::document::Theme;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn non_object_json_is_unreadable() {
        let merged = merge_stored_document("[1, 2, 3]", today());
        assert!(merged.report.unreadable);
        assert_eq!(merged.document.categories.len(), 5);
    }

    #[test]
    fn unknown_theme_is_forced_to_default() {
        let merged = merge_stored_document(r#"{"settings": {"theme": "neon"}}"#, today());
        assert_eq!(merged.document.settings.theme, Theme::Hacker);
        assert!(merged.report.theme_reset);
    }

    #[test]
    fn undecodable_entries_are_dropped_not_fatal() {
        let raw = r#"{
            "template": [
                {"id": "a", "title": "Run", "category": "Fitness", "order": 0},
                {"title": "no id"},
                42
            ],
            "currentDay": {"dateString": "2026-10-16", "pending": ["a", 7], "done": {"b": 3}}
        }"#;
        let merged = merge_stored_document(raw, today());

        assert_eq!(merged.document.template.len(), 1);
        assert_eq!(merged.document.current_day.pending, ["a"]);
        assert!(merged.document.current_day.done.is_empty());
        assert_eq!(merged.report.dropped_entries, 4);
    }

    #[test]
    fn null_fields_count_as_absent() {
        let raw = r#"{"template": null, "currentDay": {"oneOffItems": null}}"#;
        let merged = merge_stored_document(raw, today());
        assert!(merged.document.template.is_empty());
        assert!(merged
            .report
            .defaulted_fields
            .contains(&"currentDay.oneOffItems"));
    }

    #[test]
    fn null_keys_inside_entries_fall_back_to_field_defaults() {
        let raw = r#"{
            "template": [
                {"id": "a", "title": "Run", "category": "Fitness", "order": null},
                {"id": "b", "title": null, "category": null, "order": 1}
            ],
            "currentDay": {
                "dateString": "2026-10-17",
                "pending": ["a", "b", "x"],
                "done": {},
                "oneOffItems": [{"id": "x", "title": null, "category": "Work"}]
            }
        }"#;
        let merged = merge_stored_document(raw, today());
        let document = &merged.document;

        let ids: Vec<_> = document.template.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(document.template[1].title, "");
        assert_eq!(document.template[1].category, "");
        assert_eq!(document.current_day.one_off_items[0].title, "");
        assert_eq!(document.current_day.pending, ["a", "b", "x"]);
        assert_eq!(merged.report.dropped_entries, 0);
    }

    #[test]
    fn orphaned_day_ids_are_dropped() {
        let raw = r#"{
            "template": [{"id": "a", "title": "Run", "category": "Fitness", "order": 0}],
            "currentDay": {
                "dateString": "2026-10-17",
                "pending": ["a", "deleted"],
                "done": {"gone": "2026-10-17T08:00:00.000Z"}
            }
        }"#;
        let merged = merge_stored_document(raw, today());

        assert_eq!(merged.document.current_day.pending, ["a"]);
        assert!(merged.document.current_day.done.is_empty());
        assert_eq!(merged.report.dropped_entries, 2);
    }
}
