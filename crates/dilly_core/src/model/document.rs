//! Root persisted aggregate.
//!
//! # Responsibility
//! - Own the template, categories, current day and settings as one unit.
//! - Provide the canonical default document used by first launch and by
//!   the defensive merge in `model::migration`.
//!
//! # Invariants
//! - The document is always written back whole; there are no partial writes.

use super::category::{seeded_categories, Category};
use super::day::CurrentDay;
use super::task::Task;
use super::template_item::TemplateItem;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Visual theme selected by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Hacker,
    Plain,
}

impl Theme {
    /// Every theme recognized by this build.
    pub const ALL: [Theme; 2] = [Theme::Hacker, Theme::Plain];

    /// Stable identifier used in stored data.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hacker => "hacker",
            Self::Plain => "plain",
        }
    }

    /// Parses a stored identifier. Unknown values return `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.as_str() == value)
    }
}

/// User preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
}

/// Single persisted aggregate owned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub template: Vec<TemplateItem>,
    pub categories: Vec<Category>,
    pub current_day: CurrentDay,
    pub settings: Settings,
}

impl Document {
    /// Fresh document: seeded categories, empty template, empty day for
    /// `today`, default theme.
    pub fn new_default(today: NaiveDate) -> Self {
        Self {
            template: Vec::new(),
            categories: seeded_categories(),
            current_day: CurrentDay::empty(today),
            settings: Settings::default(),
        }
    }

    pub fn template_item(&self, id: &str) -> Option<&TemplateItem> {
        self.template.iter().find(|item| item.id == id)
    }

    pub(crate) fn template_item_mut(&mut self, id: &str) -> Option<&mut TemplateItem> {
        self.template.iter_mut().find(|item| item.id == id)
    }

    pub fn is_template_id(&self, id: &str) -> bool {
        self.template_item(id).is_some()
    }

    /// Looks up a task by id across the template and today's one-offs.
    ///
    /// Template items win when an id somehow exists in both containers.
    pub fn find_task(&self, id: &str) -> Option<Task<'_>> {
        self.template_item(id)
            .map(Task::Template)
            .or_else(|| self.current_day.one_off(id).map(Task::OneOff))
    }

    /// Rewrites template `order` fields to match vector position.
    pub(crate) fn densify_order(&mut self) {
        for (index, item) in self.template.iter_mut().enumerate() {
            item.order = u32::try_from(index).unwrap_or(u32::MAX);
        }
    }
}
