//! Unified task view over template items and one-off items.

use super::day::OneOffItem;
use super::template_item::TemplateItem;

/// A task shown on the daily list, tagged by where it lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task<'a> {
    /// Recurring item from the template.
    Template(&'a TemplateItem),
    /// Item that exists for the current day only.
    OneOff(&'a OneOffItem),
}

impl<'a> Task<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            Self::Template(item) => &item.id,
            Self::OneOff(item) => &item.id,
        }
    }

    pub fn title(&self) -> &'a str {
        match self {
            Self::Template(item) => &item.title,
            Self::OneOff(item) => &item.title,
        }
    }

    /// Category name; may not match any existing category.
    pub fn category(&self) -> &'a str {
        match self {
            Self::Template(item) => &item.category,
            Self::OneOff(item) => &item.category,
        }
    }

    pub fn is_one_off(&self) -> bool {
        matches!(self, Self::OneOff(_))
    }
}
