//! Recurring template item model.

use super::ItemId;
use serde::{Deserialize, Serialize};

/// One recurring task in the user's template.
///
/// `order` is the display/iteration position. Missing fields in older
/// stored data decode to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateItem {
    pub id: ItemId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub order: u32,
}
