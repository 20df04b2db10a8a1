//! Category model and seeded defaults.

use serde::{Deserialize, Serialize};

/// Number of seeded categories at the head of the category list.
pub const SEEDED_CATEGORY_COUNT: usize = 5;
/// Hard cap on categories (seeded + custom).
pub const MAX_CATEGORIES: usize = 10;
/// Name given to a freshly added custom category.
pub const NEW_CATEGORY_NAME: &str = "New Category";
/// Emoji for new custom categories and for dangling category names.
pub const FALLBACK_EMOJI: &str = "📌";

const SEEDED: [(&str, &str); SEEDED_CATEGORY_COUNT] = [
    ("Fitness", "💪"),
    ("Health", "🍎"),
    ("Work", "💻"),
    ("Chore", "🧹"),
    ("Social", "👥"),
];

/// Task category. `name` acts as the foreign key from items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub emoji: String,
}

impl Category {
    pub fn new(name: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emoji: emoji.into(),
        }
    }
}

/// Returns the seeded category list in canonical order.
pub fn seeded_categories() -> Vec<Category> {
    SEEDED
        .iter()
        .map(|(name, emoji)| Category::new(*name, *emoji))
        .collect()
}

/// Returns whether the category at `index` is seeded (name immutable,
/// not deletable).
pub fn is_seeded_index(index: usize) -> bool {
    index < SEEDED_CATEGORY_COUNT
}

#[cfg(test)]
mod tests {
    use super::{is_seeded_index, seeded_categories, SEEDED_CATEGORY_COUNT};

    #[test]
    fn seeded_list_has_fixed_order() {
        let names: Vec<_> = seeded_categories().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Fitness", "Health", "Work", "Chore", "Social"]);
        assert_eq!(names.len(), SEEDED_CATEGORY_COUNT);
    }

    #[test]
    fn seeded_index_boundary() {
        assert!(is_seeded_index(4));
        assert!(!is_seeded_index(5));
    }
}
