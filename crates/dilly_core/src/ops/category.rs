//! Category operations.
//!
//! Category edits never touch items: an item whose category was renamed or
//! deleted keeps the old name string.

use super::{non_blank, OpError, OpResult};
use crate::model::category::{
    is_seeded_index, Category, FALLBACK_EMOJI, MAX_CATEGORIES, NEW_CATEGORY_NAME,
};
use crate::model::document::Document;

impl Document {
    /// Appends a custom category and returns its index.
    ///
    /// # Errors
    /// - `OpError::CategoryLimitReached` once `MAX_CATEGORIES` exist.
    pub fn add_custom_category(&mut self) -> OpResult<usize> {
        if self.categories.len() >= MAX_CATEGORIES {
            return Err(OpError::CategoryLimitReached {
                limit: MAX_CATEGORIES,
            });
        }
        self.categories
            .push(Category::new(NEW_CATEGORY_NAME, FALLBACK_EMOJI));
        Ok(self.categories.len() - 1)
    }

    /// Removes the custom category at `index`.
    ///
    /// # Errors
    /// - `OpError::SeededCategory` for the seeded head of the list.
    pub fn delete_category(&mut self, index: usize) -> OpResult<bool> {
        if is_seeded_index(index) {
            return Err(OpError::SeededCategory { index });
        }
        if index >= self.categories.len() {
            return Ok(false);
        }
        self.categories.remove(index);
        Ok(true)
    }

    /// Renames the custom category at `index` (trimmed).
    pub fn rename_category(&mut self, index: usize, name: &str) -> OpResult<bool> {
        if is_seeded_index(index) {
            return Err(OpError::SeededCategory { index });
        }
        let name = non_blank(name, OpError::BlankCategoryName)?;
        Ok(match self.categories.get_mut(index) {
            Some(category) => {
                category.name = name;
                true
            }
            None => false,
        })
    }

    /// Changes the emoji of any category, seeded ones included.
    pub fn set_category_emoji(&mut self, index: usize, emoji: &str) -> OpResult<bool> {
        let emoji = non_blank(emoji, OpError::BlankEmoji)?;
        Ok(match self.categories.get_mut(index) {
            Some(category) => {
                category.emoji = emoji;
                true
            }
            None => false,
        })
    }

    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Emoji for a category name, `FALLBACK_EMOJI` for dangling names.
    pub fn category_emoji(&self, name: &str) -> &str {
        self.category_by_name(name)
            .map_or(FALLBACK_EMOJI, |category| category.emoji.as_str())
    }
}
