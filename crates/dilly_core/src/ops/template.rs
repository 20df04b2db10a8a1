//! Template item operations.

use super::{non_blank, OpError, OpResult};
use crate::model::category::seeded_categories;
use crate::model::document::Document;
use crate::model::generate_item_id;
use crate::model::template_item::TemplateItem;
use crate::model::ItemId;
use std::collections::HashSet;

impl Document {
    /// Appends a new, untitled template item and returns its id.
    ///
    /// Category resolution: explicit `category`, else the last item's
    /// category, else the first category.
    pub fn add_template_item(&mut self, category: Option<&str>) -> ItemId {
        let category = category
            .map(str::to_string)
            .or_else(|| self.template.last().map(|item| item.category.clone()))
            .unwrap_or_else(|| self.first_category_name());

        let id = generate_item_id();
        self.template.push(TemplateItem {
            id: id.clone(),
            title: String::new(),
            category,
            order: 0,
        });
        self.densify_order();
        id
    }

    /// Deletes a template item and purges it from today's lists.
    ///
    /// Remaining items keep their relative order and get dense `order`
    /// values. Returns `false` when `id` is not a template item.
    pub fn delete_template_item(&mut self, id: &str) -> bool {
        let before = self.template.len();
        self.template.retain(|item| item.id != id);
        if self.template.len() == before {
            return false;
        }
        self.densify_order();
        self.current_day.remove_everywhere(id);
        true
    }

    /// Sets a template item title (trimmed).
    ///
    /// # Errors
    /// - `OpError::BlankTitle` for empty or whitespace-only titles, checked
    ///   before the id lookup.
    pub fn update_template_item_title(&mut self, id: &str, title: &str) -> OpResult<bool> {
        let title = non_blank(title, OpError::BlankTitle)?;
        Ok(match self.template_item_mut(id) {
            Some(item) => {
                item.title = title;
                true
            }
            None => false,
        })
    }

    /// Sets a template item category by name. The name is not checked
    /// against the category list.
    pub fn update_template_item_category(&mut self, id: &str, category: &str) -> bool {
        match self.template_item_mut(id) {
            Some(item) => {
                item.category = category.to_string();
                true
            }
            None => false,
        }
    }

    /// Rebuilds the template from `new_order`.
    ///
    /// The list is authoritative for membership: unknown and repeated ids
    /// are ignored, and template items it omits are removed along with
    /// their pending and done entries. Surviving pending template ids are
    /// re-sequenced into the new template order within the slots they
    /// already occupy, so one-off ids keep their positions.
    pub fn reorder_template(&mut self, new_order: &[ItemId]) {
        let mut placed = HashSet::new();
        let mut reordered = Vec::with_capacity(new_order.len());
        for id in new_order {
            if placed.contains(id.as_str()) {
                continue;
            }
            if let Some(item) = self.template_item(id) {
                reordered.push(item.clone());
                placed.insert(id.as_str());
            }
        }
        self.template = reordered;
        self.densify_order();

        let template_ids: HashSet<&str> =
            self.template.iter().map(|item| item.id.as_str()).collect();
        let day = &mut self.current_day;
        let one_off_ids: HashSet<&str> =
            day.one_off_items.iter().map(|item| item.id.as_str()).collect();
        day.done.retain(|id, _| {
            template_ids.contains(id.as_str()) || one_off_ids.contains(id.as_str())
        });

        let pending_set: HashSet<&str> = day.pending.iter().map(String::as_str).collect();
        let mut pending_template = self
            .template
            .iter()
            .filter(|item| pending_set.contains(item.id.as_str()))
            .map(|item| item.id.clone());
        let pending: Vec<ItemId> = day
            .pending
            .iter()
            .filter_map(|id| {
                if template_ids.contains(id.as_str()) {
                    pending_template.next()
                } else if one_off_ids.contains(id.as_str()) {
                    Some(id.clone())
                } else {
                    None
                }
            })
            .collect();
        day.pending = pending;
    }

    /// Template items sorted by `order`.
    pub fn template_in_order(&self) -> Vec<&TemplateItem> {
        let mut items: Vec<_> = self.template.iter().collect();
        items.sort_by_key(|item| item.order);
        items
    }

    pub(crate) fn first_category_name(&self) -> String {
        self.categories
            .first()
            .map(|category| category.name.clone())
            .or_else(|| seeded_categories().into_iter().next().map(|category| category.name))
            .unwrap_or_default()
    }
}
