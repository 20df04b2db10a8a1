use chrono::{NaiveDate, TimeZone, Utc};
use dilly_core::{Document, OpError, MAX_CATEGORIES};

fn new_doc() -> Document {
    Document::new_default(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap())
}

fn orders(doc: &Document) -> Vec<u32> {
    doc.template.iter().map(|item| item.order).collect()
}

#[test]
fn add_carries_last_category_forward() {
    let mut doc = new_doc();
    let first = doc.add_template_item(Some("Work"));
    let second = doc.add_template_item(None);
    let third = doc.add_template_item(Some("Chore"));

    assert_eq!(doc.template_item(&first).unwrap().category, "Work");
    assert_eq!(doc.template_item(&second).unwrap().category, "Work");
    assert_eq!(doc.template_item(&third).unwrap().category, "Chore");
    assert_eq!(orders(&doc), [0, 1, 2]);
}

#[test]
fn delete_densifies_order_and_cascades_to_day() {
    let mut doc = new_doc();
    let a = doc.add_template_item(None);
    let b = doc.add_template_item(None);
    let c = doc.add_template_item(None);
    doc.reset_day(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
    doc.mark_done(&c, chrono::Utc::now());

    assert!(doc.delete_template_item(&b));
    assert!(doc.delete_template_item(&c));

    assert_eq!(orders(&doc), [0]);
    assert_eq!(doc.template[0].id, a);
    assert_eq!(doc.current_day.pending, [a]);
    assert!(doc.current_day.done.is_empty());
}

#[test]
fn delete_unknown_item_is_noop() {
    let mut doc = new_doc();
    doc.add_template_item(None);
    let before = doc.clone();

    assert!(!doc.delete_template_item("missing"));
    assert_eq!(doc, before);
}

#[test]
fn blank_template_title_is_rejected_and_unknown_id_is_noop() {
    let mut doc = new_doc();
    let id = doc.add_template_item(None);
    doc.update_template_item_title(&id, "Read").unwrap();

    assert_eq!(
        doc.update_template_item_title(&id, "   "),
        Err(OpError::BlankTitle)
    );
    assert_eq!(doc.template_item(&id).unwrap().title, "Read");
    assert_eq!(doc.update_template_item_title("missing", "x"), Ok(false));
    assert_eq!(doc.update_template_item_title(&id, "  Walk  "), Ok(true));
    assert_eq!(doc.template_item(&id).unwrap().title, "Walk");
}

#[test]
fn category_update_accepts_any_name() {
    let mut doc = new_doc();
    let id = doc.add_template_item(None);

    assert!(doc.update_template_item_category(&id, "Social"));
    assert!(!doc.update_template_item_category("missing", "Social"));
    assert_eq!(doc.template_item(&id).unwrap().category, "Social");
}

#[test]
fn reorder_template_assigns_order_by_position() {
    let mut doc = new_doc();
    let a = doc.add_template_item(None);
    let b = doc.add_template_item(None);
    let c = doc.add_template_item(None);
    doc.reset_day(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
    doc.skip_today(&b);

    doc.reorder_template(&[c.clone(), a.clone(), b.clone()]);

    let ids: Vec<_> = doc.template.iter().map(|item| item.id.clone()).collect();
    assert_eq!(ids, [c.clone(), a.clone(), b]);
    assert_eq!(orders(&doc), [0, 1, 2]);
    assert_eq!(doc.current_day.pending, [c, a]);
}

#[test]
fn reorder_template_removes_omitted_items_from_template_and_today() {
    let mut doc = new_doc();
    let a = doc.add_template_item(None);
    let b = doc.add_template_item(None);
    let c = doc.add_template_item(None);
    doc.reset_day(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
    let one_off = doc.add_one_off_task();
    doc.mark_done(&c, Utc.with_ymd_and_hms(2026, 10, 17, 7, 0, 0).unwrap());
    doc.current_day.pending.push("ghost".to_string());

    doc.reorder_template(&[b.clone(), "unknown".to_string()]);

    let ids: Vec<_> = doc.template.iter().map(|item| item.id.clone()).collect();
    assert_eq!(ids, [b.clone()]);
    assert_eq!(doc.template[0].order, 0);
    assert!(!doc.current_day.pending.contains(&a));
    assert!(!doc.current_day.done.contains_key(&c));
    assert_eq!(doc.current_day.pending, [b, one_off]);
}

#[test]
fn category_cap_is_ten() {
    let mut doc = new_doc();
    for expected_index in 5..MAX_CATEGORIES {
        assert_eq!(doc.add_custom_category(), Ok(expected_index));
    }

    assert_eq!(
        doc.add_custom_category(),
        Err(OpError::CategoryLimitReached {
            limit: MAX_CATEGORIES
        })
    );
    assert_eq!(doc.categories.len(), MAX_CATEGORIES);
    assert_eq!(doc.categories[9].name, "New Category");
    assert_eq!(doc.categories[9].emoji, "📌");
}

#[test]
fn seeded_category_cannot_be_deleted() {
    let mut doc = new_doc();
    let before = doc.categories.clone();

    assert_eq!(
        doc.delete_category(0),
        Err(OpError::SeededCategory { index: 0 })
    );
    assert_eq!(
        doc.delete_category(4),
        Err(OpError::SeededCategory { index: 4 })
    );
    assert_eq!(doc.categories, before);
}

#[test]
fn deleting_custom_category_leaves_dangling_item_reference() {
    let mut doc = new_doc();
    let index = doc.add_custom_category().unwrap();
    doc.rename_category(index, "Garden").unwrap();
    let id = doc.add_template_item(Some("Garden"));

    assert_eq!(doc.delete_category(index), Ok(true));
    assert_eq!(doc.delete_category(index), Ok(false));

    assert_eq!(doc.template_item(&id).unwrap().category, "Garden");
    assert!(doc.category_by_name("Garden").is_none());
    assert_eq!(doc.category_emoji("Garden"), "📌");
}

#[test]
fn rename_rules_protect_seeded_names() {
    let mut doc = new_doc();
    let index = doc.add_custom_category().unwrap();

    assert_eq!(
        doc.rename_category(2, "Job"),
        Err(OpError::SeededCategory { index: 2 })
    );
    assert_eq!(
        doc.rename_category(index, " "),
        Err(OpError::BlankCategoryName)
    );
    assert_eq!(doc.rename_category(index, " Pets "), Ok(true));
    assert_eq!(doc.categories[index].name, "Pets");
    assert_eq!(doc.rename_category(9, "Nope"), Ok(false));
}

#[test]
fn emoji_is_editable_for_seeded_categories() {
    let mut doc = new_doc();

    assert_eq!(doc.set_category_emoji(0, "🏃"), Ok(true));
    assert_eq!(doc.category_emoji("Fitness"), "🏃");
    assert_eq!(doc.set_category_emoji(0, ""), Err(OpError::BlankEmoji));
    assert_eq!(doc.set_category_emoji(42, "🏃"), Ok(false));
}
