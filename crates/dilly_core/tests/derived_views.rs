use chrono::{NaiveDate, TimeZone, Utc};
use dilly_core::{Document, Task};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

#[test]
fn empty_template_has_zero_percentage() {
    let mut doc = Document::new_default(today());
    let one_off = doc.add_one_off_task();
    doc.mark_done(&one_off, Utc::now());

    let score = doc.scorecard();
    assert_eq!(score.total_template, 0);
    assert_eq!(score.percentage, 0);
    assert_eq!(score.completed_one_off, 1);
    assert_eq!(score.completion_text(), "0 / 0 +1");
}

#[test]
fn one_offs_are_bonus_not_part_of_percentage() {
    let mut doc = Document::new_default(today());
    let ids: Vec<_> = (0..3).map(|_| doc.add_template_item(None)).collect();
    doc.reset_day(today());
    let one_off = doc.add_one_off_task();
    doc.mark_done(&ids[0], Utc::now());
    doc.mark_done(&one_off, Utc::now());

    let score = doc.scorecard();
    assert_eq!(score.completed_template, 1);
    assert_eq!(score.completed_one_off, 1);
    assert_eq!(score.percentage, 33);
    assert_eq!(score.completion_text(), "1 / 3 +1");

    doc.mark_done(&ids[1], Utc::now());
    doc.undo(&one_off);
    let score = doc.scorecard();
    assert_eq!(score.percentage, 67);
    assert_eq!(score.completion_text(), "2 / 3");
}

#[test]
fn dangling_done_ids_count_toward_nothing() {
    let mut doc = Document::new_default(today());
    doc.add_template_item(None);
    doc.current_day
        .done
        .insert("gone".to_string(), "2026-10-17T08:00:00.000Z".to_string());

    let score = doc.scorecard();
    assert_eq!(score.completed_template, 0);
    assert_eq!(score.completed_one_off, 0);
    assert!(doc.done_tasks().is_empty());
}

#[test]
fn find_task_checks_template_then_one_offs() {
    let mut doc = Document::new_default(today());
    let template_id = doc.add_template_item(Some("Health"));
    let one_off_id = doc.add_one_off_task();

    let task = doc.find_task(&template_id).unwrap();
    assert!(matches!(task, Task::Template(_)));
    assert_eq!(task.category(), "Health");

    let task = doc.find_task(&one_off_id).unwrap();
    assert!(task.is_one_off());
    assert_eq!(task.id(), one_off_id);
    assert!(doc.find_task("missing").is_none());
}

#[test]
fn done_list_is_most_recent_first() {
    let mut doc = Document::new_default(today());
    let ids: Vec<_> = (0..3).map(|_| doc.add_template_item(None)).collect();
    doc.reset_day(today());
    doc.mark_done(&ids[1], Utc.with_ymd_and_hms(2026, 10, 17, 7, 0, 0).unwrap());
    doc.mark_done(&ids[0], Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap());
    doc.mark_done(&ids[2], Utc.with_ymd_and_hms(2026, 10, 17, 8, 0, 0).unwrap());

    let order: Vec<_> = doc.done_tasks().iter().map(|entry| entry.task.id()).collect();
    assert_eq!(order, [ids[0].as_str(), ids[2].as_str(), ids[1].as_str()]);
    assert_eq!(doc.done_tasks()[0].completed_at, "2026-10-17T09:00:00.000Z");
}

#[test]
fn done_list_puts_unparsable_timestamps_last() {
    let mut doc = Document::new_default(today());
    let a = doc.add_template_item(None);
    let b = doc.add_template_item(None);
    doc.current_day.done.insert(a.clone(), "yesterday-ish".to_string());
    doc.current_day
        .done
        .insert(b.clone(), "2026-10-17T08:00:00+02:00".to_string());

    let order: Vec<_> = doc.done_tasks().iter().map(|entry| entry.task.id()).collect();
    assert_eq!(order, [b.as_str(), a.as_str()]);
}

#[test]
fn pending_tasks_resolve_in_order_and_skip_unknown() {
    let mut doc = Document::new_default(today());
    let a = doc.add_template_item(None);
    doc.reset_day(today());
    let one_off = doc.add_one_off_task();
    doc.current_day.pending.push("ghost".to_string());

    let ids: Vec<_> = doc.pending_tasks().iter().map(|task| task.id()).collect();
    assert_eq!(ids, [a.as_str(), one_off.as_str()]);
}

#[test]
fn template_in_order_sorts_by_order_field() {
    let mut doc = Document::new_default(today());
    let a = doc.add_template_item(None);
    let b = doc.add_template_item(None);
    doc.template[0].order = 1;
    doc.template[1].order = 0;

    let ids: Vec<_> = doc
        .template_in_order()
        .iter()
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(ids, [b.as_str(), a.as_str()]);
}

#[test]
fn category_lookup_and_done_flag() {
    let mut doc = Document::new_default(today());
    let id = doc.add_template_item(None);
    doc.reset_day(today());

    assert_eq!(doc.category_by_name("Work").unwrap().emoji, "💻");
    assert_eq!(doc.category_emoji("Unknown"), "📌");
    assert!(!doc.is_done(&id));
    doc.mark_done(&id, Utc::now());
    assert!(doc.is_done(&id));
}
