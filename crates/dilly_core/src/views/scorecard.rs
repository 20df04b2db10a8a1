use crate::model::document::Document;

/// Daily completion summary.
///
/// Only template items count toward `percentage`; completed one-offs are a
/// separate bonus count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scorecard {
    pub completed_template: usize,
    pub completed_one_off: usize,
    pub total_template: usize,
    /// `0..=100`, rounded half up; `0` for an empty template.
    pub percentage: u8,
}

impl Scorecard {
    pub fn compute(document: &Document) -> Self {
        let day = &document.current_day;
        let completed_template = day
            .done
            .keys()
            .filter(|id| document.is_template_id(id))
            .count();
        let completed_one_off = day
            .done
            .keys()
            .filter(|id| day.one_off(id).is_some())
            .count();
        let total_template = document.template.len();

        Self {
            completed_template,
            completed_one_off,
            total_template,
            percentage: rounded_percentage(completed_template, total_template),
        }
    }

    /// `"done / total"` with a `" +N"` suffix for completed one-offs.
    pub fn completion_text(&self) -> String {
        let mut text = format!("{} / {}", self.completed_template, self.total_template);
        if self.completed_one_off > 0 {
            text.push_str(&format!(" +{}", self.completed_one_off));
        }
        text
    }
}

fn rounded_percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    let percent = (completed * 200 + total) / (total * 2);
    u8::try_from(percent).unwrap_or(100)
}
