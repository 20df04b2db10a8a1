//! Time source for store operations.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Supplies completion timestamps and the current calendar day.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
    /// Current calendar date in the user's timezone.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock time; the day follows the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
