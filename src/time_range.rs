use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Month-to-date billing window, both ends in UTC.
#[derive(Debug, PartialEq)]
pub struct TimeRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl From<DateTime<Utc>> for TimeRange {
    fn from(date_time: DateTime<Utc>) -> Self {
        let end = date_time.date_naive();
        let start = end - Duration::days(i64::from(end.day0()));

        TimeRange { start, end }
    }
}

impl TimeRange {
    pub fn start_date(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn end_date(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}
