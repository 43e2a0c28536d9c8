use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A project as returned by the backend. Date fields stay strings on the
/// wire; the backend does not guarantee they parse, and `is_running` is not
/// reconciled against the date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_id: String,
    pub project_name: String,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub is_running: bool,
    pub manager_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
}

impl Project {
    /// End date at calendar-day granularity, or `None` when it does not
    /// parse as a date.
    pub fn end_date_day(&self) -> Option<NaiveDate> {
        parse_day(&self.end_date)
    }

    pub fn start_date_day(&self) -> Option<NaiveDate> {
        parse_day(&self.start_date)
    }
}

/// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 timestamp whose date
/// part is taken; time-of-day and offset are discarded.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    chrono::DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}
