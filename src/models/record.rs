use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Timestamp format used for the `Form_Submission_Timestamp` column.
pub const SUBMITTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single submitted event. Created only through the validated submit path;
/// never mutated after creation, never deleted (append-only log).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub name: String,
    pub date: NaiveDate,     // ⇔ Event_Date ("YYYY-MM-DD")
    pub time: String,        // ⇔ Event_Time (4-digit 24h "HHMM")
    pub duration_minutes: i64,
    /// Blank in storage when the event date falls outside every generated
    /// pay period.
    pub pay_period: Option<String>,
    pub submitted_at: String, // ⇔ Form_Submission_Timestamp ("YYYY-MM-DD HH:MM:SS")
}

impl EventRecord {
    /// Constructor for records created by the submit path.
    /// Stamps `submitted_at` with the current local wall-clock time.
    pub fn new(
        name: String,
        date: NaiveDate,
        time: String,
        duration_minutes: i64,
        pay_period: Option<String>,
    ) -> Self {
        Self {
            name,
            date,
            time,
            duration_minutes,
            pay_period,
            submitted_at: Local::now().format(SUBMITTED_AT_FORMAT).to_string(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn pay_period_str(&self) -> &str {
        self.pay_period.as_deref().unwrap_or("")
    }
}
