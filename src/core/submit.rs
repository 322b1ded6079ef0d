//! High-level business logic for the `add` command: the path from raw form
//! fields to a persisted [`EventRecord`].

use crate::errors::{AppError, AppResult};
use crate::models::period::PayPeriodTable;
use crate::models::record::EventRecord;
use crate::store::records::RecordStore;
use crate::utils::{date, time};
use chrono::NaiveDate;

/// Field values exactly as collected by the UI layer, not yet typed or
/// validated. Validation happens here, not in the CLI adapter.
#[derive(Debug, Clone, Default)]
pub struct RawSubmission {
    pub name: String,
    pub date: String,
    pub time: String,
    pub duration: Option<String>,
}

/// A submission that passed every gate.
#[derive(Debug, Clone)]
pub struct ValidSubmission {
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration_minutes: i64,
}

pub struct SubmitLogic;

impl SubmitLogic {
    /// Run the validation gates in order. Each gate aborts the whole
    /// submission with a specific error; nothing is mutated and storage is
    /// never touched on failure.
    pub fn validate(raw: &RawSubmission) -> AppResult<ValidSubmission> {
        let date = date::parse_date(&raw.date)
            .ok_or_else(|| AppError::InvalidDate(raw.date.clone()))?;

        // 1️⃣ name non-empty
        let name = raw.name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyName);
        }

        // 2️⃣ time: exactly 4 digits, 24h HHMM, no separator
        let time = time::validate_hhmm(&raw.time)?;

        // 3️⃣ duration present and numeric (missing is an error, never 0)
        let duration = raw
            .duration
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(AppError::MissingDuration)?;
        let duration_minutes: i64 = duration
            .parse()
            .map_err(|_| AppError::InvalidDuration(duration.to_string()))?;
        if duration_minutes < 0 {
            return Err(AppError::InvalidDuration(duration.to_string()));
        }

        Ok(ValidSubmission {
            name: name.to_string(),
            date,
            time,
            duration_minutes,
        })
    }

    /// Validate, resolve the pay-period label, build the record and persist
    /// it. Returns the record that was appended.
    pub fn apply(
        store: &mut RecordStore,
        periods: &PayPeriodTable,
        raw: &RawSubmission,
    ) -> AppResult<EventRecord> {
        let valid = Self::validate(raw)?;

        // An uncovered date is expected, not an error: the record is stored
        // with a blank pay period.
        let label = periods.resolve(valid.date).map(str::to_string);

        let record = EventRecord::new(
            valid.name,
            valid.date,
            valid.time,
            valid.duration_minutes,
            label,
        );

        store.append(record.clone())?;

        Ok(record)
    }
}
