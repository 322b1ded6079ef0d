//! Pay period generation and resolution.
//! A pay period is a fixed 14-day window; the whole table is derived from a
//! single anchor date and a period count, once per process.

use crate::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Length of a pay period in days (inclusive range).
pub const PERIOD_DAYS: u64 = 14;

/// Immutable 14-day date range. `end` is always `start + 13` days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
}

impl PayPeriod {
    fn from_start(start: NaiveDate) -> Self {
        let end = start + Days::new(PERIOD_DAYS - 1);
        let label = format!(
            "{} - {}",
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        );
        Self { start, end, label }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Ordered, contiguous, non-overlapping sequence of pay periods.
/// Generated once from config and never regenerated as real time advances:
/// dates beyond the last period resolve to `None` until the operator extends
/// `period_count` in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayPeriodTable {
    periods: Vec<PayPeriod>,
}

impl PayPeriodTable {
    /// Build `count` consecutive periods starting at `anchor`.
    /// `period[i].start = anchor + 14*i`. A zero count is a configuration
    /// mistake and is rejected instead of yielding an empty table.
    pub fn generate(anchor: NaiveDate, count: usize) -> AppResult<Self> {
        if count == 0 {
            return Err(AppError::Config(
                "period_count must be at least 1".to_string(),
            ));
        }

        let periods = (0..count)
            .map(|i| PayPeriod::from_start(anchor + Days::new(PERIOD_DAYS * i as u64)))
            .collect();

        Ok(Self { periods })
    }

    /// Label of the first period containing `date`, scanning in order.
    /// `None` is the expected outcome for dates before the anchor or past the
    /// last generated period, not an error.
    pub fn resolve(&self, date: NaiveDate) -> Option<&str> {
        self.periods
            .iter()
            .find(|p| p.contains(date))
            .map(|p| p.label.as_str())
    }

    pub fn periods(&self) -> &[PayPeriod] {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}
