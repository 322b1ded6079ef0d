//! Time utilities: validation of the 4-digit 24h "HHMM" event time.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

fn hhmm_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}$").expect("valid regex literal"))
}

/// Accepts exactly four ASCII digits with HH in 00-23 and MM in 00-59.
/// Separators ("24:00"), short forms ("930"), and empty input are all
/// rejected with the same error carrying the offending value.
pub fn validate_hhmm(t: &str) -> AppResult<String> {
    if !hhmm_shape().is_match(t) {
        return Err(AppError::InvalidTime(t.to_string()));
    }

    let hours: u32 = t[..2]
        .parse()
        .map_err(|_| AppError::InvalidTime(t.to_string()))?;
    let minutes: u32 = t[2..]
        .parse()
        .map_err(|_| AppError::InvalidTime(t.to_string()))?;

    if hours > 23 || minutes > 59 {
        return Err(AppError::InvalidTime(t.to_string()));
    }

    Ok(t.to_string())
}
