//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Event name must not be empty")]
    EmptyName,

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time '{0}': expected 4 digits HHMM (00-23 hours, 00-59 minutes)")]
    InvalidTime(String),

    #[error("Event duration is required")]
    MissingDuration,

    #[error("Invalid duration '{0}': expected a non-negative number of minutes")]
    InvalidDuration(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
