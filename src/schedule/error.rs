//! Error types for the schedule module

use crate::error::AppError;

/// Result type for schedule operations
pub type ScheduleResult<T> = std::result::Result<T, ScheduleError>;

/// Errors that can occur while handling schedule expressions
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Expression does not split into exactly five fields
    #[error("Invalid cron expression '{expr}': expected 5 fields, found {found}")]
    InvalidFormat { expr: String, found: usize },
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::InvalidFormat { .. } => AppError::InvalidSchedule(err.to_string()),
        }
    }
}
