use super::error::{ScheduleError, ScheduleResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parsed five-field cron expression
///
/// Parsing validates structure only: exactly five whitespace-separated
/// fields. Field values are not range-checked here (`99` is accepted); the
/// projector decides whether a shape can actually be modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronExpression {
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,

    /// Original expression text, kept verbatim for operator-facing messages
    pub raw: String,
}

impl CronExpression {
    /// Parse a cron expression string
    pub fn parse(expr: &str) -> ScheduleResult<Self> {
        let parts: Vec<&str> = expr.split_whitespace().collect();
        if parts.len() != 5 {
            return Err(ScheduleError::InvalidFormat {
                expr: expr.to_string(),
                found: parts.len(),
            });
        }

        Ok(Self {
            minute: parts[0].to_string(),
            hour: parts[1].to_string(),
            day_of_month: parts[2].to_string(),
            month: parts[3].to_string(),
            day_of_week: parts[4].to_string(),
            raw: expr.trim().to_string(),
        })
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
