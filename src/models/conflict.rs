use crate::models::ScheduledJob;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Severity of a detected schedule conflict
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    /// Informational; two lightweight jobs overlapping
    Warning,
    /// Actionable; resource-intensive jobs overlapping, fails CI
    Error,
}

/// Detected schedule conflict between two jobs
///
/// At most one conflict exists per unordered job pair; the pair is recorded
/// in the order the detector encountered it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConflict {
    pub job1: ScheduledJob,
    pub job2: ScheduledJob,
    pub severity: Severity,
    pub message: String,
}

impl ScheduleConflict {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_severity_display_roundtrip() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::from_str("error").unwrap(), Severity::Error);
        assert_eq!(Severity::from_str("warning").unwrap(), Severity::Warning);
    }

    #[test]
    fn test_severity_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Error).unwrap(),
            "\"error\""
        );
        let parsed: Severity = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(parsed, Severity::Warning);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Warning < Severity::Error);
    }
}
