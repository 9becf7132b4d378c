use crate::models::{ScheduledJob, Severity};

/// Severity policy for detected overlaps
///
/// Intensity flags and shared resource-class tags are stronger conflict
/// signals than mere time overlap: two lightweight jobs overlapping is
/// informational, two disk-bound jobs overlapping is operationally risky.
#[derive(Debug, Clone)]
pub struct ConflictClassifier {
    /// Tags that escalate a shared-tag overlap to an error
    intensive_tags: Vec<String>,
}

impl Default for ConflictClassifier {
    fn default() -> Self {
        Self {
            intensive_tags: vec!["io-intensive".to_string(), "cpu-intensive".to_string()],
        }
    }
}

impl ConflictClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_intensive_tags(mut self, tags: Vec<String>) -> Self {
        self.intensive_tags = tags;
        self
    }

    /// Determine the severity of an overlap between two jobs
    pub fn classify(&self, job1: &ScheduledJob, job2: &ScheduledJob) -> Severity {
        if job1.resource_intensive && job2.resource_intensive {
            return Severity::Error;
        }

        if self
            .intensive_tags
            .iter()
            .any(|tag| job1.shares_tag(job2, tag))
        {
            return Severity::Error;
        }

        Severity::Warning
    }

    /// Render the operator-facing conflict message, quoting each job's raw
    /// cron text verbatim.
    pub fn message(&self, job1: &ScheduledJob, job2: &ScheduledJob) -> String {
        format!(
            "'{}' ({}) overlaps with '{}' ({})",
            job1.name, job1.schedule.raw, job2.name, job2.schedule.raw
        )
    }
}
