use crate::schedule::CronExpression;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Definition of a scheduled job
///
/// Produced by discovery, consumed read-only by the detection engine.
/// `source_file` and `line_number` are provenance only; `name` is a display
/// string and is not guaranteed unique.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScheduledJob {
    /// Human-readable job name
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Parsed cron schedule
    pub schedule: CronExpression,

    /// File the job definition was found in
    pub source_file: String,

    /// Line number of the definition
    pub line_number: usize,

    /// Job description
    #[serde(default)]
    pub description: String,

    /// Assumed duration of one execution
    #[serde(default = "default_duration_minutes")]
    pub estimated_duration_minutes: u32,

    /// Whether the job is flagged as consuming significant I/O or CPU
    #[serde(default)]
    pub resource_intensive: bool,

    /// Tags for categorization (e.g. "backup", "io-intensive")
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ScheduledJob {
    pub fn new(
        name: impl Into<String>,
        schedule: CronExpression,
        source_file: impl Into<String>,
        line_number: usize,
    ) -> Self {
        Self {
            name: name.into(),
            schedule,
            source_file: source_file.into(),
            line_number,
            description: String::new(),
            estimated_duration_minutes: default_duration_minutes(),
            resource_intensive: false,
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.estimated_duration_minutes = minutes;
        self
    }

    pub fn with_resource_intensive(mut self, intensive: bool) -> Self {
        self.resource_intensive = intensive;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Check whether this job shares the given tag with another job
    pub fn shares_tag(&self, other: &ScheduledJob, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag) && other.tags.iter().any(|t| t == tag)
    }
}

fn default_duration_minutes() -> u32 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(name: &str, cron: &str) -> ScheduledJob {
        ScheduledJob::new(name, CronExpression::parse(cron).unwrap(), "test.py", 1)
    }

    #[test]
    fn test_defaults() {
        let j = job("Nightly Backup", "0 2 * * *");
        assert_eq!(j.estimated_duration_minutes, 30);
        assert!(!j.resource_intensive);
        assert!(j.tags.is_empty());
        assert!(j.description.is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let j = job("Nightly Backup", "0 2 * * *")
            .with_description("From backup_scheduler.py")
            .with_duration(60)
            .with_resource_intensive(true)
            .with_tags(vec!["backup".to_string(), "io-intensive".to_string()]);

        assert_eq!(j.estimated_duration_minutes, 60);
        assert!(j.resource_intensive);
        assert_eq!(j.tags.len(), 2);
    }

    #[test]
    fn test_shares_tag() {
        let a = job("A", "0 2 * * *").with_tags(vec!["io-intensive".to_string()]);
        let b = job("B", "0 3 * * *")
            .with_tags(vec!["cleanup".to_string(), "io-intensive".to_string()]);
        let c = job("C", "0 4 * * *").with_tags(vec!["cleanup".to_string()]);

        assert!(a.shares_tag(&b, "io-intensive"));
        assert!(!a.shares_tag(&c, "io-intensive"));
    }

    #[test]
    fn test_validation_rejects_empty_name() {
        let j = job("", "0 2 * * *");
        assert!(j.validate().is_err());
        assert!(job("ok", "0 2 * * *").validate().is_ok());
    }
}
