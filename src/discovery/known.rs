use crate::models::ScheduledJob;
use crate::schedule::CronExpression;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// A job definition known ahead of time, keyed by filename
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnownJobEntry {
    pub name: String,
    pub schedule: String,
    pub duration_minutes: u32,
    pub resource_intensive: bool,
    pub tags: Vec<String>,
}

/// Registry of job definitions resolved by exact filename
///
/// A last-resort enrichment step: a file named after a registry entry is
/// assumed, sight-unseen, to run that entry's schedule. The registry is an
/// injectable lookup, not baked into the detection engine; entries are kept
/// sorted by filename so materialized output is deterministic.
#[derive(Debug, Clone, Default)]
pub struct KnownJobRegistry {
    entries: BTreeMap<String, KnownJobEntry>,
}

impl KnownJobRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the stock backup and pruning jobs
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(
            "backup_scheduler.py",
            KnownJobEntry {
                name: "Daily Backup".to_string(),
                schedule: "0 2 * * *".to_string(),
                duration_minutes: 60,
                resource_intensive: true,
                tags: vec!["backup".to_string(), "io-intensive".to_string()],
            },
        );
        registry.insert(
            "prune_backups.py",
            KnownJobEntry {
                name: "Backup Pruning".to_string(),
                schedule: "0 3 * * *".to_string(),
                duration_minutes: 30,
                resource_intensive: true,
                tags: vec!["cleanup".to_string(), "io-intensive".to_string()],
            },
        );
        registry
    }

    pub fn insert(&mut self, filename: impl Into<String>, entry: KnownJobEntry) {
        self.entries.insert(filename.into(), entry);
    }

    pub fn get(&self, filename: &str) -> Option<&KnownJobEntry> {
        self.entries.get(filename)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the job for a file matching a registry entry
    ///
    /// Returns `None` when the filename is unknown or the entry's schedule
    /// does not parse (logged and skipped).
    pub fn resolve(&self, filename: &str, source_file: &str) -> Option<ScheduledJob> {
        let entry = self.get(filename)?;
        match CronExpression::parse(&entry.schedule) {
            Ok(schedule) => Some(
                ScheduledJob::new(entry.name.clone(), schedule, source_file, 1)
                    .with_description(format!("From {}", filename))
                    .with_duration(entry.duration_minutes)
                    .with_resource_intensive(entry.resource_intensive)
                    .with_tags(entry.tags.clone()),
            ),
            Err(err) => {
                warn!(filename, %err, "Dropping known job with malformed schedule");
                None
            }
        }
    }

    /// Materialize every registry entry as a job, for the no-jobs-found
    /// fallback path.
    pub fn defaults(&self) -> Vec<ScheduledJob> {
        self.entries
            .keys()
            .filter_map(|filename| self.resolve(filename, filename))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_entries() {
        let registry = KnownJobRegistry::builtin();
        assert_eq!(registry.len(), 2);

        let backup = registry.get("backup_scheduler.py").unwrap();
        assert_eq!(backup.name, "Daily Backup");
        assert_eq!(backup.schedule, "0 2 * * *");
        assert_eq!(backup.duration_minutes, 60);
        assert!(backup.resource_intensive);
    }

    #[test]
    fn test_resolve_builds_job() {
        let registry = KnownJobRegistry::builtin();
        let job = registry
            .resolve("prune_backups.py", "cron/prune_backups.py")
            .unwrap();

        assert_eq!(job.name, "Backup Pruning");
        assert_eq!(job.schedule.raw, "0 3 * * *");
        assert_eq!(job.source_file, "cron/prune_backups.py");
        assert_eq!(job.line_number, 1);
        assert_eq!(job.description, "From prune_backups.py");
        assert_eq!(job.estimated_duration_minutes, 30);
        assert!(job.tags.contains(&"io-intensive".to_string()));
    }

    #[test]
    fn test_resolve_unknown_filename() {
        let registry = KnownJobRegistry::builtin();
        assert!(registry.resolve("unrelated.py", "unrelated.py").is_none());
    }

    #[test]
    fn test_resolve_drops_malformed_schedule() {
        let mut registry = KnownJobRegistry::new();
        registry.insert(
            "broken.py",
            KnownJobEntry {
                name: "Broken".to_string(),
                schedule: "0 2 * *".to_string(),
                duration_minutes: 10,
                resource_intensive: false,
                tags: Vec::new(),
            },
        );
        assert!(registry.resolve("broken.py", "broken.py").is_none());
        assert!(registry.defaults().is_empty());
    }

    #[test]
    fn test_defaults_are_sorted_by_filename() {
        let registry = KnownJobRegistry::builtin();
        let jobs = registry.defaults();
        assert_eq!(jobs.len(), 2);
        // BTreeMap keys: backup_scheduler.py < prune_backups.py
        assert_eq!(jobs[0].name, "Daily Backup");
        assert_eq!(jobs[1].name, "Backup Pruning");
    }
}
