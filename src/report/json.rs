use crate::models::{ScheduleConflict, ScheduledJob, Severity};
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured conflict report for CI integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictReport {
    pub timestamp: DateTime<Utc>,
    pub summary: ReportSummary,
    pub jobs: Vec<JobRecord>,
    pub conflicts: Vec<ConflictRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub jobs_found: usize,
    pub conflicts_found: usize,
    pub errors: usize,
    pub warnings: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub name: String,
    pub schedule: String,
    pub source_file: String,
    pub line_number: usize,
    pub duration_minutes: u32,
    pub resource_intensive: bool,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictRecord {
    pub severity: Severity,
    pub message: String,
    pub job1: String,
    pub job2: String,
}

impl From<&ScheduledJob> for JobRecord {
    fn from(job: &ScheduledJob) -> Self {
        Self {
            name: job.name.clone(),
            schedule: job.schedule.raw.clone(),
            source_file: job.source_file.clone(),
            line_number: job.line_number,
            duration_minutes: job.estimated_duration_minutes,
            resource_intensive: job.resource_intensive,
            tags: job.tags.clone(),
        }
    }
}

impl From<&ScheduleConflict> for ConflictRecord {
    fn from(conflict: &ScheduleConflict) -> Self {
        Self {
            severity: conflict.severity,
            message: conflict.message.clone(),
            job1: conflict.job1.name.clone(),
            job2: conflict.job2.name.clone(),
        }
    }
}

impl ConflictReport {
    /// Build a report stamped with the current instant
    pub fn build(jobs: &[ScheduledJob], conflicts: &[ScheduleConflict]) -> Self {
        Self::build_at(jobs, conflicts, Utc::now())
    }

    /// Build a report with an explicit timestamp
    pub fn build_at(
        jobs: &[ScheduledJob],
        conflicts: &[ScheduleConflict],
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            summary: ReportSummary {
                jobs_found: jobs.len(),
                conflicts_found: conflicts.len(),
                errors: conflicts.iter().filter(|c| c.is_error()).count(),
                warnings: conflicts
                    .iter()
                    .filter(|c| c.severity == Severity::Warning)
                    .count(),
            },
            jobs: jobs.iter().map(JobRecord::from).collect(),
            conflicts: conflicts.iter().map(ConflictRecord::from).collect(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
