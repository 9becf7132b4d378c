use crate::detection::ConflictClassifier;
use crate::models::{ScheduleConflict, ScheduledJob};
use crate::schedule::{intervals_intersect, ProjectionCache, DEFAULT_HORIZON};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Detects scheduling conflicts between jobs
///
/// Iterates all unordered job pairs in input order and records at most one
/// conflict per pair, giving deterministic, diffable output. Complexity is
/// O(n²) pairs × O(horizon²) occurrence comparisons, which is comfortable
/// for the tens of jobs this tool targets.
#[derive(Debug, Clone)]
pub struct ConflictDetector {
    classifier: ConflictClassifier,
    horizon: usize,
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self {
            classifier: ConflictClassifier::default(),
            horizon: DEFAULT_HORIZON,
        }
    }
}

impl ConflictDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_classifier(mut self, classifier: ConflictClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Detect conflicts anchored at the current instant
    pub fn detect(&self, jobs: &[ScheduledJob]) -> Vec<ScheduleConflict> {
        self.detect_at(jobs, Utc::now())
    }

    /// Detect conflicts anchored at a fixed instant
    ///
    /// The anchor is threaded through every projection so the whole pass is
    /// reproducible; a fresh timestamp per pair could create phantom
    /// overlaps near minute boundaries.
    pub fn detect_at(&self, jobs: &[ScheduledJob], anchor: DateTime<Utc>) -> Vec<ScheduleConflict> {
        let mut cache = ProjectionCache::new();
        let mut conflicts = Vec::new();

        for i in 0..jobs.len() {
            for j in (i + 1)..jobs.len() {
                let job1 = &jobs[i];
                let job2 = &jobs[j];

                // Conservative worst case: a conflict is possible while
                // either job could still be running.
                let duration_minutes = job1
                    .estimated_duration_minutes
                    .max(job2.estimated_duration_minutes);

                let a_runs = cache.runs(&job1.schedule, anchor, self.horizon);
                let b_runs = cache.runs(&job2.schedule, anchor, self.horizon);

                if intervals_intersect(
                    &a_runs,
                    &b_runs,
                    Duration::minutes(i64::from(duration_minutes)),
                ) {
                    let severity = self.classifier.classify(job1, job2);
                    debug!(
                        job1 = %job1.name,
                        job2 = %job2.name,
                        %severity,
                        duration_minutes,
                        "Schedule overlap detected"
                    );
                    conflicts.push(ScheduleConflict {
                        job1: job1.clone(),
                        job2: job2.clone(),
                        severity,
                        message: self.classifier.message(job1, job2),
                    });
                }
            }
        }

        debug!(
            jobs = jobs.len(),
            conflicts = conflicts.len(),
            "Conflict detection pass complete"
        );

        conflicts
    }
}
