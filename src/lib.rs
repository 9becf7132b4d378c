//! Schedule conflict detection for cron-driven job fleets
//!
//! Analyzes recurring job schedules to find time-overlapping executions
//! that could cause resource contention, classifies each overlap as
//! `warning` or `error`, and reports the result for operators and CI.
//!
//! The detection core is synchronous and side-effect-free: given a set of
//! jobs and one anchor instant, it projects bounded future occurrences for
//! each schedule, tests every unordered job pair for interval overlap, and
//! classifies what it finds. Discovery and reporting sit at the edges and
//! never feed back into the engine.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use schedule_auditor::detection::ConflictDetector;
//! use schedule_auditor::models::ScheduledJob;
//! use schedule_auditor::schedule::CronExpression;
//!
//! let jobs = vec![
//!     ScheduledJob::new(
//!         "Daily Backup",
//!         CronExpression::parse("0 2 * * *").unwrap(),
//!         "cron/backup.py",
//!         1,
//!     )
//!     .with_duration(90)
//!     .with_resource_intensive(true),
//!     ScheduledJob::new(
//!         "Backup Pruning",
//!         CronExpression::parse("0 3 * * *").unwrap(),
//!         "cron/prune.py",
//!         1,
//!     )
//!     .with_resource_intensive(true),
//! ];
//!
//! let anchor = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let conflicts = ConflictDetector::new().detect_at(&jobs, anchor);
//! assert_eq!(conflicts.len(), 1);
//! ```

pub mod config;
pub mod detection;
pub mod discovery;
pub mod error;
pub mod models;
pub mod report;
pub mod schedule;

pub use error::{AppError, Result};
