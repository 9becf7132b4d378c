//! Cron schedule modeling and temporal reasoning
//!
//! This module holds the time-facing half of the detection engine.
//!
//! # Features
//!
//! - **Cron Expression Model**: five-field parsing with structural validation
//! - **Occurrence Projection**: bounded future run times for recognized
//!   recurrence shapes (fixed daily, quarter-hourly, hourly)
//! - **Interval Overlap**: half-open interval intersection over projected
//!   occurrence sets
//! - **Unmodeled Shapes**: expressions outside the recognized shapes project
//!   to an empty sequence rather than failing
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use schedule_auditor::schedule::{project, CronExpression, DEFAULT_HORIZON};
//!
//! let expr = CronExpression::parse("0 2 * * *").unwrap();
//! let anchor = Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap();
//! let runs = project(&expr, anchor, DEFAULT_HORIZON);
//! assert_eq!(runs.len(), DEFAULT_HORIZON);
//! ```

mod cron;
mod error;
mod overlap;
mod projection;

pub use cron::CronExpression;
pub use error::{ScheduleError, ScheduleResult};
pub use overlap::{intervals_intersect, schedules_overlap};
pub use projection::{project, ProjectionCache, Recurrence, DEFAULT_HORIZON};
