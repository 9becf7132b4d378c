use super::cron::CronExpression;
use chrono::{DateTime, Duration, Timelike, Utc};
use std::collections::HashMap;

/// Default number of future occurrences projected per schedule.
///
/// Covers roughly one day of lookahead for hourly and quarter-hourly
/// schedules and 24 days for daily ones. Daily-cadence overlap patterns
/// repeat every cycle, so the next occurrence of each job already reveals
/// any recurring conflict. For very-high-frequency schedules the window is
/// proportionally shorter; this is a known limitation of the fixed horizon.
pub const DEFAULT_HORIZON: usize = 24;

/// Recurrence shapes the projector can model
///
/// Classification is evaluated in priority order; anything else is
/// `Unmodeled` and projects to an empty sequence. Day-of-month, month, and
/// day-of-week restrictions are never modeled, so a restricted expression is
/// excluded from comparison instead of being compared on occurrences it does
/// not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurrence {
    /// Fixed daily time, e.g. "0 2 * * *" (02:00 every day)
    Daily { hour: u32, minute: u32 },
    /// Every 15 minutes: "*/15 * * * *"
    QuarterHourly,
    /// Top of every hour: "0 * * * *"
    Hourly,
    /// Anything the projector cannot model
    Unmodeled,
}

impl Recurrence {
    /// Classify a cron expression into a recurrence shape
    pub fn classify(expr: &CronExpression) -> Self {
        if expr.day_of_month != "*" || expr.month != "*" || expr.day_of_week != "*" {
            return Recurrence::Unmodeled;
        }

        if let (Some(minute), Some(hour)) =
            (numeric_field(&expr.minute), numeric_field(&expr.hour))
        {
            // Parse accepts any digits; only values naming a real wall-clock
            // time are projectable.
            if minute <= 59 && hour <= 23 {
                return Recurrence::Daily { hour, minute };
            }
            return Recurrence::Unmodeled;
        }

        if expr.minute == "*/15" && expr.hour == "*" {
            return Recurrence::QuarterHourly;
        }

        if expr.minute == "0" && expr.hour == "*" {
            return Recurrence::Hourly;
        }

        Recurrence::Unmodeled
    }
}

/// Project up to `count` future occurrences of `expr`, anchored at `anchor`.
///
/// The returned instants are strictly increasing, all strictly after the
/// anchor (truncated to whole-minute precision), and evenly spaced by the
/// shape's cadence. Unmodeled expressions yield an empty sequence; callers
/// must treat that as "no basis for comparison", never as "no conflict".
pub fn project(expr: &CronExpression, anchor: DateTime<Utc>, count: usize) -> Vec<DateTime<Utc>> {
    let anchor = truncate_to_minute(anchor);

    match Recurrence::classify(expr) {
        Recurrence::Daily { hour, minute } => {
            let candidate = match anchor.date_naive().and_hms_opt(hour, minute, 0) {
                Some(t) => t.and_utc(),
                None => return Vec::new(),
            };
            let first = advance_past(candidate, anchor, Duration::days(1));
            series(first, Duration::days(1), count)
        }
        Recurrence::QuarterHourly => {
            let candidate = anchor - Duration::minutes(i64::from(anchor.minute() % 15));
            let first = advance_past(candidate, anchor, Duration::minutes(15));
            series(first, Duration::minutes(15), count)
        }
        Recurrence::Hourly => {
            let candidate = anchor - Duration::minutes(i64::from(anchor.minute()));
            let first = advance_past(candidate, anchor, Duration::hours(1));
            series(first, Duration::hours(1), count)
        }
        Recurrence::Unmodeled => Vec::new(),
    }
}

/// Per-run memoization of projected occurrences
///
/// The anchor is captured once per detection run, so the raw cron text is a
/// sufficient cache key. An explicit cache object keeps memoization scoped
/// to the run that owns it; there is no process-global state.
#[derive(Debug, Default)]
pub struct ProjectionCache {
    entries: HashMap<String, Vec<DateTime<Utc>>>,
}

impl ProjectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projected occurrences for `expr`, computed once per raw expression
    pub fn runs(
        &mut self,
        expr: &CronExpression,
        anchor: DateTime<Utc>,
        count: usize,
    ) -> Vec<DateTime<Utc>> {
        self.entries
            .entry(expr.raw.clone())
            .or_insert_with(|| project(expr, anchor, count))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn numeric_field(field: &str) -> Option<u32> {
    if !field.is_empty() && field.chars().all(|c| c.is_ascii_digit()) {
        field.parse().ok()
    } else {
        None
    }
}

fn truncate_to_minute(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(instant)
}

/// A candidate at or before the anchor moves forward by one cadence step.
fn advance_past(candidate: DateTime<Utc>, anchor: DateTime<Utc>, step: Duration) -> DateTime<Utc> {
    if candidate <= anchor {
        candidate + step
    } else {
        candidate
    }
}

fn series(start: DateTime<Utc>, step: Duration, count: usize) -> Vec<DateTime<Utc>> {
    let mut runs = Vec::with_capacity(count);
    let mut next = start;
    for _ in 0..count {
        runs.push(next);
        next += step;
    }
    runs
}
