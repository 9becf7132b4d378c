use super::cron::CronExpression;
use super::projection::{project, DEFAULT_HORIZON};
use chrono::{DateTime, Duration, Utc};

/// Test whether any occurrence-interval from one set intersects any from the
/// other.
///
/// Each occurrence implies the half-open interval
/// `[occurrence, occurrence + duration)`; two intervals intersect when
/// `a < b_end && b < a_end`. Both sides use the same duration, and the scan
/// short-circuits on the first intersecting pair. Either set being empty
/// means there is no basis for comparison and the result is `false`.
pub fn intervals_intersect(
    a_runs: &[DateTime<Utc>],
    b_runs: &[DateTime<Utc>],
    duration: Duration,
) -> bool {
    for a_start in a_runs {
        let a_end = *a_start + duration;
        for b_start in b_runs {
            let b_end = *b_start + duration;
            if *a_start < b_end && *b_start < a_end {
                return true;
            }
        }
    }
    false
}

/// Project both schedules at `anchor` and test for overlapping executions.
///
/// The caller supplies the assumed duration in minutes, conventionally the
/// max of both jobs' estimates: a conflict is possible while either job
/// could still be running.
pub fn schedules_overlap(
    a: &CronExpression,
    b: &CronExpression,
    duration_minutes: u32,
    anchor: DateTime<Utc>,
) -> bool {
    let a_runs = project(a, anchor, DEFAULT_HORIZON);
    let b_runs = project(b, anchor, DEFAULT_HORIZON);
    intervals_intersect(
        &a_runs,
        &b_runs,
        Duration::minutes(i64::from(duration_minutes)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn cron(expr: &str) -> CronExpression {
        CronExpression::parse(expr).unwrap()
    }

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_identical_schedules_overlap() {
        assert!(schedules_overlap(
            &cron("0 2 * * *"),
            &cron("0 2 * * *"),
            30,
            anchor()
        ));
    }

    #[test]
    fn test_adjacent_intervals_do_not_overlap() {
        // [02:00, 02:30) and [02:30, 03:00) touch but do not intersect.
        assert!(!schedules_overlap(
            &cron("0 2 * * *"),
            &cron("30 2 * * *"),
            30,
            anchor()
        ));
    }

    #[test]
    fn test_one_extra_minute_overlaps() {
        assert!(schedules_overlap(
            &cron("0 2 * * *"),
            &cron("30 2 * * *"),
            31,
            anchor()
        ));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let cases = [
            ("0 2 * * *", "30 2 * * *", 31),
            ("0 2 * * *", "30 2 * * *", 30),
            ("0 2 * * *", "0 3 * * *", 60),
            ("*/15 * * * *", "0 * * * *", 10),
            ("0 2 1 * *", "0 2 * * *", 120),
        ];
        for (a, b, dur) in cases {
            assert_eq!(
                schedules_overlap(&cron(a), &cron(b), dur, anchor()),
                schedules_overlap(&cron(b), &cron(a), dur, anchor()),
                "asymmetric result for {a} vs {b} at {dur}m"
            );
        }
    }

    #[test]
    fn test_high_frequency_overlaps_daily() {
        // A quarter-hourly job inevitably collides with a long daily one.
        assert!(schedules_overlap(
            &cron("*/15 * * * *"),
            &cron("0 2 * * *"),
            60,
            anchor()
        ));
    }

    #[test]
    fn test_unmodeled_side_never_overlaps() {
        assert!(!schedules_overlap(
            &cron("0 2 1 * *"),
            &cron("0 2 * * *"),
            240,
            anchor()
        ));
    }

    #[test]
    fn test_empty_sets_do_not_intersect() {
        let runs = project(&cron("0 2 * * *"), anchor(), DEFAULT_HORIZON);
        assert!(!intervals_intersect(&runs, &[], Duration::minutes(30)));
        assert!(!intervals_intersect(&[], &[], Duration::minutes(30)));
    }
}
