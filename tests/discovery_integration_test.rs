//! Integration tests for job discovery feeding the detector

use chrono::{TimeZone, Utc};
use schedule_auditor::config::DiscoveryConfig;
use schedule_auditor::detection::ConflictDetector;
use schedule_auditor::discovery::{JobScanner, KnownJobEntry, KnownJobRegistry};
use schedule_auditor::models::Severity;
use std::fs;
use tempfile::TempDir;

fn scanner() -> JobScanner {
    JobScanner::new(DiscoveryConfig::default())
}

#[test]
fn test_pattern_extraction_records_provenance() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("maintenance.py");
    fs::write(
        &file,
        "import scheduler\n\
         \n\
         def refresh_caches():\n\
             pass\n\
         \n\
         REFRESH_SCHEDULE = \"0 6 * * *\"\n",
    )
    .unwrap();

    let jobs = scanner().scan_paths(&[file.clone()]);
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].schedule.raw, "0 6 * * *");
    assert_eq!(jobs[0].line_number, 6);
    assert_eq!(jobs[0].source_file, file.display().to_string());
}

#[test]
fn test_known_job_and_extracted_job_in_one_tree() {
    let dir = TempDir::new().unwrap();
    let cron_dir = dir.path().join("cron");
    fs::create_dir(&cron_dir).unwrap();

    // Known by filename, no parseable schedule in the content.
    fs::write(
        cron_dir.join("backup_scheduler.py"),
        "# nightly backup entry point\n",
    )
    .unwrap();
    // Discovered by pattern.
    fs::write(
        cron_dir.join("reindex.py"),
        "scheduler.add_job(reindex, trigger='cron', hour=2, minute=30)\n",
    )
    .unwrap();

    let jobs = scanner().scan_paths(&[cron_dir]);
    assert_eq!(jobs.len(), 2);

    let backup = jobs.iter().find(|j| j.name == "Daily Backup").unwrap();
    assert_eq!(backup.schedule.raw, "0 2 * * *");
    assert!(backup.resource_intensive);

    let reindex = jobs.iter().find(|j| j.schedule.raw == "30 2 * * *").unwrap();
    assert_eq!(reindex.estimated_duration_minutes, 30);
}

#[test]
fn test_discovered_jobs_flow_into_detection() {
    let dir = TempDir::new().unwrap();
    let cron_dir = dir.path().join("cron");
    fs::create_dir(&cron_dir).unwrap();

    // Daily Backup (02:00, 60 min, io-intensive) from the registry plus an
    // extracted job at 02:30 make an overlapping pair.
    fs::write(cron_dir.join("backup_scheduler.py"), "# backup\n").unwrap();
    fs::write(
        cron_dir.join("report.py"),
        "REPORT_SCHEDULE = \"30 2 * * *\"\n",
    )
    .unwrap();

    let jobs = scanner().scan_paths(&[cron_dir]);
    let anchor = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let conflicts = ConflictDetector::new().detect_at(&jobs, anchor);

    assert_eq!(conflicts.len(), 1);
    // Only one side is io-intensive, so the overlap stays a warning.
    assert_eq!(conflicts[0].severity, Severity::Warning);
}

#[test]
fn test_unreadable_tree_is_empty_not_fatal() {
    let jobs = scanner().scan_paths(&[std::path::PathBuf::from("/does/not/exist")]);
    assert!(jobs.is_empty());
}

#[test]
fn test_malformed_candidate_is_dropped() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("broken.py");
    // Four fields: matches no extraction pattern and must not panic.
    fs::write(&file, "schedule = \"0 2 * *\"\n").unwrap();

    let jobs = scanner().scan_paths(&[file]);
    assert!(jobs.is_empty());
}

#[test]
fn test_custom_registry_fallback() {
    let mut registry = KnownJobRegistry::new();
    registry.insert(
        "etl_runner.py",
        KnownJobEntry {
            name: "ETL Run".to_string(),
            schedule: "0 4 * * *".to_string(),
            duration_minutes: 45,
            resource_intensive: false,
            tags: vec!["etl".to_string()],
        },
    );

    let dir = TempDir::new().unwrap();
    let config = DiscoveryConfig {
        paths: vec![dir.path().join("cron")],
        ..DiscoveryConfig::default()
    };

    let jobs = JobScanner::new(config).with_registry(registry).scan();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].name, "ETL Run");
    assert_eq!(jobs[0].estimated_duration_minutes, 45);
}
