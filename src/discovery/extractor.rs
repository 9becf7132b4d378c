use crate::discovery::KnownJobRegistry;
use crate::models::ScheduledJob;
use crate::schedule::CronExpression;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::{debug, warn};

/// Patterns that match cron schedules in source text.
///
/// The first two capture (hour, minute) from scheduler API calls; the rest
/// capture a full five-field expression from assignments and config keys.
static SCHEDULE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // scheduler.add_job(..., trigger='cron', hour=2, minute=0, ...)
        r#"(?i)add_job\s*\([^)]*trigger\s*=\s*['"]cron['"][^)]*hour\s*=\s*(\d+)[^)]*minute\s*=\s*(\d+)"#,
        // @scheduler.scheduled_job('cron', hour=2, minute=0)
        r#"(?i)scheduled_job\s*\([^)]*['"]cron['"][^)]*hour\s*=\s*(\d+)[^)]*minute\s*=\s*(\d+)"#,
        // BACKUP_SCHEDULE = "0 2 * * *"
        r#"(?i)SCHEDULE\s*=\s*['"](\d+\s+\d+\s+\*\s+\*\s+\*)['"]"#,
        // cron: "0 2 * * *"
        r#"(?i)cron:\s*['"](\d+\s+\d+\s+\*\s+\*\s+\*)['"]"#,
        // schedule="0 2 * * *"
        r#"(?i)schedule\s*=\s*['"](\d+\s+\d+\s+[\d*]+\s+[\d*]+\s+[\d*]+)['"]"#,
    ]
    .iter()
    .map(|p| Regex::new(p).expect("schedule pattern must compile"))
    .collect()
});

static DEF_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"def\s+(\w+)").expect("must compile"));
static NAME_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"name\s*=\s*['"]([^'"]+)['"]"#).expect("must compile"));

/// Extracts scheduled jobs from source files
pub struct ScheduleExtractor {
    registry: KnownJobRegistry,
    default_duration_minutes: u32,
}

impl ScheduleExtractor {
    pub fn new(registry: KnownJobRegistry, default_duration_minutes: u32) -> Self {
        Self {
            registry,
            default_duration_minutes,
        }
    }

    pub fn registry(&self) -> &KnownJobRegistry {
        &self.registry
    }

    /// Extract scheduled jobs from a file on disk
    ///
    /// Known-jobs resolution by filename runs first, then the pattern scan
    /// over the file's content. An unreadable file is logged and yields
    /// nothing.
    pub fn extract_from_file(&self, path: &Path) -> Vec<ScheduledJob> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %path.display(), %err, "Could not read file, skipping");
                return Vec::new();
            }
        };

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut jobs = Vec::new();
        if let Some(job) = self.registry.resolve(&filename, &path.display().to_string()) {
            debug!(%filename, "Resolved job from known-jobs registry");
            jobs.push(job);
        }

        jobs.extend(self.extract_from_source(&content, &path.display().to_string()));
        jobs
    }

    /// Extract scheduled jobs from a text blob
    pub fn extract_from_source(&self, content: &str, source_file: &str) -> Vec<ScheduledJob> {
        let lines: Vec<&str> = content.lines().collect();
        let filename = Path::new(source_file)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| source_file.to_string());

        let mut jobs = Vec::new();

        for (idx, line) in lines.iter().enumerate() {
            let line_number = idx + 1;
            for pattern in SCHEDULE_PATTERNS.iter() {
                let Some(caps) = pattern.captures(line) else {
                    continue;
                };

                let cron_text = if caps.len() == 3 {
                    // (hour, minute) captures from a scheduler call
                    format!("{} {} * * *", &caps[2], &caps[1])
                } else {
                    caps[1].to_string()
                };

                match CronExpression::parse(&cron_text) {
                    Ok(schedule) => {
                        let name = infer_job_name(&lines, line_number)
                            .unwrap_or_else(|| format!("Job in {}:{}", filename, line_number));
                        jobs.push(
                            ScheduledJob::new(name, schedule, source_file, line_number)
                                .with_duration(self.default_duration_minutes),
                        );
                    }
                    Err(err) => {
                        warn!(source_file, line_number, %err, "Dropping malformed schedule candidate");
                    }
                }

                // One job per line; the looser patterns would re-match text
                // a stricter one already claimed.
                break;
            }
        }

        jobs
    }
}

/// Recover a job name from the lines around a schedule match
///
/// Prefers a nearby `def <name>` (title-cased), falling back to a
/// `name="..."` attribute.
fn infer_job_name(lines: &[&str], line_number: usize) -> Option<String> {
    let start = line_number.saturating_sub(5);
    let end = (line_number + 1).min(lines.len());
    let context = lines[start..end].join("\n");

    if let Some(caps) = DEF_NAME.captures(&context) {
        return Some(title_case(&caps[1]));
    }

    NAME_ATTR.captures(&context).map(|caps| caps[1].to_string())
}

fn title_case(ident: &str) -> String {
    ident
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
