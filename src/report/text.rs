use crate::models::{ScheduleConflict, ScheduledJob, Severity};

/// Render the plain-text conflict report
pub fn render_text(
    jobs: &[ScheduledJob],
    conflicts: &[ScheduleConflict],
    verbose: bool,
) -> String {
    let mut lines = Vec::new();

    lines.push(String::new());
    lines.push("=".repeat(60));
    lines.push("SCHEDULE CONFLICT REPORT".to_string());
    lines.push("=".repeat(60));
    lines.push(String::new());
    lines.push(format!("Jobs found: {}", jobs.len()));
    lines.push(format!("Conflicts found: {}", conflicts.len()));

    if verbose && !jobs.is_empty() {
        lines.push(String::new());
        lines.push("Scheduled Jobs:".to_string());
        lines.push("-".repeat(40));
        for job in jobs {
            lines.push(format!("  - {}", job.name));
            lines.push(format!("    Schedule: {}", job.schedule.raw));
            lines.push(format!("    Source: {}:{}", job.source_file, job.line_number));
            lines.push(format!(
                "    Duration: ~{} min",
                job.estimated_duration_minutes
            ));
            if !job.tags.is_empty() {
                lines.push(format!("    Tags: {}", job.tags.join(", ")));
            }
        }
    }

    if conflicts.is_empty() {
        lines.push(String::new());
        lines.push("No scheduling conflicts detected.".to_string());
    } else {
        lines.push(String::new());
        lines.push("Conflicts Detected:".to_string());
        lines.push("-".repeat(40));
        for conflict in conflicts {
            let icon = match conflict.severity {
                Severity::Error => "ERROR",
                Severity::Warning => "WARN",
            };
            lines.push(format!("  [{}] {}", icon, conflict.message));
        }
    }

    lines.join("\n")
}
