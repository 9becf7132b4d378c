use crate::models::ScheduledJob;
use crate::schedule::project;
use chrono::{DateTime, Timelike, Utc};

const HOURS: usize = 24;
const NAME_WIDTH: usize = 20;

/// Render a text-based 24-hour schedule view
///
/// One row per job; `#` marks the hours covered by the job's next
/// occurrence and estimated duration (clipped at midnight), `.` marks idle
/// hours. Jobs the projector cannot model show an empty row.
pub fn render_daily_schedule(jobs: &[ScheduledJob], anchor: DateTime<Utc>) -> String {
    let mut lines = Vec::new();

    lines.push(String::new());
    lines.push("Daily Schedule (24-hour view)".to_string());
    lines.push("=".repeat(60));

    let mut header = format!("{:<width$} ", "Hour:", width = NAME_WIDTH);
    for hour in 0..HOURS {
        header.push_str(&format!("{:>2}", hour));
    }
    lines.push(header);
    lines.push(format!(
        "{:<width$} {}",
        "",
        "-".repeat(HOURS * 2),
        width = NAME_WIDTH
    ));

    for job in jobs {
        let mut occupied = [false; HOURS];
        if let Some(first) = project(&job.schedule, anchor, 1).first() {
            let start = first.hour() as usize;
            let span = (job.estimated_duration_minutes as usize / 60).max(1);
            for slot in occupied.iter_mut().skip(start).take(span) {
                *slot = true;
            }
        }

        let name: String = job.name.chars().take(NAME_WIDTH).collect();
        let cells: String = occupied
            .iter()
            .map(|filled| if *filled { " #" } else { " ." })
            .collect();
        lines.push(format!("{:<width$} {}", name, cells, width = NAME_WIDTH));
    }

    lines.push(String::new());
    lines.push("Legend: # = scheduled job, . = idle".to_string());

    lines.join("\n")
}
