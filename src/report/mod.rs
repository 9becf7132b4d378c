//! Conflict reporting
//!
//! Renders detection results as a plain-text report for operators, a
//! structured JSON document for CI, and an ASCII daily-schedule view.

mod json;
mod schedule_view;
mod text;

pub use json::{ConflictRecord, ConflictReport, JobRecord, ReportSummary};
pub use schedule_view::render_daily_schedule;
pub use text::render_text;
