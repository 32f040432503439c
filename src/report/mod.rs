//! Rendering of reconciliation results: the persisted JSON report and the log summary.

mod document;
mod size;
mod summary;

pub use document::{render_report, write_report};
pub use size::format_file_size;
pub use summary::{Severity, SummaryLine, render_summary};
