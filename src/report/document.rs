//! Persisted JSON report.

use std::fs;
use std::path::Path;

use crate::error::{AuditError, AuditResult};
use crate::models::ReconciliationResult;

/// Serialise the result as prettified JSON.
pub fn render_report(result: &ReconciliationResult) -> AuditResult<String> {
  Ok(serde_json::to_string_pretty(result)?)
}

/// Write the JSON report to `path`, replacing any previous report.
pub fn write_report(result: &ReconciliationResult, path: &Path) -> AuditResult<()> {
  let json = render_report(result)?;
  fs::write(path, json).map_err(|source| AuditError::ReportWrite {
    path: path.to_path_buf(),
    source,
  })
}
