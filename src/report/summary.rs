//! Human readable summary of a reconciliation, rendered as log lines.

use std::path::Path;

use super::format_file_size;
use crate::models::ReconciliationResult;

/// How prominently a summary line should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
  /// Regular progress or result line.
  Info,
  /// Something the user should look at.
  Warning,
}

/// One rendered line of the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
  /// Display level.
  pub severity: Severity,
  /// Line text without trailing newline.
  pub text: String,
}

impl SummaryLine {
  fn info(text: impl Into<String>) -> Self {
    Self {
      severity: Severity::Info,
      text: text.into(),
    }
  }

  fn warning(text: impl Into<String>) -> Self {
    Self {
      severity: Severity::Warning,
      text: text.into(),
    }
  }
}

/// Render the summary sections: header, counts, unused list, warnings and report location.
///
/// The undeclared and missing sections are omitted when their lists are empty.
pub fn render_summary(
  result: &ReconciliationResult,
  manifest_file: &str,
  report_path: &Path,
) -> Vec<SummaryLine> {
  let mut lines = vec![
    SummaryLine::info("Asset usage report"),
    SummaryLine::info(format!("Total assets: {}", result.total_assets)),
    SummaryLine::info(format!("Declared assets: {}", result.declared_assets)),
    SummaryLine::info(format!("Referenced assets: {}", result.referenced_assets)),
  ];

  if result.unused_assets.is_empty() {
    lines.push(SummaryLine::info("Unused assets: none"));
  } else {
    lines.push(SummaryLine::info(format!(
      "Unused assets: {} ({})",
      result.unused_assets_count,
      format_file_size(result.unused_assets_total_size)
    )));
    for asset in &result.unused_assets {
      lines.push(SummaryLine::info(format!(
        "  - {} ({})",
        asset.path, asset.formatted_size
      )));
    }
  }

  if !result.undeclared_assets.is_empty() {
    lines.push(SummaryLine::warning(format!(
      "Undeclared assets: {} present on disk but not declared in {}",
      result.undeclared_assets.len(),
      manifest_file
    )));
    for path in &result.undeclared_assets {
      lines.push(SummaryLine::warning(format!("  - {path}")));
    }
  }

  if !result.missing_declared_assets.is_empty() {
    lines.push(SummaryLine::warning(format!(
      "Missing declared assets: {} declared in {} but not found on disk",
      result.missing_declared_assets.len(),
      manifest_file
    )));
    for declaration in &result.missing_declared_assets {
      lines.push(SummaryLine::warning(format!("  - {declaration}")));
    }
  }

  lines.push(SummaryLine::info(format!(
    "Report written to {}",
    report_path.display()
  )));
  lines
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::{AssetPath, UnusedAsset};

  fn base() -> ReconciliationResult {
    ReconciliationResult {
      total_assets: 2,
      declared_assets: 1,
      referenced_assets: 1,
      unused_assets: vec![UnusedAsset {
        path: AssetPath::new("assets/images/b.png", "assets"),
        size: 1536,
        formatted_size: "1.5 KB".into(),
      }],
      unused_assets_count: 1,
      unused_assets_total_size: 1536,
      undeclared_assets: Vec::new(),
      missing_declared_assets: Vec::new(),
    }
  }

  fn texts(lines: &[SummaryLine]) -> Vec<&str> {
    lines.iter().map(|line| line.text.as_str()).collect()
  }

  #[test]
  fn renders_counts_and_unused_list() {
    let lines = render_summary(&base(), "pubspec.yaml", Path::new("app/unused_assets_report.json"));

    assert_eq!(texts(&lines), vec![
      "Asset usage report",
      "Total assets: 2",
      "Declared assets: 1",
      "Referenced assets: 1",
      "Unused assets: 1 (1.5 KB)",
      "  - assets/images/b.png (1.5 KB)",
      "Report written to app/unused_assets_report.json",
    ]);
    assert!(lines.iter().all(|line| line.severity == Severity::Info));
  }

  #[test]
  fn adds_warning_sections_when_populated() {
    let mut result = base();
    result.undeclared_assets = vec![AssetPath::new("assets/data/x.json", "assets")];
    result.missing_declared_assets = vec!["assets/fonts/custom.ttf".into()];

    let lines = render_summary(&result, "pubspec.yaml", Path::new("report.json"));
    let warnings: Vec<&str> = lines
      .iter()
      .filter(|line| line.severity == Severity::Warning)
      .map(|line| line.text.as_str())
      .collect();

    assert_eq!(warnings, vec![
      "Undeclared assets: 1 present on disk but not declared in pubspec.yaml",
      "  - assets/data/x.json",
      "Missing declared assets: 1 declared in pubspec.yaml but not found on disk",
      "  - assets/fonts/custom.ttf",
    ]);
    assert_eq!(lines.last().unwrap().text, "Report written to report.json");
  }

  #[test]
  fn reports_when_nothing_is_unused() {
    let mut result = base();
    result.unused_assets.clear();
    result.unused_assets_count = 0;
    result.unused_assets_total_size = 0;

    let lines = render_summary(&result, "pubspec.yaml", Path::new("report.json"));
    assert!(texts(&lines).contains(&"Unused assets: none"));
  }
}
