//! Audit orchestrator: reads the project, runs the reconciliation and writes the report.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::AuditResult;
use crate::manifest::{parse_manifest, read_manifest};
use crate::models::ReconciliationResult;
use crate::project::AuditContext;
use crate::reconcile::{Evaluation, FsSizeLookup, evaluate};
use crate::report::write_report;
use crate::scanning::{ReferenceScanner, ScanWarning, scan_asset_tree};

/// How an audit ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditOutcome {
  /// The manifest declares no assets; nothing was compared or written.
  NothingDeclared,
  /// The asset root holds no files; nothing was compared or written.
  NothingFound,
  /// Reconciliation ran and the report was written.
  Completed {
    /// Reconciliation result as persisted.
    result: ReconciliationResult,
    /// Location of the written report.
    report_path: PathBuf,
  },
}

/// Outcome of an audit together with the non-fatal problems met on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
  /// How the audit ended.
  pub outcome: AuditOutcome,
  /// Scan problems that degraded to empty or partial results.
  pub warnings: Vec<ScanWarning>,
}

/// High-level helper running a full, stateless audit of one project.
pub struct AssetAuditor<'a> {
  context: AuditContext<'a>,
}

impl<'a> AssetAuditor<'a> {
  /// Create an auditor for the provided context.
  pub fn new(context: AuditContext<'a>) -> Self {
    Self { context }
  }

  /// Project and layout being audited.
  pub fn context(&self) -> &AuditContext<'a> {
    &self.context
  }

  /// Parse the manifest, scan assets and sources, reconcile and write the report.
  ///
  /// Only a missing or unreadable manifest and report write failures are errors; missing
  /// directories and unreadable files end up in [`AuditReport::warnings`]. Reconciliation
  /// and the report are skipped when nothing is declared or nothing is on disk.
  pub fn run(&self) -> AuditResult<AuditReport> {
    let layout = &self.context.layout;
    let manifest_path = self.context.manifest_path();

    let manifest = read_manifest(&manifest_path)?;
    let declarations = parse_manifest(&manifest, layout);
    info!(count = declarations.len(), manifest = %manifest_path.display(), "parsed asset declarations");

    let asset_dir = self.context.asset_dir();
    info!(dir = %asset_dir.display(), "scanning asset tree");
    let tree = scan_asset_tree(&asset_dir, layout.root_segment());
    let mut warnings = tree.warnings;

    let source_dir = self.context.source_dir();
    info!(dir = %source_dir.display(), "scanning source references");
    let scanner = ReferenceScanner::new(layout);
    let sources = scanner.scan_sources(&source_dir);
    warnings.extend(sources.warnings);
    debug!(references = sources.items.len(), "collected source references");

    let sizes = FsSizeLookup::new(self.context.project_dir);
    let outcome = match evaluate(&declarations, &tree.items, &sources.items, &sizes) {
      Evaluation::NothingDeclared => AuditOutcome::NothingDeclared,
      Evaluation::NothingFound => AuditOutcome::NothingFound,
      Evaluation::Reconciled(result) => {
        let report_path = self.context.report_path();
        write_report(&result, &report_path)?;
        AuditOutcome::Completed {
          result,
          report_path,
        }
      }
    };

    Ok(AuditReport { outcome, warnings })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::AuditError;
  use crate::project::ProjectLayout;
  use std::fs;
  use std::path::Path;
  use tempfile::tempdir;

  fn write(root: &Path, relative: &str, contents: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
  }

  fn manifest(entries: &[&str]) -> String {
    let mut text = String::from("name: demo\nflutter:\n  assets:\n");
    for entry in entries {
      text.push_str(&format!("    - {entry}\n"));
    }
    text
  }

  fn run(root: &Path) -> AuditResult<AuditReport> {
    AssetAuditor::new(AuditContext::new(root, ProjectLayout::default())).run()
  }

  fn completed(report: AuditReport) -> (ReconciliationResult, PathBuf) {
    match report.outcome {
      AuditOutcome::Completed {
        result,
        report_path,
      } => (result, report_path),
      other => panic!("expected a completed audit, got {other:?}"),
    }
  }

  #[test]
  fn reports_unreferenced_files_in_declared_folder() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "pubspec.yaml", manifest(&["assets/images/*"]).as_bytes());
    write(root, "assets/images/a.png", b"aaaa");
    write(root, "assets/images/b.png", b"bbbbbb");
    write(root, "lib/main.dart", b"Image.asset('assets/images/a.png');");

    let (result, report_path) = completed(run(root).unwrap());

    assert_eq!(result.unused_assets_count, 1);
    assert_eq!(result.unused_assets[0].path.as_str(), "assets/images/b.png");
    assert_eq!(result.unused_assets[0].size, 6);
    assert_eq!(result.unused_assets[0].formatted_size, "6 B");
    assert!(result.undeclared_assets.is_empty());
    assert!(result.missing_declared_assets.is_empty());

    assert_eq!(report_path, root.join("unused_assets_report.json"));
    let written: ReconciliationResult =
      serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(written, result);
  }

  #[test]
  fn reports_declared_file_missing_from_disk() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(
      root,
      "pubspec.yaml",
      manifest(&["assets/images/", "assets/fonts/custom.ttf"]).as_bytes(),
    );
    write(root, "assets/images/a.png", b"a");
    write(root, "lib/main.dart", b"const logo = 'assets/images/a.png';");

    let (result, _) = completed(run(root).unwrap());

    assert_eq!(result.missing_declared_assets, vec!["assets/fonts/custom.ttf".to_string()]);
    assert_eq!(result.unused_assets_count, 0);
  }

  #[test]
  fn undeclared_files_are_never_unused() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "pubspec.yaml", manifest(&["assets/images/*"]).as_bytes());
    write(root, "assets/images/a.png", b"a");
    write(root, "assets/data/x.json", b"{}");
    write(root, "lib/main.dart", b"Image.asset('assets/images/a.png');");

    let (result, _) = completed(run(root).unwrap());

    assert_eq!(result.undeclared_assets.len(), 1);
    assert_eq!(result.undeclared_assets[0].as_str(), "assets/data/x.json");
    assert!(result
      .unused_assets
      .iter()
      .all(|asset| asset.path.as_str() != "assets/data/x.json"));
  }

  #[test]
  fn empty_declarations_short_circuit_without_report() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "pubspec.yaml", b"name: demo\nflutter:\n  uses-material-design: true\n");
    write(root, "assets/images/a.png", b"a");

    let report = run(root).unwrap();

    assert_eq!(report.outcome, AuditOutcome::NothingDeclared);
    assert!(!root.join("unused_assets_report.json").exists());
  }

  #[test]
  fn empty_asset_tree_short_circuits_with_warning() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "pubspec.yaml", manifest(&["assets/images/"]).as_bytes());

    let report = run(root).unwrap();

    assert_eq!(report.outcome, AuditOutcome::NothingFound);
    assert_eq!(report.warnings, vec![
      ScanWarning::DirectoryMissing {
        path: root.join("assets"),
      },
      ScanWarning::DirectoryMissing {
        path: root.join("lib"),
      },
    ]);
    assert!(!root.join("unused_assets_report.json").exists());
  }

  #[test]
  fn missing_manifest_aborts_before_writing() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "assets/images/a.png", b"a");

    let err = run(root).unwrap_err();

    assert!(matches!(err, AuditError::ManifestMissing { .. }));
    assert!(!root.join("unused_assets_report.json").exists());
  }

  #[test]
  fn missing_source_dir_is_a_warning() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "pubspec.yaml", manifest(&["assets/a.png"]).as_bytes());
    write(root, "assets/a.png", b"a");

    let report = run(root).unwrap();

    assert_eq!(report.warnings, vec![ScanWarning::DirectoryMissing {
      path: root.join("lib"),
    }]);
    let (result, _) = completed(report);
    assert_eq!(result.referenced_assets, 0);
    assert_eq!(result.unused_assets_count, 1);
  }

  #[test]
  fn nested_root_folder_is_not_merged_with_top_level_file() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "pubspec.yaml", manifest(&["assets/"]).as_bytes());
    write(root, "assets/x.png", b"xx");
    write(root, "assets/assets/x.png", b"nested");
    write(root, "lib/main.dart", b"Image.asset('assets/x.png');");

    let (result, _) = completed(run(root).unwrap());

    assert_eq!(result.total_assets, 2);
    assert_eq!(result.unused_assets_count, 1);
    assert_eq!(result.unused_assets[0].path.as_str(), "assets/assets/x.png");
    assert_eq!(result.unused_assets[0].size, 6);
  }

  #[test]
  fn honours_custom_layout() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let layout = ProjectLayout {
      manifest_file: "assets.yaml".into(),
      asset_root: "static".into(),
      source_root: "src".into(),
      source_extensions: vec!["ts".into()],
      report_file: "asset-report.json".into(),
      ..ProjectLayout::default()
    };
    write(root, "assets.yaml", b"flutter:\n  assets:\n    - img/\n");
    write(root, "static/img/a.svg", b"<svg/>");
    write(root, "static/img/b.svg", b"<svg></svg>");
    write(root, "src/app.ts", b"const icon = 'img/a.svg';");

    let report = AssetAuditor::new(AuditContext::new(root, layout)).run().unwrap();
    let (result, report_path) = completed(report);

    assert_eq!(report_path, root.join("asset-report.json"));
    assert_eq!(result.unused_assets.len(), 1);
    assert_eq!(result.unused_assets[0].path.as_str(), "static/img/b.svg");
  }
}
