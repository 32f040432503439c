//! Project layout description shared by the scanners, the reconciler and the auditor.

use std::path::{Path, PathBuf};

/// Default manifest file name searched for in the project directory.
pub const DEFAULT_MANIFEST_FILE: &str = "pubspec.yaml";

/// Default name of the JSON report written beside the manifest.
pub const DEFAULT_REPORT_FILE: &str = "unused_assets_report.json";

/// Extensions treated as asset literals when scanning source text.
pub const DEFAULT_ASSET_EXTENSIONS: &[&str] = &[
  "png", "jpg", "jpeg", "gif", "webp", "bmp", "svg", "ico", "json", "txt", "csv", "xml", "mp3",
  "wav", "ogg", "m4a", "aac", "mp4", "mov", "webm",
];

/// Naming conventions for a project's manifest, asset tree and source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
  /// Manifest file name relative to the project directory.
  pub manifest_file: String,
  /// Top-level manifest line that opens the asset-declaring section.
  pub section_marker: String,
  /// Nested key inside the section holding the asset list.
  pub asset_list_key: String,
  /// Asset directory relative to the project; doubles as the asset path root segment.
  pub asset_root: String,
  /// Source directory relative to the project.
  pub source_root: String,
  /// File extensions (without the dot) of source files to scan for references.
  pub source_extensions: Vec<String>,
  /// File extensions (without the dot) recognised as asset literals.
  pub asset_extensions: Vec<String>,
  /// Report file name written beside the manifest.
  pub report_file: String,
}

impl Default for ProjectLayout {
  fn default() -> Self {
    Self {
      manifest_file: DEFAULT_MANIFEST_FILE.into(),
      section_marker: "flutter:".into(),
      asset_list_key: "assets:".into(),
      asset_root: "assets".into(),
      source_root: "lib".into(),
      source_extensions: vec!["dart".into()],
      asset_extensions: DEFAULT_ASSET_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
      report_file: DEFAULT_REPORT_FILE.into(),
    }
  }
}

impl ProjectLayout {
  /// Root segment every normalised asset path starts with.
  pub fn root_segment(&self) -> &str {
    self.asset_root.trim_matches('/')
  }
}

/// A layout bound to a concrete project directory.
#[derive(Debug, Clone)]
pub struct AuditContext<'a> {
  /// Directory containing the manifest.
  pub project_dir: &'a Path,
  /// Naming conventions applied inside `project_dir`.
  pub layout: ProjectLayout,
}

impl<'a> AuditContext<'a> {
  /// Bind `layout` to `project_dir`.
  pub fn new(project_dir: &'a Path, layout: ProjectLayout) -> Self {
    Self { project_dir, layout }
  }

  /// Absolute location of the manifest file.
  pub fn manifest_path(&self) -> PathBuf {
    self.project_dir.join(&self.layout.manifest_file)
  }

  /// Directory holding the on-disk assets.
  pub fn asset_dir(&self) -> PathBuf {
    self.project_dir.join(self.layout.root_segment())
  }

  /// Directory holding the source files scanned for references.
  pub fn source_dir(&self) -> PathBuf {
    self.project_dir.join(&self.layout.source_root)
  }

  /// Location of the JSON report.
  pub fn report_path(&self) -> PathBuf {
    self.project_dir.join(&self.layout.report_file)
  }
}
