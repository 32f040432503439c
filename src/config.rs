//! Project configuration loader for describing the manifest, asset and source layout.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AuditError, AuditResult};
use crate::project::ProjectLayout;

/// Configuration file name discovered inside the project directory.
pub const DEFAULT_CONFIG_FILE: &str = "asset_sweep.json";

/// Discoverable project configuration describing filesystem layout and output paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Manifest file name relative to the project directory.
    pub manifest_file: String,
    /// Top-level manifest line that opens the asset-declaring section.
    pub section_marker: String,
    /// Nested key listing the declared assets.
    pub asset_list_key: String,
    /// Asset directory relative to the project, also used as the asset path root segment.
    pub asset_root: String,
    /// Source directory relative to the project.
    pub source_root: String,
    /// Extensions of source files scanned for references.
    pub source_extensions: Vec<String>,
    /// Extensions recognised as asset literals.
    pub asset_extensions: Vec<String>,
    /// Name of the JSON report written beside the manifest.
    pub report_file: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        let layout = ProjectLayout::default();
        Self {
            manifest_file: layout.manifest_file,
            section_marker: layout.section_marker,
            asset_list_key: layout.asset_list_key,
            asset_root: layout.asset_root,
            source_root: layout.source_root,
            source_extensions: layout.source_extensions,
            asset_extensions: layout.asset_extensions,
            report_file: layout.report_file,
        }
    }
}

impl ProjectConfig {
    /// Attempt to load configuration from the provided project directory.
    ///
    /// When the configuration file does not exist or fails to parse we fallback to default
    /// values so a project without configuration is audited with the conventional layout.
    pub fn discover(project_dir: &Path) -> Self {
        let candidate = project_dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Read a configuration file the user asked for explicitly; failures are fatal.
    pub fn load_required(path: &Path) -> AuditResult<Self> {
        let content = fs::read_to_string(path).map_err(|err| AuditError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|err| AuditError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Convert the configuration into an owned layout description.
    pub fn into_layout(self) -> ProjectLayout {
        ProjectLayout {
            manifest_file: self.manifest_file,
            section_marker: self.section_marker.trim().to_string(),
            asset_list_key: self.asset_list_key.trim().to_string(),
            asset_root: self.asset_root,
            source_root: self.source_root,
            source_extensions: normalise_extensions(self.source_extensions),
            asset_extensions: normalise_extensions(self.asset_extensions),
            report_file: self.report_file,
        }
    }
}

/// Strip leading dots and case from configured extensions, dropping blanks.
fn normalise_extensions(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut extensions: Vec<String> = Vec::new();
    for value in values {
        let ext = value.trim().trim_start_matches('.').to_ascii_lowercase();
        if !ext.is_empty() && !extensions.contains(&ext) {
            extensions.push(ext);
        }
    }
    extensions
}
