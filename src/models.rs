//! Data structures produced while auditing a project's assets.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::asset_paths::normalize_asset_path;

/// Suffix marking a manifest entry as "every file under this folder".
pub const FOLDER_GLOB_SUFFIX: &str = "/*";

/// Forward-slash separated asset path that always starts with the asset root segment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetPath(String);

impl AssetPath {
  /// Normalise `raw` and make sure it is prefixed with `root`.
  pub fn new(raw: &str, root: &str) -> Self {
    Self(normalize_asset_path(raw, root))
  }

  /// Borrow the normalised path.
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Plain string prefix test on the normalised path.
  pub fn starts_with(&self, prefix: &str) -> bool {
    self.0.starts_with(prefix)
  }
}

impl fmt::Display for AssetPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl AsRef<str> for AssetPath {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl Borrow<str> for AssetPath {
  fn borrow(&self) -> &str {
    &self.0
  }
}

/// How a manifest entry selects files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
  /// A single file, matched by equality.
  ExactFile,
  /// Every file under a folder, matched by prefix.
  FolderWildcard,
}

/// One asset entry from the manifest, normalised and classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
  value: String,
  kind: DeclarationKind,
}

impl Declaration {
  /// Build a declaration from a manifest value that has already been unquoted.
  ///
  /// Returns `None` for blank entries.
  pub fn from_manifest_value(raw: &str, root: &str) -> Option<Self> {
    let raw = raw.trim();
    if raw.is_empty() {
      return None;
    }

    let value = normalize_asset_path(raw, root);
    let kind = classify(&value);
    Some(Self { value, kind })
  }

  /// Normalised declaration text, including any folder glob suffix.
  pub fn value(&self) -> &str {
    &self.value
  }

  /// Classification of the declaration.
  pub fn kind(&self) -> DeclarationKind {
    self.kind
  }

  /// Declaration text with a trailing `/*` removed.
  ///
  /// Only the glob suffix is stripped, so bare folders and trailing-slash folders keep
  /// their raw text. This is the stem used when checking for missing declarations.
  pub fn stem(&self) -> &str {
    self.value
      .strip_suffix(FOLDER_GLOB_SUFFIX)
      .unwrap_or(&self.value)
  }
}

impl fmt::Display for Declaration {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.value)
  }
}

fn classify(value: &str) -> DeclarationKind {
  if value.ends_with(FOLDER_GLOB_SUFFIX) || value.ends_with('/') || !value.contains('.') {
    DeclarationKind::FolderWildcard
  } else {
    DeclarationKind::ExactFile
  }
}

/// Declared asset that no source file references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnusedAsset {
  /// Asset path.
  pub path: AssetPath,
  /// Size on disk in bytes.
  pub size: u64,
  /// Human readable size, e.g. `1.5 KB`.
  #[serde(rename = "formattedSize")]
  pub formatted_size: String,
}

/// Outcome of reconciling declarations, on-disk assets and source references.
///
/// Field order and names are the persisted report format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationResult {
  /// Number of files found under the asset root.
  pub total_assets: usize,
  /// Number of manifest declarations.
  pub declared_assets: usize,
  /// Number of distinct asset paths referenced from source.
  pub referenced_assets: usize,
  /// Unused assets, largest first.
  pub unused_assets: Vec<UnusedAsset>,
  /// Length of `unused_assets`.
  pub unused_assets_count: usize,
  /// Sum of `unused_assets` sizes in bytes.
  pub unused_assets_total_size: u64,
  /// Files on disk not covered by any declaration, in discovery order.
  pub undeclared_assets: Vec<AssetPath>,
  /// Declarations without any matching file on disk, in manifest order.
  pub missing_declared_assets: Vec<String>,
}
