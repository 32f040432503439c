//! Textual extraction of asset-path literals from source files.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use super::walk::list_files;
use super::{ScanWarning, Scanned};
use crate::asset_paths::should_ignore_asset_reference;
use crate::models::AssetPath;
use crate::project::ProjectLayout;

/// A named textual rule that yields asset paths from one capture group.
#[derive(Debug, Clone)]
pub struct ReferencePattern {
  name: String,
  regex: Regex,
  group: usize,
}

impl ReferencePattern {
  /// Compile a pattern whose capture `group` holds the asset path.
  pub fn new(name: impl Into<String>, pattern: &str, group: usize) -> Result<Self, regex::Error> {
    Ok(Self {
      name: name.into(),
      regex: Regex::new(pattern)?,
      group,
    })
  }

  /// Identifier of the rule.
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Every captured value in `text`, in match order.
  pub fn captures<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
    self
      .regex
      .captures_iter(text)
      .filter_map(|caps| caps.get(self.group).map(|m| m.as_str()))
  }
}

/// Build the standard rule set.
///
/// - `quoted_asset_literal`: any quoted literal `<root>/<path>.<ext>` with an allowed extension.
/// - `asset_image_call`: the first string argument of `AssetImage(...)` or `Image.asset(...)`,
///   whatever its extension.
/// - `asset_assignment`: a quoted value with an allowed extension on the right of `=`.
pub fn default_reference_patterns(root: &str, asset_extensions: &[String]) -> Vec<ReferencePattern> {
  let mut patterns = Vec::new();

  if !asset_extensions.is_empty() {
    let extensions = asset_extensions
      .iter()
      .map(|ext| regex::escape(ext))
      .collect::<Vec<_>>()
      .join("|");
    let root = regex::escape(root.trim_matches('/'));

    patterns.push(
      ReferencePattern::new(
        "quoted_asset_literal",
        &format!(r#"["']({root}/[^"'\r\n]+\.(?i:{extensions}))["']"#),
        1,
      )
      .expect("invalid quoted asset literal regex"),
    );
    patterns.push(
      ReferencePattern::new(
        "asset_assignment",
        &format!(r#"=\s*["']([^"'\r\n]+\.(?i:{extensions}))["']"#),
        1,
      )
      .expect("invalid asset assignment regex"),
    );
  }

  patterns.push(
    ReferencePattern::new(
      "asset_image_call",
      r#"\b(?:AssetImage|Image\.asset)\(\s*["']([^"'\r\n]+)["']"#,
      1,
    )
    .expect("invalid asset image call regex"),
  );

  patterns
}

/// Scans source files for asset references using an extensible list of patterns.
#[derive(Debug, Clone)]
pub struct ReferenceScanner {
  root: String,
  source_extensions: Vec<String>,
  patterns: Vec<ReferencePattern>,
}

impl ReferenceScanner {
  /// Scanner with the standard patterns for the given layout.
  pub fn new(layout: &ProjectLayout) -> Self {
    Self {
      root: layout.root_segment().to_string(),
      source_extensions: layout.source_extensions.clone(),
      patterns: default_reference_patterns(layout.root_segment(), &layout.asset_extensions),
    }
  }

  /// Append another extraction rule.
  pub fn with_pattern(mut self, pattern: ReferencePattern) -> Self {
    self.patterns.push(pattern);
    self
  }

  /// Rules applied to each file, in order.
  pub fn patterns(&self) -> &[ReferencePattern] {
    &self.patterns
  }

  /// Apply every pattern to `text` and return the union of normalised asset paths.
  pub fn extract_references(&self, text: &str) -> BTreeSet<AssetPath> {
    let mut references = BTreeSet::new();
    for pattern in &self.patterns {
      for value in pattern.captures(text) {
        let value = value.trim();
        if value.is_empty() || should_ignore_asset_reference(value) {
          continue;
        }
        references.insert(AssetPath::new(value, &self.root));
      }
    }
    references
  }

  /// Recursively scan `source_dir`, reading every file with a recognised source extension.
  ///
  /// A missing directory or unreadable file produces a warning instead of an error.
  pub fn scan_sources(&self, source_dir: &Path) -> Scanned<BTreeSet<AssetPath>> {
    let mut warnings = Vec::new();
    let mut items = BTreeSet::new();
    let files = list_files(source_dir, &mut warnings).unwrap_or_default();

    for file in files.iter().filter(|file| self.is_source_file(file)) {
      match fs::read_to_string(file) {
        Ok(text) => {
          let found = self.extract_references(&text);
          debug!(file = %file.display(), references = found.len(), "scanned source file");
          items.extend(found);
        }
        Err(err) => warnings.push(ScanWarning::Unreadable {
          path: file.clone(),
          message: err.to_string(),
        }),
      }
    }

    Scanned { items, warnings }
  }

  fn is_source_file(&self, path: &Path) -> bool {
    path
      .extension()
      .and_then(|ext| ext.to_str())
      .is_some_and(|ext| {
        self
          .source_extensions
          .iter()
          .any(|allowed| allowed.eq_ignore_ascii_case(ext))
      })
  }
}
