//! Reconciliation of declarations, on-disk assets and source references.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::models::{AssetPath, Declaration, ReconciliationResult, UnusedAsset};
use crate::report::format_file_size;
use crate::selection::AssetInclusion;

/// Byte size lookup for assets, kept behind a trait so reconciliation stays pure.
pub trait SizeLookup {
  /// Size of `path` in bytes, or `None` when it cannot be determined.
  fn size_of(&self, path: &AssetPath) -> Option<u64>;
}

/// Looks sizes up on disk, resolving asset paths against a project directory.
#[derive(Debug, Clone, Copy)]
pub struct FsSizeLookup<'a> {
  root: &'a Path,
}

impl<'a> FsSizeLookup<'a> {
  /// Resolve asset paths against `root`.
  pub fn new(root: &'a Path) -> Self {
    Self { root }
  }
}

impl SizeLookup for FsSizeLookup<'_> {
  fn size_of(&self, path: &AssetPath) -> Option<u64> {
    let metadata = fs::metadata(self.root.join(path.as_str())).ok()?;
    metadata.is_file().then(|| metadata.len())
  }
}

/// Result of evaluating a project snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
  /// The manifest declares no assets; there is nothing to compare.
  NothingDeclared,
  /// No files exist under the asset root.
  NothingFound,
  /// Reconciliation ran.
  Reconciled(ReconciliationResult),
}

/// Evaluate a snapshot, short-circuiting when there is nothing to reconcile.
pub fn evaluate<S: SizeLookup>(
  declarations: &[Declaration],
  assets: &[AssetPath],
  references: &BTreeSet<AssetPath>,
  sizes: &S,
) -> Evaluation {
  if declarations.is_empty() {
    return Evaluation::NothingDeclared;
  }
  if assets.is_empty() {
    return Evaluation::NothingFound;
  }
  Evaluation::Reconciled(reconcile(assets, references, declarations, sizes))
}

/// Combine the three sets into unused, undeclared and missing-declared assets.
///
/// Unused assets whose size cannot be read are left out of the report entirely, so the
/// count and total always describe the same entries. Missing declarations are detected
/// with a plain prefix test on the declaration stem (only `/*` is stripped), which is
/// deliberately looser than coverage matching.
pub fn reconcile<S: SizeLookup>(
  assets: &[AssetPath],
  references: &BTreeSet<AssetPath>,
  declarations: &[Declaration],
  sizes: &S,
) -> ReconciliationResult {
  let mut unused_assets = Vec::new();
  let mut undeclared_assets = Vec::new();

  for asset in assets {
    if !declarations.is_included(asset) {
      undeclared_assets.push(asset.clone());
      continue;
    }
    if references.contains(asset) {
      continue;
    }
    if let Some(size) = sizes.size_of(asset) {
      unused_assets.push(UnusedAsset {
        path: asset.clone(),
        size,
        formatted_size: format_file_size(size),
      });
    }
  }

  // Stable: equal sizes keep discovery order.
  unused_assets.sort_by(|a, b| b.size.cmp(&a.size));

  let missing_declared_assets = declarations
    .iter()
    .filter(|declaration| {
      let stem = declaration.stem();
      !assets.iter().any(|asset| asset.starts_with(stem))
    })
    .map(|declaration| declaration.value().to_string())
    .collect();

  ReconciliationResult {
    total_assets: assets.len(),
    declared_assets: declarations.len(),
    referenced_assets: references.len(),
    unused_assets_count: unused_assets.len(),
    unused_assets_total_size: unused_assets.iter().map(|asset| asset.size).sum(),
    unused_assets,
    undeclared_assets,
    missing_declared_assets,
  }
}
