//! Enumeration of the files present under the asset root.

use std::path::Path;

use tracing::debug;

use super::walk::list_files;
use super::Scanned;
use crate::asset_paths::asset_path_for_file;
use crate::models::AssetPath;

/// List every file under `asset_dir` as a root-prefixed asset path, in discovery order.
///
/// A missing directory yields no assets and a [`super::ScanWarning::DirectoryMissing`].
pub fn scan_asset_tree(asset_dir: &Path, root: &str) -> Scanned<Vec<AssetPath>> {
  let mut warnings = Vec::new();
  let files = list_files(asset_dir, &mut warnings).unwrap_or_default();

  let items: Vec<AssetPath> = files
    .iter()
    .map(|file| AssetPath::new(&asset_path_for_file(asset_dir, file, root), root))
    .collect();
  debug!(count = items.len(), dir = %asset_dir.display(), "asset tree scanned");

  Scanned { items, warnings }
}
