//! Declaration matching: decides whether an asset is covered by the manifest.

use crate::models::{AssetPath, Declaration, DeclarationKind, FOLDER_GLOB_SUFFIX};

/// Trait describing which assets count as declared.
pub trait AssetInclusion {
  /// Returns `true` when `path` is covered by a declaration.
  fn is_included(&self, path: &AssetPath) -> bool;
}

impl AssetInclusion for [Declaration] {
  fn is_included(&self, path: &AssetPath) -> bool {
    is_asset_declared(path, self)
  }
}

impl AssetInclusion for Vec<Declaration> {
  fn is_included(&self, path: &AssetPath) -> bool {
    is_asset_declared(path, self)
  }
}

/// Determine whether any declaration covers `path`.
pub fn is_asset_declared(path: &AssetPath, declarations: &[Declaration]) -> bool {
  declarations
    .iter()
    .any(|declaration| declaration_matches(declaration, path))
}

/// Determine whether a single declaration covers `path`.
///
/// Exact files match by equality. Folder declarations match every path under the folder;
/// a bare folder without trailing slash only matches at a segment boundary, so
/// `assets/icon` never covers `assets/icons/a.png`.
pub fn declaration_matches(declaration: &Declaration, path: &AssetPath) -> bool {
  let value = declaration.value();
  match declaration.kind() {
    DeclarationKind::ExactFile => path.as_str() == value,
    DeclarationKind::FolderWildcard => {
      let prefix = value
        .strip_suffix(FOLDER_GLOB_SUFFIX)
        .map(|stem| &value[..stem.len() + 1])
        .unwrap_or(value);
      scope_matches(prefix, path.as_str())
    }
  }
}

fn scope_matches(prefix: &str, candidate: &str) -> bool {
  if prefix.ends_with('/') {
    return candidate.starts_with(prefix);
  }

  candidate == prefix
    || candidate
      .strip_prefix(prefix)
      .is_some_and(|suffix| suffix.starts_with('/'))
}
