//! Filesystem scanners producing the on-disk asset set and the referenced asset set.
//!
//! Scanners never fail: unreadable or missing directories degrade to empty results and a
//! [`ScanWarning`] the caller can surface.

mod references;
mod tree;
mod walk;

use std::fmt;
use std::path::PathBuf;

pub use references::{ReferencePattern, ReferenceScanner, default_reference_patterns};
pub use tree::scan_asset_tree;

/// Non-fatal problem encountered while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
  /// A directory that should be scanned does not exist.
  DirectoryMissing {
    /// Location that was expected.
    path: PathBuf,
  },
  /// A directory or file could not be read and was skipped.
  Unreadable {
    /// Location that failed.
    path: PathBuf,
    /// Description of the failure.
    message: String,
  },
}

impl fmt::Display for ScanWarning {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::DirectoryMissing { path } => write!(f, "directory not found: {}", path.display()),
      Self::Unreadable { path, message } => {
        write!(f, "skipped unreadable {}: {}", path.display(), message)
      }
    }
  }
}

/// Items collected by a scanner together with any warnings raised along the way.
#[derive(Debug, Clone, Default)]
pub struct Scanned<T> {
  /// Collected items.
  pub items: T,
  /// Problems that did not stop the scan.
  pub warnings: Vec<ScanWarning>,
}
