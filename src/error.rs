//! Fatal error types surfaced by the auditor.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used by fallible auditor operations.
pub type AuditResult<T> = Result<T, AuditError>;

/// Conditions that abort an audit before a report is written.
#[derive(Debug, Error)]
pub enum AuditError {
  /// The manifest file does not exist.
  #[error("manifest not found at {}", path.display())]
  ManifestMissing {
    /// Expected manifest location.
    path: PathBuf,
  },

  /// The manifest exists but could not be read.
  #[error("failed to read manifest {}: {source}", path.display())]
  ManifestUnreadable {
    /// Manifest location.
    path: PathBuf,
    /// Underlying I/O error.
    source: std::io::Error,
  },

  /// An explicitly requested configuration file is missing or invalid.
  #[error("invalid configuration {}: {message}", path.display())]
  Config {
    /// Configuration file location.
    path: PathBuf,
    /// Description of the problem.
    message: String,
  },

  /// The report could not be written.
  #[error("failed to write report {}: {source}", path.display())]
  ReportWrite {
    /// Report location.
    path: PathBuf,
    /// Underlying I/O error.
    source: std::io::Error,
  },

  /// The report could not be serialised.
  #[error("failed to serialise report: {0}")]
  Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn manifest_missing_names_the_path() {
    let err = AuditError::ManifestMissing {
      path: PathBuf::from("app/pubspec.yaml"),
    };
    assert_eq!(err.to_string(), "manifest not found at app/pubspec.yaml");
  }
}
