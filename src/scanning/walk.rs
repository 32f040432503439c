//! Recursive directory listing shared by the scanners.

use std::fs;
use std::path::{Path, PathBuf};

use super::ScanWarning;

/// Collect every regular file beneath `dir`, visiting entries in file-name order.
///
/// Returns `None` with a warning when `dir` does not exist.
pub(crate) fn list_files(dir: &Path, warnings: &mut Vec<ScanWarning>) -> Option<Vec<PathBuf>> {
  if !dir.is_dir() {
    warnings.push(ScanWarning::DirectoryMissing {
      path: dir.to_path_buf(),
    });
    return None;
  }

  let mut files = Vec::new();
  collect_files_recursively(dir, &mut files, warnings);
  Some(files)
}

fn collect_files_recursively(dir: &Path, files: &mut Vec<PathBuf>, warnings: &mut Vec<ScanWarning>) {
  let mut entries: Vec<fs::DirEntry> = match fs::read_dir(dir) {
    Ok(entries) => entries.flatten().collect(),
    Err(err) => {
      warnings.push(ScanWarning::Unreadable {
        path: dir.to_path_buf(),
        message: err.to_string(),
      });
      return;
    }
  };
  entries.sort_by_key(|entry| entry.file_name());

  for entry in entries {
    let Ok(file_type) = entry.file_type() else {
      continue;
    };

    let path = entry.path();
    if file_type.is_dir() {
      collect_files_recursively(&path, files, warnings);
    } else if file_type.is_file() {
      files.push(path);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn lists_nested_files_in_name_order() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("b/nested")).unwrap();
    fs::write(root.join("c.txt"), "c").unwrap();
    fs::write(root.join("a.txt"), "a").unwrap();
    fs::write(root.join("b/nested/d.txt"), "d").unwrap();

    let mut warnings = Vec::new();
    let files = list_files(root, &mut warnings).unwrap();
    let relative: Vec<PathBuf> = files
      .iter()
      .map(|file| file.strip_prefix(root).unwrap().to_path_buf())
      .collect();

    assert_eq!(relative, vec![
      PathBuf::from("a.txt"),
      PathBuf::from("b/nested/d.txt"),
      PathBuf::from("c.txt"),
    ]);
    assert!(warnings.is_empty());
  }

  #[test]
  fn missing_directory_produces_warning() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");
    let mut warnings = Vec::new();

    assert!(list_files(&missing, &mut warnings).is_none());
    assert_eq!(warnings, vec![ScanWarning::DirectoryMissing { path: missing }]);
  }
}
