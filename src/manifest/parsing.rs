//! Line-oriented extraction of asset declarations from the manifest.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{AuditError, AuditResult};
use crate::models::Declaration;
use crate::project::ProjectLayout;

/// Position of the parser relative to the asset list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
  /// Before the top-level section marker.
  Outside,
  /// Inside the section, waiting for the asset list key.
  InSection,
  /// Inside the asset list; `key_indent` is the indentation of the list key.
  InAssetList { key_indent: usize },
  /// The asset list ended; nothing after this point is read.
  Exited,
}

/// What a line inside the asset list means.
#[derive(Debug, PartialEq, Eq)]
enum ListLine<'a> {
  Item(&'a str),
  Skip,
  End,
}

/// Read the manifest text, distinguishing a missing file from other I/O failures.
pub fn read_manifest(path: &Path) -> AuditResult<String> {
  fs::read_to_string(path).map_err(|err| match err.kind() {
    ErrorKind::NotFound => AuditError::ManifestMissing {
      path: path.to_path_buf(),
    },
    _ => AuditError::ManifestUnreadable {
      path: path.to_path_buf(),
      source: err,
    },
  })
}

/// Extract the asset declarations from manifest text in the order they appear.
///
/// Only the first asset list inside the section is read. A manifest without the section,
/// or with an empty list, yields no declarations.
pub fn parse_manifest(content: &str, layout: &ProjectLayout) -> Vec<Declaration> {
  let root = layout.root_segment();
  let mut declarations = Vec::new();
  let mut state = ParseState::Outside;

  for line in content.lines() {
    state = match state {
      ParseState::Outside if line.trim() == layout.section_marker => ParseState::InSection,
      ParseState::InSection if line.trim() == layout.asset_list_key => ParseState::InAssetList {
        key_indent: indentation(line),
      },
      ParseState::InAssetList { key_indent } => match classify_list_line(line, key_indent) {
        ListLine::Item(value) => {
          declarations.extend(Declaration::from_manifest_value(
            unquote(strip_inline_comment(value)),
            root,
          ));
          state
        }
        ListLine::Skip => state,
        ListLine::End => ParseState::Exited,
      },
      other => other,
    };

    if state == ParseState::Exited {
      break;
    }
  }

  declarations
}

fn classify_list_line(line: &str, key_indent: usize) -> ListLine<'_> {
  let trimmed = line.trim();
  if trimmed.is_empty() || trimmed.starts_with('#') {
    return ListLine::Skip;
  }
  if let Some(value) = trimmed.strip_prefix('-') {
    return ListLine::Item(value.trim());
  }

  // A top-level line, or a sibling key of the list, closes the list.
  let indent = indentation(line);
  if indent == 0 || indent <= key_indent {
    ListLine::End
  } else {
    ListLine::Skip
  }
}

fn indentation(line: &str) -> usize {
  line.len() - line.trim_start().len()
}

/// Drop a trailing ` # comment`, ignoring `#` inside a leading quoted value.
fn strip_inline_comment(value: &str) -> &str {
  let quoted_end = match value.chars().next() {
    Some(quote @ ('"' | '\'')) => value[1..].find(quote).map_or(0, |end| end + 2),
    _ => 0,
  };
  let rest = &value[quoted_end..];
  match [" #", "\t#"].iter().filter_map(|marker| rest.find(marker)).min() {
    Some(pos) => value[..quoted_end + pos].trim_end(),
    None if rest.starts_with('#') && quoted_end > 0 => &value[..quoted_end],
    None => value,
  }
}

fn unquote(value: &str) -> &str {
  value.trim_matches(|c| c == '"' || c == '\'').trim()
}
