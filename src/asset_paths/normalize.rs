use std::path::Path;

/// Produce the canonical form of an asset path.
///
/// The result always uses forward slashes, never starts with `./` or `/`, and always
/// begins with the `root` segment. Paths that already carry the root are unchanged.
pub fn normalize_asset_path(raw: &str, root: &str) -> String {
    let mut path = raw.trim().replace('\\', "/");
    loop {
        if let Some(rest) = path.strip_prefix("./") {
            path = rest.to_string();
        } else if let Some(rest) = path.strip_prefix('/') {
            path = rest.to_string();
        } else {
            break;
        }
    }

    let root = root.trim_matches(|c| c == '/' || c == '\\');
    if root.is_empty() || path == root || path.starts_with(&format!("{root}/")) {
        path
    } else {
        format!("{root}/{path}")
    }
}

/// Convert a file discovered under `scanned_dir` into a root-prefixed asset path.
///
/// Separators are canonicalised before the directory prefix is removed so that mixed
/// separator inputs still strip cleanly. The root is always joined onto the
/// directory-relative path, so a folder named like the root stays distinct.
pub fn asset_path_for_file(scanned_dir: &Path, file: &Path, root: &str) -> String {
    let dir = scanned_dir.to_string_lossy().replace('\\', "/");
    let dir = dir.trim_end_matches('/');
    let file = file.to_string_lossy().replace('\\', "/");

    let relative = file
        .strip_prefix(dir)
        .map(|rest| rest.trim_start_matches('/'))
        .unwrap_or(&file)
        .trim_start_matches('/');

    let root = root.trim_matches(|c| c == '/' || c == '\\');
    if root.is_empty() {
        relative.to_string()
    } else {
        format!("{root}/{relative}")
    }
}
