use regex::Regex;

fn asset_reference_ignores() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^[a-z][a-z0-9+.-]*://").expect("invalid url scheme regex"),
                Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
                Regex::new(r"(?i)^package:").expect("invalid package URI regex"),
            ]
        })
        .as_slice()
}

/// Determine whether an extracted literal points outside the local asset tree.
///
/// Network URLs, data URIs and package URIs can never name a file under the asset root,
/// so they are dropped before normalisation.
pub fn should_ignore_asset_reference(value: &str) -> bool {
    asset_reference_ignores()
        .iter()
        .any(|pattern| pattern.is_match(value))
}
