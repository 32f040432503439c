//! Helpers for normalising asset paths and filtering asset references.
//!
//! Manifest entries, on-disk files and source literals all pass through the same
//! normalisation so that the reconciler can compare them as plain strings.

mod filters;
mod normalize;

pub use filters::should_ignore_asset_reference;
pub use normalize::{asset_path_for_file, normalize_asset_path};
