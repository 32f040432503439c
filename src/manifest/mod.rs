//! Manifest reading and asset declaration parsing.

mod parsing;

pub use parsing::{parse_manifest, read_manifest};
