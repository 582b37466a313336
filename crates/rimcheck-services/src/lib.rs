//! High-level orchestration layer over lower-level crates.
//! Intentionally thin: exposes stable functions used by CLI/GUI/editor
//! clients without making them import parser or validator crates.

mod mod_check;
mod validate;

pub use rimcheck_core::Result;

pub use mod_check::validate_mod;
pub use validate::{validate_defs_dir, validate_file, validate_file_with_tags};
