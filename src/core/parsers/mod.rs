//! File parsers for translation inputs and generated bundles.
//!
//! - `json`: per-language JSON files (one file per language code)
//! - `bundle`: previously generated bundles (authors and literal blocks)

pub mod bundle;
pub mod json;
