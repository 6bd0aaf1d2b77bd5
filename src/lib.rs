//! bundlegen - translation bundle compiler
//!
//! Compiles folders of per-language JSON translation files into single,
//! deterministic message bundles, keeping contributor attribution from the
//! previously generated bundle.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, prompts, output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Compile pipeline (resolve, load, attribute, serialize)

pub mod cli;
pub mod config;
pub mod core;
