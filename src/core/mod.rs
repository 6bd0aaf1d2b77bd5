//! Compile pipeline for translation bundles.
//!
//! A translation set is a folder of `<code>.json` files. It is compiled into
//! a single bundle in five steps:
//!
//! 1. **Resolve** (`resolve`): find the folder(s) under the root
//! 2. **Enumerate** (`enumerate`): list the language codes present
//! 3. **Load** (`parsers::json`, or `parsers::bundle` when re-sorting)
//! 4. **Attribute** (`parsers::bundle`, `attribution`): recover and merge authors
//! 5. **Serialize** (`serialize`): render and write the bundle
//!
//! `pipeline` drives these steps for one set or for every set under the root.

pub mod attribution;
pub mod data;
pub mod enumerate;
pub mod error;
pub mod parsers;
pub mod pipeline;
pub mod policy;
pub mod resolve;
pub mod serialize;

pub use data::{Attribution, Catalog, LanguageMetadata, TranslationSet};
pub use error::CompileError;
pub use pipeline::{
    Compiler, Interaction, Mode, Progress, RunReport, SetFailure, SetOutcome, SetReport, Stage,
};
pub use policy::{CodeMap, Policy, RenameTable};
pub use resolve::SourceLayout;
