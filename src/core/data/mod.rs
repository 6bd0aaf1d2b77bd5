//! Core data types shared by every pipeline stage.
//!
//! - `catalog`: the merged message catalog and per-language metadata
//! - `translation_set`: a resolved translation folder and its bundle path

pub mod catalog;
pub mod translation_set;

pub use catalog::{
    Attribution, Catalog, LanguageCode, LanguageMetadata, MessageKey, author_name,
};
pub use translation_set::TranslationSet;
