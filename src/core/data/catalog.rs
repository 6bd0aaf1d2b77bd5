use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};

/// Language code as used in source filenames (`en`, `be-tarask`, `qqq`).
pub type LanguageCode = String;

/// Message identifier, unique within a translation set.
pub type MessageKey = String;

/// Author names per language, in the order they will be emitted.
pub type Attribution = BTreeMap<LanguageCode, Vec<String>>;

/// Metadata declared by a single language file under its `@metadata` key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageMetadata {
    /// Contributors listed under `authors`, coerced to text.
    pub authors: Vec<String>,
    /// Every other metadata field, kept verbatim.
    pub extra: Map<String, Value>,
}

impl LanguageMetadata {
    /// Interpret a raw `@metadata` value.
    ///
    /// Returns `None` when the value is not an object. An `authors` entry that
    /// is a single string counts as one author; numbers and other scalars are
    /// rendered as text. Names are normalized with [`author_name`] and blank
    /// ones are dropped.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut map) = value else {
            return None;
        };

        let authors = match map.remove("authors") {
            Some(Value::Array(items)) => items.into_iter().filter_map(author_text).collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(single) => author_text(single).into_iter().collect(),
        };

        Some(Self {
            authors,
            extra: map,
        })
    }
}

fn author_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => author_name(&s),
        other => author_name(&other.to_string()),
    }
}

/// Normalize an author name to what survives an `# Author:` comment line.
///
/// Line breaks become spaces and surrounding whitespace is trimmed; `None`
/// when nothing is left.
pub fn author_name(raw: &str) -> Option<String> {
    let name = raw.replace(['\r', '\n'], " ");
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Merged translations of one translation set.
///
/// Message entries and per-language metadata are kept apart so that no lookup
/// ever needs to special-case the `@metadata` key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    /// key -> language -> translated text
    pub messages: BTreeMap<MessageKey, BTreeMap<LanguageCode, String>>,
    /// language -> metadata declared by that language's file
    pub metadata: BTreeMap<LanguageCode, LanguageMetadata>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the translation of `key` for `language`.
    pub fn insert(
        &mut self,
        key: impl Into<MessageKey>,
        language: impl Into<LanguageCode>,
        text: impl Into<String>,
    ) {
        self.messages
            .entry(key.into())
            .or_default()
            .insert(language.into(), text.into());
    }

    pub fn translation(&self, key: &str, language: &str) -> Option<&str> {
        self.messages
            .get(key)
            .and_then(|per_language| per_language.get(language))
            .map(String::as_str)
    }

    /// Languages that have at least one message.
    pub fn languages(&self) -> BTreeSet<&str> {
        self.messages
            .values()
            .flat_map(|per_language| per_language.keys())
            .map(String::as_str)
            .collect()
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
