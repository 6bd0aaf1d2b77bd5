use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::data::{Catalog, LanguageMetadata};

/// Reserved key holding per-language metadata (authors and friends).
pub const METADATA_KEY: &str = "@metadata";

/// A language file that was left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSkip {
    pub language: String,
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct LoadResult {
    pub catalog: Catalog,
    pub skipped: Vec<LoadSkip>,
}

/// One parsed `<code>.json` file.
#[derive(Debug, Default, PartialEq)]
pub struct LanguageFile {
    pub messages: Vec<(String, String)>,
    pub metadata: Option<LanguageMetadata>,
}

pub fn parse_json_file(path: &Path) -> Result<LanguageFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    let Value::Object(map) = json else {
        bail!("Root of JSON file must be an object: {:?}", path);
    };

    Ok(split_metadata(map, path))
}

fn split_metadata(map: Map<String, Value>, path: &Path) -> LanguageFile {
    let mut file = LanguageFile::default();

    for (key, value) in map {
        if key == METADATA_KEY {
            file.metadata = LanguageMetadata::from_value(value);
            if file.metadata.is_none() {
                debug!(path = %path.display(), "ignoring {} that is not an object", METADATA_KEY);
            }
            continue;
        }
        match value {
            Value::String(text) => file.messages.push((key, text)),
            other => {
                debug!(path = %path.display(), key = %key, value = %other, "ignoring non-string message");
            }
        }
    }

    file
}

/// Load `<folder>/<code>.<extension>` for every language into one catalog.
///
/// Unreadable or malformed files are recorded in [`LoadResult::skipped`] and
/// do not stop the remaining languages from loading.
pub fn load_translations<S: AsRef<str>>(
    folder: &Path,
    languages: &BTreeSet<S>,
    extension: &str,
) -> LoadResult {
    let mut result = LoadResult::default();

    for language in languages {
        let language = language.as_ref();
        let path = folder.join(format!("{}.{}", language, extension));

        match parse_json_file(&path) {
            Ok(file) => {
                for (key, text) in file.messages {
                    result.catalog.insert(key, language, text);
                }
                if let Some(metadata) = file.metadata {
                    result.catalog.metadata.insert(language.to_string(), metadata);
                }
            }
            Err(e) => {
                debug!(language, error = %format!("{:#}", e), "skipping language file");
                result.skipped.push(LoadSkip {
                    language: language.to_string(),
                    path,
                    reason: format!("{:#}", e),
                });
            }
        }
    }

    result
}
