//! Translation-set resolution.
//!
//! A root directory holds one sub-directory per translation set. The bundle
//! for `<root>/<name>/` is written next to it as `<root>/<name>.<ext>`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::{data::TranslationSet, error::CompileError};

/// Where translation sets live and how their files are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    pub root: PathBuf,
    /// Extension of per-language input files, without the dot.
    pub source_extension: String,
    /// Extension of generated bundles, without the dot.
    pub output_extension: String,
    /// Directory names starting with this prefix are never translation sets.
    pub hidden_prefix: String,
}

impl SourceLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            source_extension: "json".to_string(),
            output_extension: "py".to_string(),
            hidden_prefix: ".".to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a single translation set by folder name.
    pub fn resolve(&self, name: &str) -> Result<TranslationSet, CompileError> {
        let name = name.trim().trim_end_matches(['/', '\\']);
        let set = self.translation_set(name);
        if name.is_empty() || !set.folder.is_dir() {
            return Err(CompileError::NotFound {
                name: name.to_string(),
                path: set.folder,
            });
        }
        Ok(set)
    }

    /// Every non-hidden directory under the root, sorted by name.
    pub fn discover(&self) -> Result<Vec<TranslationSet>, CompileError> {
        if !self.root.is_dir() {
            return Err(CompileError::RootMissing(self.root.clone()));
        }

        let entries = fs::read_dir(&self.root).map_err(|source| CompileError::List {
            path: self.root.clone(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(error = %e, "cannot access entry under {}", self.root.display());
                    continue;
                }
            };
            if !entry.path().is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                debug!(path = %entry.path().display(), "skipping non UTF-8 directory name");
                continue;
            };
            if self.is_hidden(&name) {
                continue;
            }
            names.push(name);
        }
        names.sort();

        Ok(names
            .iter()
            .map(|name| self.translation_set(name))
            .collect())
    }

    fn is_hidden(&self, name: &str) -> bool {
        !self.hidden_prefix.is_empty() && name.starts_with(&self.hidden_prefix)
    }

    fn translation_set(&self, name: &str) -> TranslationSet {
        TranslationSet::new(
            name,
            self.root.join(name),
            self.root
                .join(format!("{}.{}", name, self.output_extension)),
        )
    }
}
