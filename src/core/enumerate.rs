use std::{collections::BTreeSet, io, path::Path};

use tracing::debug;
use walkdir::WalkDir;

use super::error::CompileError;

/// Language codes of the data files directly inside `folder`.
///
/// The code is the file name up to its first `.`, so `en.json` gives `en` and
/// `zh-hans.json` gives `zh-hans`. An empty folder is not an error.
pub fn enumerate_languages(
    folder: &Path,
    extension: &str,
) -> Result<BTreeSet<String>, CompileError> {
    let mut languages = BTreeSet::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(CompileError::List {
                    path: folder.to_path_buf(),
                    source: e.into_io_error().unwrap_or_else(|| io::Error::other("walk failed")),
                });
            }
            Err(e) => {
                debug!(error = %e, "cannot access path");
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|e| e.to_str()) != Some(extension)
        {
            continue;
        }

        if let Some(code) = language_code(path) {
            languages.insert(code.to_string());
        }
    }

    Ok(languages)
}

fn language_code(path: &Path) -> Option<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('.').next())
        .filter(|code| !code.is_empty())
}
