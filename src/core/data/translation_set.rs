use std::{fmt, path::PathBuf};

/// One translation folder and the bundle generated from it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TranslationSet {
    /// Folder name, e.g. `"demo"`.
    pub name: String,
    /// Directory holding `<code>.<ext>` files.
    pub folder: PathBuf,
    /// Generated bundle, e.g. `<root>/demo.py`.
    pub dest: PathBuf,
}

impl TranslationSet {
    pub fn new(
        name: impl Into<String>,
        folder: impl Into<PathBuf>,
        dest: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            folder: folder.into(),
            dest: dest.into(),
        }
    }
}

impl fmt::Display for TranslationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
