use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures that stop a translation set (or the whole run) from compiling.
///
/// Per-language load problems are not errors: they are reported as
/// [`LoadSkip`](crate::core::parsers::json::LoadSkip) and loading continues.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("{} does not exist", path.display())]
    NotFound { name: String, path: PathBuf },

    #[error("root directory '{}' does not exist", .0.display())]
    RootMissing(PathBuf),

    #[error("failed to list '{}': {source}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no previously generated bundle at '{}' to reorder", .0.display())]
    LegacyMissing(PathBuf),

    #[error("failed to read previous bundle '{}': {source}", path.display())]
    LegacyRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: {message}", path.display())]
    LegacyParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("prompt failed: {0}")]
    Prompt(#[source] io::Error),
}
