//! Reading previously generated bundles.
//!
//! Bundles are read as data, never executed. Two things can be recovered:
//! the `# Author:` comments preceding each language block, and (for
//! re-sorting) the translations inside the literal blocks.

use std::{
    collections::BTreeMap,
    fs, io,
    path::Path,
    sync::LazyLock,
};

use regex::Regex;

use crate::core::{
    data::{Catalog, author_name},
    error::CompileError,
};

/// Prefix of an attribution comment line (after trimming).
pub const AUTHOR_MARKER: &str = "# Author: ";

static BLOCK_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([A-Za-z0-9-]+)': \{").unwrap());

static BLOCK_OPEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^'((?:[^'\\]|\\.)*)':\s*\{$").unwrap());

static ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^'((?:[^'\\]|\\.)*)':\s*u?'((?:[^'\\]|\\.)*)',?$").unwrap()
});

/// Read the bundle at `path`; `None` when there is no file there.
pub fn read_bundle(path: &Path) -> Result<Option<String>, CompileError> {
    if path.is_dir() {
        return Ok(None);
    }
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(CompileError::LegacyRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Authors listed above each language block, keyed by the block's code.
///
/// Author lines are collected until the next line that opens a block; that
/// block's code receives all of them. A later block with the same code
/// replaces the earlier list.
pub fn recover_authors(text: &str) -> BTreeMap<String, Vec<String>> {
    let mut authors = BTreeMap::new();
    let mut pending: Vec<String> = Vec::new();
    let mut find_code = false;

    for line in text.lines().map(str::trim) {
        if let Some(author) = line.strip_prefix(AUTHOR_MARKER) {
            pending.extend(author_name(author));
            find_code = true;
        } else if find_code
            && let Some(caps) = BLOCK_HEADER_REGEX.captures(line)
        {
            authors.insert(caps[1].to_string(), std::mem::take(&mut pending));
            find_code = false;
        }
    }

    authors
}

/// Parse the literal blocks of a generated bundle into a catalog.
///
/// Language codes are kept as written in the bundle (site codes). No
/// metadata is produced.
pub fn parse_bundle(text: &str, path: &Path) -> Result<Catalog, CompileError> {
    let mut catalog = Catalog::new();
    let mut current: Option<String> = None;

    let error = |line: usize, message: String| CompileError::LegacyParse {
        path: path.to_path_buf(),
        line,
        message,
    };

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match &current {
            Some(language) => {
                if line == "}," || line == "}" {
                    current = None;
                } else if let Some(caps) = ENTRY_REGEX.captures(line) {
                    catalog.insert(unescape(&caps[1]), language.as_str(), unescape(&caps[2]));
                } else {
                    return Err(error(
                        line_no,
                        format!("unexpected line in block '{}': {}", language, line),
                    ));
                }
            }
            None => {
                if let Some(caps) = BLOCK_OPEN_REGEX.captures(line) {
                    current = Some(unescape(&caps[1]));
                } else if !is_frame_line(line) {
                    return Err(error(line_no, format!("unexpected line: {}", line)));
                }
            }
        }
    }

    if let Some(language) = current {
        return Err(error(
            text.lines().count(),
            format!("block '{}' is never closed", language),
        ));
    }

    Ok(catalog)
}

/// Lines around the language blocks: docstring, `msg = {` and the final `};`.
fn is_frame_line(line: &str) -> bool {
    line.starts_with("\"\"\"")
        || line.starts_with("msg = {")
        || line == "};"
        || line == "}"
}

/// Undo literal escaping: `\n`, `\'`, `\"`, `\\`, `\t` and `\r`.
///
/// Unknown escapes are kept as written.
pub fn unescape(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(q @ ('\'' | '"' | '\\')) => out.push(q),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
