//! Fixed policy tables applied while compiling bundles.
//!
//! The built-in tables are plain data so they can be tested and extended
//! (through `.bundlegenrc.json`) without touching the pipeline.

use std::collections::{BTreeMap, BTreeSet};

/// Translation-set code -> site code.
pub const CODE_MAP: &[(&str, &str)] = &[
    ("be-tarask", "be-x-old"),
    ("bho", "bh"),
    ("gsw", "als"),
    ("lzh", "zh-classical"),
    ("nb", "no"),
    ("nan", "zh-min-nan"),
    ("rup", "roa-rup"),
    ("sgs", "bat-smg"),
    ("vro", "fiu-vro"),
    ("yue", "zh-yue"),
    ("zh-hans", "zh"),
];

/// Contributors that changed their name: (old, new).
pub const RENAMES: &[(&str, &str)] = &[
    ("Rubin", "Rubin16"),
    ("Geoffrey \"GEOFBOT\" Mon", "Sn1per"),
    ("Hym411", "Revi"),
];

/// Messages whose `%(name)s` placeholders are emitted as plain `%s`.
pub const PLAIN_FORMAT_KEYS: &[&str] = &["unlink-unlinking"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMap {
    entries: BTreeMap<String, String>,
}

impl Default for CodeMap {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CodeMap {
    pub fn builtin() -> Self {
        Self::from_pairs(CODE_MAP.iter().copied())
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut map = Self {
            entries: BTreeMap::new(),
        };
        map.extend(pairs);
        map
    }

    /// Add or override entries.
    pub fn extend<'a>(&mut self, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) {
        for (code, site) in pairs {
            self.entries.insert(code.to_string(), site.to_string());
        }
    }

    /// Site code for a translation-set code; identity when unmapped.
    pub fn site_code<'a>(&'a self, code: &'a str) -> &'a str {
        self.entries.get(code).map(String::as_str).unwrap_or(code)
    }

    /// Map a site code found in a generated bundle back to a translation-set code.
    ///
    /// A site code that is itself one of `known` wins, then a known code that
    /// maps onto it, then any code in the map that does. Unmatched codes pass
    /// through.
    pub fn set_code<S: AsRef<str>>(&self, site: &str, known: &BTreeSet<S>) -> String {
        if known.iter().any(|code| code.as_ref() == site) {
            return site.to_string();
        }
        known
            .iter()
            .map(AsRef::as_ref)
            .find(|code| self.site_code(code) == site)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|(_, mapped)| mapped.as_str() == site)
                    .map(|(code, _)| code.as_str())
            })
            .unwrap_or(site)
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameTable {
    pairs: Vec<(String, String)>,
}

impl Default for RenameTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RenameTable {
    pub fn builtin() -> Self {
        Self::from_pairs(RENAMES.iter().copied())
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut table = Self { pairs: Vec::new() };
        table.extend(pairs);
        table
    }

    /// Append renames; they run after the existing ones.
    pub fn extend<'a>(&mut self, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) {
        self.pairs.extend(
            pairs
                .into_iter()
                .map(|(old, new)| (old.to_string(), new.to_string())),
        );
    }

    /// Replace every old name present in `authors` with its new name.
    pub fn apply(&self, authors: &mut BTreeSet<String>) {
        for (old, new) in &self.pairs {
            if authors.remove(old) {
                authors.insert(new.clone());
            }
        }
    }
}

/// Everything the compiler needs besides the input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub code_map: CodeMap,
    pub renames: RenameTable,
    pub plain_format: BTreeSet<String>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            code_map: CodeMap::builtin(),
            renames: RenameTable::builtin(),
            plain_format: PLAIN_FORMAT_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl Policy {
    pub fn is_plain_format(&self, key: &str) -> bool {
        self.plain_format.contains(key)
    }
}
