use std::collections::{BTreeMap, BTreeSet};

use super::{
    data::{Attribution, LanguageMetadata},
    policy::RenameTable,
};

/// Merge declared and recovered authors per language.
///
/// Both inputs are keyed by translation-set code. The result holds, for every
/// language with at least one author, the union of both sources with renames
/// applied, sorted and without duplicates.
pub fn merge_authors(
    metadata: &BTreeMap<String, LanguageMetadata>,
    recovered: &BTreeMap<String, Vec<String>>,
    renames: &RenameTable,
) -> Attribution {
    let mut merged: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for (language, meta) in metadata {
        merged
            .entry(language.clone())
            .or_default()
            .extend(meta.authors.iter().cloned());
    }
    for (language, authors) in recovered {
        merged
            .entry(language.clone())
            .or_default()
            .extend(authors.iter().cloned());
    }

    merged
        .into_iter()
        .filter_map(|(language, mut authors)| {
            renames.apply(&mut authors);
            (!authors.is_empty()).then(|| (language, authors.into_iter().collect()))
        })
        .collect()
}
