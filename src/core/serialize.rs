//! Rendering a catalog into a bundle.
//!
//! The output is byte-for-byte stable for a given catalog and attribution:
//! languages and keys are emitted in a fixed order and every line ends with
//! CRLF, matching bundles generated historically.

use std::{borrow::Cow, fmt::Write, sync::LazyLock};

use regex::Regex;

use super::{
    data::{Attribution, Catalog},
    parsers::bundle::AUTHOR_MARKER,
    policy::Policy,
};

pub const LINE_END: &str = "\r\n";

/// Documentation pseudo-language, always emitted first.
pub const DOC_LANGUAGE: &str = "qqq";

/// Source language, emitted right after the documentation.
pub const SOURCE_LANGUAGE: &str = "en";

const PREAMBLE: &[&str] = &[
    "# -*- coding: utf-8 -*-",
    "\"\"\"i18n message bundle.\"\"\"",
    "msg = {",
];

const CLOSING: &str = "};";

static NAMED_PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%\([^)]*?\)s").unwrap());

/// Languages with at least one message: `qqq`, then `en`, then the rest sorted.
pub fn language_order(catalog: &Catalog) -> Vec<&str> {
    let mut languages = catalog.languages();
    let mut order = Vec::with_capacity(languages.len());

    for first in [DOC_LANGUAGE, SOURCE_LANGUAGE] {
        if languages.remove(first) {
            order.push(first);
        }
    }
    order.extend(languages);
    order
}

/// Escape a value so it stays a single-quoted literal on one line.
pub fn escape(text: &str) -> String {
    text.replace('\n', "\\n").replace('\'', "\\'")
}

/// Rewrite `%(name)s` placeholders to `%s`.
pub fn plain_format(text: &str) -> Cow<'_, str> {
    NAMED_PLACEHOLDER_REGEX.replace_all(text, "%s")
}

/// Render the full bundle text.
///
/// `authors` is keyed by translation-set code; the block header uses the
/// site code from the policy's code map.
pub fn render(catalog: &Catalog, authors: &Attribution, policy: &Policy) -> String {
    let mut out = String::new();

    for line in PREAMBLE {
        push_line(&mut out, 0, line);
    }

    for language in language_order(catalog) {
        for author in authors.get(language).into_iter().flatten() {
            push_line(&mut out, 4, &format!("{}{}", AUTHOR_MARKER, author));
        }

        push_line(
            &mut out,
            4,
            &format!("'{}': {{", policy.code_map.site_code(language)),
        );

        for (key, translations) in &catalog.messages {
            let Some(text) = translations.get(language) else {
                continue;
            };
            let text = if policy.is_plain_format(key) {
                plain_format(text)
            } else {
                Cow::Borrowed(text.as_str())
            };
            push_line(&mut out, 8, &format!("'{}': u'{}',", key, escape(&text)));
        }

        push_line(&mut out, 4, "},");
    }

    push_line(&mut out, 0, CLOSING);
    out
}

fn push_line(out: &mut String, indent: usize, line: &str) {
    let _ = write!(out, "{:indent$}{}{}", "", line, LINE_END, indent = indent);
}
