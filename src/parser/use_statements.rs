/// `@use` statement extraction.
///
/// Scans raw SCSS text for `@use 'path'` and `@use 'path' as alias`
/// declarations.  The scan is purely textual: it does not know about
/// comments or nested strings, so an `@use` inside a comment is picked up
/// like any other.
use std::sync::LazyLock;

use memchr::memmem;
use regex::Regex;

use crate::types::RawImport;

/// `@use`, whitespace, a single- or double-quoted path, then an optional
/// `as <alias>` running up to the next `;`.
static USE_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@use\s+['"]([^'"]+)['"]\s*(?:as\s+([^;]+))?"#)
        .expect("the @use pattern is a valid regex")
});

/// A `with (...)` module configuration trailing the alias.
static WITH_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+with\s*\(").expect("the with-clause pattern is a valid regex")
});

/// Extract every `@use` declaration from `text`, in document order.
///
/// Malformed declarations (unterminated quotes, missing path) simply do
/// not match and are skipped.
pub fn extract_imports(text: &str) -> Vec<RawImport> {
    if memmem::find(text.as_bytes(), b"@use").is_none() {
        return Vec::new();
    }

    USE_RULE
        .captures_iter(text)
        .filter_map(|caps| {
            let path = caps.get(1)?.as_str().to_string();
            let alias = caps.get(2).and_then(|m| clean_alias(m.as_str()));
            Some(RawImport { path, alias })
        })
        .collect()
}

/// Trim the captured alias and drop any trailing `with (...)` clause.
///
/// An alias that is empty after trimming counts as absent.
fn clean_alias(raw: &str) -> Option<String> {
    let alias = match WITH_CLAUSE.find(raw) {
        Some(m) => &raw[..m.start()],
        None => raw,
    };
    let alias = alias.trim();
    if alias.is_empty() {
        None
    } else {
        Some(alias.to_string())
    }
}
