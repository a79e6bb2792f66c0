//! Data types used throughout the SCSS namespace server.
//!
//! This module contains the "model" structs that flow between the
//! extractor, the resolver and the completion builder.  None of them
//! outlive a single completion request.

/// A Sass built-in module (e.g. `sass:math`) offered as a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinModule {
    /// The module name without the `sass:` prefix (e.g. "math").
    pub name: &'static str,
    /// One-line description shown in the completion documentation.
    pub description: &'static str,
}

/// A `@use` declaration as it appears in the document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImport {
    /// The quoted import path, without the quotes (e.g. "./utils", "sass:math").
    pub path: String,
    /// The explicit `as` alias, trimmed, if one was written.
    pub alias: Option<String>,
}

/// A namespace that can be offered as a completion candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceInfo {
    /// The identifier to insert (alias, derived default, or built-in name).
    pub namespace: String,
    /// The literal import path.  For built-ins this is `sass:<name>`.
    pub original_path: String,
    /// The resolved file on disk, or `original_path` unchanged when the
    /// path could not (or need not) be resolved.
    pub full_path: String,
    /// The explicit alias from the declaration, if any.
    pub alias: Option<String>,
    /// `true` only for entries coming from the built-in module table.
    pub is_builtin: bool,
}

impl NamespaceInfo {
    /// Whether `full_path` points at a file that was found on disk.
    pub fn is_resolved(&self) -> bool {
        !self.is_builtin && self.full_path != self.original_path
    }
}
