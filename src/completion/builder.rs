/// Completion item building.
///
/// This module turns the aggregated [`NamespaceInfo`] list into LSP
/// `CompletionItem`s: label, kind, detail line, markdown documentation,
/// and a sort key that keeps the user-then-builtin order on the client.
use tower_lsp::lsp_types::*;

use crate::Backend;
use crate::builtins::find_builtin;
use crate::types::{BuiltinModule, NamespaceInfo};

/// Client command that re-opens the suggestion widget after insertion,
/// so member completion can follow the namespace straight away.
pub const TRIGGER_SUGGEST_COMMAND: &str = "editor.action.triggerSuggest";

impl Backend {
    /// Build one completion item per namespace, preserving order.
    ///
    /// `builtins` supplies the descriptions for built-in entries.
    /// When `retrigger_suggest` is set every item carries
    /// [`TRIGGER_SUGGEST_COMMAND`].
    pub fn build_namespace_items(
        namespaces: &[NamespaceInfo],
        builtins: &[BuiltinModule],
        retrigger_suggest: bool,
    ) -> Vec<CompletionItem> {
        let width = namespaces.len().to_string().len();

        namespaces
            .iter()
            .enumerate()
            .map(|(idx, ns)| {
                let (detail, documentation) = if ns.is_builtin {
                    Self::builtin_docs(ns, builtins)
                } else {
                    Self::user_docs(ns)
                };

                CompletionItem {
                    label: ns.namespace.clone(),
                    kind: Some(CompletionItemKind::MODULE),
                    detail: Some(detail),
                    documentation: Some(Documentation::MarkupContent(MarkupContent {
                        kind: MarkupKind::Markdown,
                        value: documentation,
                    })),
                    sort_text: Some(format!("{:0width$}", idx, width = width)),
                    command: retrigger_suggest.then(|| Command {
                        title: "Trigger suggestions".to_string(),
                        command: TRIGGER_SUGGEST_COMMAND.to_string(),
                        arguments: None,
                    }),
                    ..CompletionItem::default()
                }
            })
            .collect()
    }

    fn builtin_docs(ns: &NamespaceInfo, builtins: &[BuiltinModule]) -> (String, String) {
        let description = find_builtin(builtins, &ns.namespace)
            .map(|m| m.description)
            .unwrap_or_default();

        let mut doc = format!("Import with: `@use '{}'`", ns.original_path);
        if !description.is_empty() {
            doc.push_str("\n\n");
            doc.push_str(description);
        }
        ("Sass Built-in Module".to_string(), doc)
    }

    fn user_docs(ns: &NamespaceInfo) -> (String, String) {
        let detail = if ns.alias.is_some() {
            "SCSS Namespace (alias)"
        } else {
            "SCSS Namespace"
        };

        let mut doc = format!("Original import: `@use '{}'`", ns.original_path);
        if let Some(ref alias) = ns.alias {
            doc.push_str(&format!("\n\nAliased as: `{}`", alias));
        }
        if ns.is_resolved() {
            doc.push_str(&format!("\n\nResolved to: `{}`", ns.full_path));
        }
        (detail.to_string(), doc)
    }
}
