/// Completion request orchestration.
///
/// This module contains the `handle_completion` method called by
/// `LanguageServer::completion`.  It slices the cursor line, locates the
/// document directory, runs the namespace pipeline and converts the
/// result into LSP items.
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;

use crate::Backend;
use crate::resolution::{DiskProbe, NamespaceResolver};
use crate::util::{document_dir, text_before_cursor};

impl Backend {
    /// Main completion handler.
    ///
    /// Returns `Ok(None)` for unknown documents, non-`file:` documents,
    /// cursor positions the trigger gate rejects, and requests arriving
    /// after `shutdown`.  `$/cancelRequest` is handled by tower-lsp, which
    /// drops the request future.
    pub(crate) async fn handle_completion(
        &self,
        params: CompletionParams,
    ) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        let Some(content) = self.get_open_file(&uri) else {
            tracing::debug!(%uri, "completion requested for a document that is not open");
            return Ok(None);
        };

        let Some(dir) = document_dir(&uri) else {
            tracing::debug!(%uri, "completion skipped for non-file document");
            return Ok(None);
        };

        let before = text_before_cursor(&content, position);
        let resolver = NamespaceResolver::with_probe(self.builtins, DiskProbe);

        let Some(namespaces) =
            resolver.get_completions_with_cancel(&content, &dir, before, &self.shutting_down)
        else {
            return Ok(None);
        };

        let retrigger = self.completion_config.read().retrigger_suggest;
        let items = Self::build_namespace_items(&namespaces, self.builtins, retrigger);
        tracing::debug!(%uri, items = items.len(), "namespace completion");

        Ok(Some(CompletionResponse::Array(items)))
    }
}
