#![allow(dead_code)]

use scss_namespace_lsp::Backend;
use std::fs;
use std::path::{Path, PathBuf};
use tower_lsp::LanguageServer;
use tower_lsp::lsp_types::*;

pub fn create_test_backend() -> Backend {
    Backend::new_test()
}

/// Helper: a temporary directory tree of stylesheet files.
pub struct TestWorkspace {
    dir: tempfile::TempDir,
}

impl TestWorkspace {
    pub fn new(files: &[(&str, &str)]) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        for (rel_path, content) in files {
            let full = dir.path().join(rel_path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).expect("failed to create dirs");
            }
            fs::write(&full, content).expect("failed to write SCSS file");
        }
        TestWorkspace { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel_path: &str) -> PathBuf {
        self.dir.path().join(rel_path)
    }

    pub fn uri(&self, rel_path: &str) -> Url {
        Url::from_file_path(self.path(rel_path)).expect("temp paths are absolute")
    }
}

pub async fn open_document(backend: &Backend, uri: &Url, text: &str) {
    backend
        .did_open(DidOpenTextDocumentParams {
            text_document: TextDocumentItem {
                uri: uri.clone(),
                language_id: "scss".to_string(),
                version: 1,
                text: text.to_string(),
            },
        })
        .await;
}

/// Request completion at `(line, character)` and unwrap the item array.
pub async fn complete_at(
    backend: &Backend,
    uri: &Url,
    line: u32,
    character: u32,
) -> Option<Vec<CompletionItem>> {
    let params = CompletionParams {
        text_document_position: TextDocumentPositionParams {
            text_document: TextDocumentIdentifier { uri: uri.clone() },
            position: Position { line, character },
        },
        work_done_progress_params: WorkDoneProgressParams::default(),
        partial_result_params: PartialResultParams::default(),
        context: None,
    };

    match backend.completion(params).await.unwrap() {
        Some(CompletionResponse::Array(items)) => Some(items),
        Some(CompletionResponse::List(list)) => Some(list.items),
        None => None,
    }
}

pub fn labels(items: &[CompletionItem]) -> Vec<&str> {
    items.iter().map(|i| i.label.as_str()).collect()
}

pub fn doc_text(item: &CompletionItem) -> &str {
    match item.documentation.as_ref() {
        Some(Documentation::MarkupContent(m)) => &m.value,
        Some(Documentation::String(s)) => s,
        None => "",
    }
}
