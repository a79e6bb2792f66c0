/// Completion-related modules.
///
/// This sub-module groups all completion logic:
/// - **trigger**: Deciding from the text before the cursor whether to offer completion
/// - **namespaces**: Collecting and merging user and built-in namespace candidates
/// - **builder**: Building LSP `CompletionItem`s from namespace candidates
/// - **handler**: The `textDocument/completion` request entry point
pub mod builder;
pub mod handler;
pub mod namespaces;
pub mod trigger;
