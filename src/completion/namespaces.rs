/// Namespace candidate collection.
///
/// Runs the full pipeline for one completion request:
/// trigger check → `@use` extraction → per-import resolution → merge with
/// the built-in table.  Nothing is cached between requests.
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::builtins;
use crate::completion::trigger::should_trigger;
use crate::parser::extract_imports;
use crate::resolution::{FileProbe, NamespaceResolver};
use crate::types::NamespaceInfo;

/// Concatenate user namespaces and built-ins, each side in its own order.
///
/// Duplicate namespace names are kept; clients show later entries after
/// earlier ones.
pub fn aggregate(
    mut user_records: Vec<NamespaceInfo>,
    builtin_records: Vec<NamespaceInfo>,
) -> Vec<NamespaceInfo> {
    user_records.extend(builtin_records);
    user_records
}

impl<'t, P: FileProbe> NamespaceResolver<'t, P> {
    /// One record per non-built-in `@use` in `document_text`, in order.
    pub fn user_namespaces(&self, document_text: &str, document_dir: &Path) -> Vec<NamespaceInfo> {
        extract_imports(document_text)
            .iter()
            .filter_map(|raw| self.resolve(raw, document_dir))
            .collect()
    }

    /// Full candidate list, or `None` when the trigger gate declines.
    pub fn get_completions(
        &self,
        document_text: &str,
        document_dir: &Path,
        text_before_cursor: &str,
    ) -> Option<Vec<NamespaceInfo>> {
        if !should_trigger(text_before_cursor) {
            return None;
        }

        let user = self.user_namespaces(document_text, document_dir);
        let builtin = builtins::builtin_namespaces(self.builtins());
        tracing::debug!(
            user = user.len(),
            builtin = builtin.len(),
            "collected namespace candidates"
        );
        Some(aggregate(user, builtin))
    }

    /// Like [`get_completions`](Self::get_completions), but returns `None`
    /// without doing any work when `cancelled` is already set.
    pub fn get_completions_with_cancel(
        &self,
        document_text: &str,
        document_dir: &Path,
        text_before_cursor: &str,
        cancelled: &AtomicBool,
    ) -> Option<Vec<NamespaceInfo>> {
        if cancelled.load(Ordering::Relaxed) {
            tracing::debug!("completion request cancelled before start");
            return None;
        }
        self.get_completions(document_text, document_dir, text_before_cursor)
    }
}

/// [`NamespaceResolver::get_completions`] over the real file system and
/// the standard built-in table.
pub fn get_completions(
    document_text: &str,
    document_dir: &Path,
    text_before_cursor: &str,
) -> Option<Vec<NamespaceInfo>> {
    NamespaceResolver::new().get_completions(document_text, document_dir, text_before_cursor)
}
