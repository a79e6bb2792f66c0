/// Namespace and import-path resolution.
///
/// Turns a [`RawImport`] into a [`NamespaceInfo`]:
///
///   1. **Built-in skip** — `sass:<known>` imports produce nothing; the
///      built-in table already covers them.
///   2. **Path resolution** — relative paths are joined onto the document
///      directory and probed on disk:
///      - `<path>.scss`
///      - `<path>/_index.scss`
///   3. **Default namespace** — basename of the import path, extension
///      removed, `sass:` prefix removed.  An explicit alias wins.
///
/// Every probe goes through [`FileProbe`] so tests can run against a fake
/// file system.
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::builtins::{self, BUILTIN_MODULES, SASS_PREFIX};
use crate::types::{BuiltinModule, NamespaceInfo, RawImport};

/// The only stylesheet extension probed for file imports.
pub const SCSS_EXTENSION: &str = ".scss";

/// The index file probed when an import names a directory.
pub const INDEX_FILE: &str = "_index.scss";

/// Synchronous file-existence predicate.
pub trait FileProbe {
    /// `true` when `path` names an existing regular file.  I/O errors
    /// count as "does not exist".
    fn is_file(&self, path: &Path) -> bool;
}

/// Probes the real file system at request time.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskProbe;

impl FileProbe for DiskProbe {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

impl<F> FileProbe for F
where
    F: Fn(&Path) -> bool,
{
    fn is_file(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Stateless resolver parameterised by the built-in table and a probe.
#[derive(Debug, Clone)]
pub struct NamespaceResolver<'t, P = DiskProbe> {
    builtins: &'t [BuiltinModule],
    probe: P,
}

impl Default for NamespaceResolver<'static, DiskProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl NamespaceResolver<'static, DiskProbe> {
    /// A resolver over [`BUILTIN_MODULES`] that probes the real disk.
    pub fn new() -> Self {
        Self {
            builtins: BUILTIN_MODULES,
            probe: DiskProbe,
        }
    }
}

impl<'t, P: FileProbe> NamespaceResolver<'t, P> {
    pub fn with_probe(builtins: &'t [BuiltinModule], probe: P) -> Self {
        Self { builtins, probe }
    }

    /// The built-in table this resolver filters against.
    pub fn builtins(&self) -> &'t [BuiltinModule] {
        self.builtins
    }

    /// Resolve one import.  Returns `None` for `sass:<known-module>`.
    pub fn resolve(&self, raw: &RawImport, document_dir: &Path) -> Option<NamespaceInfo> {
        if builtins::builtin_for_import(self.builtins, &raw.path).is_some() {
            return None;
        }

        let full_path = self
            .resolve_path(&raw.path, document_dir)
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| raw.path.clone());

        let namespace = match &raw.alias {
            Some(alias) => alias.clone(),
            None => default_namespace(&raw.path),
        };

        Some(NamespaceInfo {
            namespace,
            original_path: raw.path.clone(),
            full_path,
            alias: raw.alias.clone(),
            is_builtin: false,
        })
    }

    /// Resolve a relative import path against `base_dir`.
    ///
    /// Non-relative paths (package names, `sass:` URLs, absolute paths)
    /// are never resolved.
    pub fn resolve_path(&self, import_path: &str, base_dir: &Path) -> Option<PathBuf> {
        if !is_relative_import(import_path) {
            return None;
        }

        let absolute = normalize_path(&base_dir.join(import_path));

        let mut with_ext = OsString::from(absolute.as_os_str());
        with_ext.push(SCSS_EXTENSION);
        let with_ext = PathBuf::from(with_ext);
        if self.probe.is_file(&with_ext) {
            return Some(with_ext);
        }

        let index = absolute.join(INDEX_FILE);
        if self.probe.is_file(&index) {
            return Some(index);
        }

        None
    }
}

/// Whether the path is resolved against the document directory: any
/// path starting with `.` (`./x`, `../x`, `.shared/x`).
pub fn is_relative_import(import_path: &str) -> bool {
    import_path.starts_with('.')
}

/// The namespace Sass derives for an import without an alias.
///
/// `"./src/corners.scss"` → `"corners"`, `"sass:foo"` → `"foo"`.
pub fn default_namespace(import_path: &str) -> String {
    let stem = match Path::new(import_path).file_stem() {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => import_path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(import_path)
            .to_string(),
    };
    match stem.strip_prefix(SASS_PREFIX) {
        Some(rest) => rest.to_string(),
        None => stem,
    }
}

/// Lexically collapse `.` and `..` components without touching the disk.
fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_current_dir() {
        assert_eq!(
            normalize_path(Path::new("/proj/styles/./tools")),
            PathBuf::from("/proj/styles/tools")
        );
    }

    #[test]
    fn test_normalize_collapses_parent_dir() {
        assert_eq!(
            normalize_path(Path::new("/proj/styles/../shared/./mixins")),
            PathBuf::from("/proj/shared/mixins")
        );
    }

    #[test]
    fn test_normalize_stops_at_root() {
        assert_eq!(
            normalize_path(Path::new("/proj/../../x")),
            PathBuf::from("/x")
        );
    }

    #[test]
    fn test_normalize_keeps_leading_parent_on_relative_base() {
        assert_eq!(
            normalize_path(Path::new("../a/./b")),
            PathBuf::from("../a/b")
        );
    }
}
