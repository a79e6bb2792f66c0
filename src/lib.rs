//! SCSS namespace completion server.
//!
//! Offers the namespaces a stylesheet can reference (`@use` aliases,
//! default namespaces derived from import paths, and the Sass built-in
//! modules) as completion candidates.
//!
//! The pure pipeline lives in [`parser`], [`resolution`], [`builtins`] and
//! [`completion`]; [`Backend`] and the `LanguageServer` impl in `server`
//! wire it to LSP.
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use parking_lot::{Mutex, RwLock};
use tower_lsp::Client;
use tower_lsp::lsp_types::Url;

pub mod builtins;
pub mod completion;
pub mod config;
pub mod logging;
pub mod parser;
pub mod resolution;
mod server;
pub mod types;
pub mod util;

pub use completion::namespaces::{aggregate, get_completions};
pub use completion::trigger::should_trigger;
pub use config::{CompletionConfig, Config, ConfigError};
pub use parser::extract_imports;
pub use resolution::{DiskProbe, FileProbe, NamespaceResolver};
pub use types::{BuiltinModule, NamespaceInfo, RawImport};

use crate::builtins::BUILTIN_MODULES;

pub struct Backend {
    name: String,
    version: String,
    /// Current text of every open document, keyed by URI.
    open_files: Arc<Mutex<HashMap<Url, String>>>,
    completion_config: Arc<RwLock<CompletionConfig>>,
    builtins: &'static [BuiltinModule],
    /// Set by `shutdown`; completion requests arriving afterwards are dropped.
    shutting_down: Arc<AtomicBool>,
    client: Option<Client>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self::with_config(Some(client), CompletionConfig::default())
    }

    pub fn new_with_config(client: Client, completion_config: CompletionConfig) -> Self {
        Self::with_config(Some(client), completion_config)
    }

    /// A backend with no client attached, for tests.
    pub fn new_test() -> Self {
        Self::with_config(None, CompletionConfig::default())
    }

    pub fn new_test_with_config(completion_config: CompletionConfig) -> Self {
        Self::with_config(None, completion_config)
    }

    fn with_config(client: Option<Client>, completion_config: CompletionConfig) -> Self {
        Self {
            name: "SCSS Namespace LSP".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            open_files: Arc::new(Mutex::new(HashMap::new())),
            completion_config: Arc::new(RwLock::new(completion_config)),
            builtins: BUILTIN_MODULES,
            shutting_down: Arc::new(AtomicBool::new(false)),
            client,
        }
    }

    /// Public helper for tests: the stored text of an open document.
    pub fn get_open_file(&self, uri: &Url) -> Option<String> {
        self.open_files.lock().get(uri).cloned()
    }

    /// The completion settings currently in effect.
    pub fn completion_config(&self) -> CompletionConfig {
        self.completion_config.read().clone()
    }
}
