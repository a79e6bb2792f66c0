/// Server configuration.
///
/// Settings are layered, lowest precedence first:
///   1. Built-in defaults
///   2. `config.toml` in the platform config directory
///      (`~/.config/scss-namespace-lsp/config.toml` on Linux), or the file
///      passed with `--config`
///   3. Command-line flags (applied by `main`)
///   4. The client's `initializationOptions` (completion options only)
///
/// ```toml
/// [log]
/// level = "scss_namespace_lsp=debug"
///
/// [completion]
/// retrigger_suggest = false
/// ```
use std::path::{Path, PathBuf};

use etcetera::BaseStrategy;
use serde::Deserialize;

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "scss-namespace-lsp";

/// File name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub log: LogConfig,
    pub completion: CompletionConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// An `EnvFilter` directive such as `"info"` or `"scss_namespace_lsp=debug"`.
    pub level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompletionConfig {
    /// Attach `editor.action.triggerSuggest` to every item.
    pub retrigger_suggest: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            retrigger_suggest: true,
        }
    }
}

/// Completion options a client may send in `initializationOptions`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct InitializationOptions {
    retrigger_suggest: Option<bool>,
}

impl CompletionConfig {
    /// Overlay the client's `initializationOptions` onto this config.
    ///
    /// Unknown keys are ignored.  A payload that is not an object of the
    /// expected shape leaves the config untouched and returns `false`.
    pub fn apply_initialization_options(&mut self, options: &serde_json::Value) -> bool {
        match InitializationOptions::deserialize(options) {
            Ok(opts) => {
                if let Some(retrigger) = opts.retrigger_suggest {
                    self.retrigger_suggest = retrigger;
                }
                true
            }
            Err(err) => {
                tracing::warn!(%err, "ignoring malformed initializationOptions");
                false
            }
        }
    }
}

impl Config {
    /// `<config dir>/scss-namespace-lsp/config.toml`, if a home directory
    /// can be determined.
    pub fn default_path() -> Option<PathBuf> {
        let strategy = etcetera::choose_base_strategy().ok()?;
        Some(
            strategy
                .config_dir()
                .join(CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME),
        )
    }

    /// Load the configuration.
    ///
    /// With `explicit` set the file must exist.  Without it the default
    /// location is tried and a missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse TOML `content`; `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
