//! User settings stored as `settings.json` in the config directory.

use std::io;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use souk::LocaleRegistry;
use thiserror::Error;

/// Environment variable that overrides the saved language.
pub const LANG_ENV: &str = "SOUK_LANG";

/// Settings error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Locale code to start in.
    pub language: String,
    /// JSON file with asset listings; the built-in sample is used if unset.
    pub assets_file: Option<PathBuf>,
    /// Directory of `<code>.json` translation overrides.
    pub translations_dir: Option<PathBuf>,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: souk::locale::DEFAULT_LOCALE.to_string(),
            assets_file: None,
            translations_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path`. `None` when there is no such file.
    pub async fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Write settings to `path`, creating parent directories.
    pub async fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
        }
        tokio::fs::write(path, json).await.map_err(write_err)
    }

    /// Apply a language override such as `ar` or `he_IL.UTF-8`. Tags that
    /// match no registered locale are ignored.
    pub fn override_language(&mut self, tag: &str) -> bool {
        match LocaleRegistry::get().negotiate(tag) {
            Some(config) => {
                self.language = config.code.to_string();
                true
            }
            None => false,
        }
    }

    /// Apply overrides from the environment. Returns a `SOUK_LANG` value
    /// that names no known language; settings are left as they were.
    pub fn apply_env(&mut self) -> Option<String> {
        std::env::var(LANG_ENV)
            .ok()
            .filter(|tag| !self.override_language(tag))
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
