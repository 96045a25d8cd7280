//! Active language and text direction.
//!
//! [`LocaleContext`] is the single writer of the active [`Locale`]. Everything
//! direction-aware reads it or subscribes to it.

mod context;
mod document;
mod registry;
mod translation;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use context::LocaleContext;
pub use document::{Document, DocumentAttributes};
pub use registry::{LocaleConfig, LocaleRegistry, DEFAULT_LOCALE};
pub use soukdom::TextDirection;
pub use translation::{BuiltinTranslations, Catalog, JsonDirTranslations, TranslationSource};

/// The active language and the direction it is written in.
///
/// Only built from a registry entry, so `direction` can never disagree with
/// `code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    code: String,
    direction: TextDirection,
}

impl Locale {
    pub fn from_config(config: &LocaleConfig) -> Self {
        Self {
            code: config.code.to_string(),
            direction: config.direction,
        }
    }

    /// Build the locale for a registered code.
    pub fn lookup(code: &str) -> Option<Self> {
        LocaleRegistry::get().get_by_code(code).map(Self::from_config)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    pub fn is_rtl(&self) -> bool {
        self.direction.is_rtl()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::from_config(LocaleRegistry::get().default_locale())
    }
}

/// Errors raised while loading translation resources.
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("unsupported locale '{0}'")]
    Unsupported(String),

    #[error("failed to read translations {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid translation file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
