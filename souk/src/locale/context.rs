use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use log::{debug, info, warn};

use crate::state::{State, Subscription};
use crate::wakeup::WakeupSender;

use super::document::Document;
use super::registry::LocaleRegistry;
use super::translation::{BuiltinTranslations, Catalog, TranslationSource};
use super::{Locale, TextDirection};

struct Inner {
    locale: State<Locale>,
    catalog: State<Arc<Catalog>>,
    document: Document,
    source: Arc<dyn TranslationSource>,
    /// Bumped by every `change_language` call; only the newest may publish.
    generation: AtomicU64,
    publish: Mutex<()>,
}

/// Process-wide active language and direction.
///
/// Cheap to clone; clones share one locale. The context is the only writer
/// of the locale, the translation catalog and the [`Document`] attributes,
/// and publishes all three together.
#[derive(Clone)]
pub struct LocaleContext {
    inner: Arc<Inner>,
}

impl LocaleContext {
    /// A context in the default locale backed by the built-in strings.
    pub fn new() -> Self {
        Self::with_source(Arc::new(BuiltinTranslations))
    }

    /// A context in the default locale loading catalogs from `source`.
    pub fn with_source(source: Arc<dyn TranslationSource>) -> Self {
        let locale = Locale::default();
        let catalog = BuiltinTranslations::catalog(locale.code());
        let document = Document::new(locale.code(), locale.direction());
        Self {
            inner: Arc::new(Inner {
                locale: State::new(locale),
                catalog: State::new(Arc::new(catalog)),
                document,
                source,
                generation: AtomicU64::new(0),
                publish: Mutex::new(()),
            }),
        }
    }

    pub fn locale(&self) -> Locale {
        self.inner.locale.get()
    }

    pub fn code(&self) -> String {
        self.inner.locale.with(|l| l.code().to_string())
    }

    pub fn direction(&self) -> TextDirection {
        self.inner.locale.with(Locale::direction)
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        self.inner.catalog.get()
    }

    /// Translate `key` in the active catalog, falling back to the key.
    pub fn t(&self, key: &str) -> String {
        self.inner.catalog.with(|c| c.t(key).to_string())
    }

    pub fn document(&self) -> &Document {
        &self.inner.document
    }

    /// Called with the new locale after every switch.
    pub fn subscribe<F>(&self, f: F) -> Subscription
    where
        F: Fn(&Locale) + Send + Sync + 'static,
    {
        self.inner.locale.subscribe(f)
    }

    /// Clear the changed flag, returning whether the locale switched since
    /// the last call.
    pub fn take_dirty(&self) -> bool {
        self.inner.locale.take_dirty()
    }

    pub fn install_wakeup(&self, sender: WakeupSender) {
        self.inner.locale.install_wakeup(sender);
    }

    /// Switch the active language.
    ///
    /// Unknown codes are ignored. For a known code the translation catalog is
    /// loaded first; a failed load falls back to the built-in strings. When
    /// several calls overlap, the last one issued wins and earlier ones are
    /// dropped without publishing. Returns whether this call published.
    pub async fn change_language(&self, code: &str) -> bool {
        let Some(config) = LocaleRegistry::get().get_by_code(code) else {
            warn!("Ignoring unsupported language '{code}'");
            return false;
        };
        let ticket = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("change_language({code}) issued as #{ticket}");

        let catalog = match self.inner.source.load(config.code).await {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Failed to load translations for '{code}', using built-ins: {e}");
                BuiltinTranslations::catalog(config.code)
            }
        };

        let _guard = self
            .inner
            .publish
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if self.inner.generation.load(Ordering::SeqCst) != ticket {
            debug!("change_language({code}) #{ticket} superseded");
            return false;
        }

        let locale = Locale::from_config(config);
        self.inner.catalog.set(Arc::new(catalog));
        self.inner.document.set(locale.code(), locale.direction());
        info!("Language set to {} ({})", locale.code(), locale.direction());
        self.inner.locale.set(locale);
        true
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LocaleContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleContext")
            .field("locale", &self.locale())
            .field("document", &self.inner.document)
            .finish_non_exhaustive()
    }
}
