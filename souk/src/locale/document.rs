use soukdom::{Element, TextDirection};

use crate::state::{State, Subscription};

/// Document-level `lang`/`dir` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentAttributes {
    pub lang: String,
    pub dir: TextDirection,
}

/// Handle to the document-level language and direction.
///
/// Written by [`LocaleContext`](super::LocaleContext) on every language
/// switch and applied to the root element before layout, so any element
/// without its own `dir` inherits the document direction.
#[derive(Debug, Clone)]
pub struct Document {
    attrs: State<DocumentAttributes>,
}

impl Document {
    pub fn new(lang: impl Into<String>, dir: TextDirection) -> Self {
        Self {
            attrs: State::new(DocumentAttributes {
                lang: lang.into(),
                dir,
            }),
        }
    }

    pub fn lang(&self) -> String {
        self.attrs.with(|a| a.lang.clone())
    }

    pub fn dir(&self) -> TextDirection {
        self.attrs.with(|a| a.dir)
    }

    pub fn attributes(&self) -> DocumentAttributes {
        self.attrs.get()
    }

    pub(crate) fn set(&self, lang: &str, dir: TextDirection) {
        self.attrs.set(DocumentAttributes {
            lang: lang.to_string(),
            dir,
        });
    }

    pub fn subscribe<F>(&self, f: F) -> Subscription
    where
        F: Fn(&DocumentAttributes) + Send + Sync + 'static,
    {
        self.attrs.subscribe(f)
    }

    /// Stamp the document attributes onto a root element. Attributes the
    /// root already sets explicitly are kept.
    pub fn apply_to(&self, mut root: Element) -> Element {
        let attrs = self.attributes();
        if root.lang.is_none() {
            root.lang = Some(attrs.lang);
        }
        if root.dir.is_none() {
            root.dir = Some(attrs.dir);
        }
        root
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(super::DEFAULT_LOCALE, TextDirection::Ltr)
    }
}
