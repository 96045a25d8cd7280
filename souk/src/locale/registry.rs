//! Locale registry: the single source of truth for supported languages.
//!
//! Direction is a property of the registry entry, so a locale's direction is
//! always a pure function of its code.

use std::sync::OnceLock;

use soukdom::TextDirection;

/// Metadata for a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    /// ISO 639-1 code, e.g. `"en"`, `"ar"`.
    pub code: &'static str,
    /// English name.
    pub name: &'static str,
    /// Name in the language itself.
    pub native_name: &'static str,
    pub direction: TextDirection,
    pub flag: &'static str,
}

/// Global locale registry singleton.
#[derive(Debug)]
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

/// Code of the locale a fresh context starts in.
pub const DEFAULT_LOCALE: &str = "en";

impl LocaleRegistry {
    /// Get the global registry, initializing it on first use.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Look up a locale by exact code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All locales, in display order.
    pub fn list(&self) -> &[LocaleConfig] {
        &self.locales
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// The locale every context starts with.
    pub fn default_locale(&self) -> &LocaleConfig {
        self.get_by_code(DEFAULT_LOCALE).unwrap_or(&self.locales[0])
    }

    /// Resolve a loosely formatted tag such as `"ar_SA.UTF-8"` or `"he-IL"`
    /// to a registered code.
    pub fn negotiate(&self, tag: &str) -> Option<&LocaleConfig> {
        let primary = tag
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        self.get_by_code(&primary)
    }

    /// The entry after `code` in display order, wrapping around.
    pub fn next_after(&self, code: &str) -> &LocaleConfig {
        let index = self
            .locales
            .iter()
            .position(|locale| locale.code == code)
            .map_or(0, |i| (i + 1) % self.locales.len());
        &self.locales[index]
    }
}

fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            direction: TextDirection::Ltr,
            flag: "🇺🇸",
        },
        LocaleConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            direction: TextDirection::Ltr,
            flag: "🇪🇸",
        },
        LocaleConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            direction: TextDirection::Ltr,
            flag: "🇫🇷",
        },
        LocaleConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            direction: TextDirection::Rtl,
            flag: "🇸🇦",
        },
        LocaleConfig {
            code: "he",
            name: "Hebrew",
            native_name: "עברית",
            direction: TextDirection::Rtl,
            flag: "🇮🇱",
        },
        LocaleConfig {
            code: "fa",
            name: "Persian",
            native_name: "فارسی",
            direction: TextDirection::Rtl,
            flag: "🇮🇷",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_a_singleton() {
        let a = LocaleRegistry::get();
        let b = LocaleRegistry::get();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn direction_follows_code() {
        let registry = LocaleRegistry::get();
        for code in ["en", "es", "fr"] {
            assert_eq!(registry.get_by_code(code).unwrap().direction, TextDirection::Ltr);
        }
        for code in ["ar", "he", "fa"] {
            assert_eq!(registry.get_by_code(code).unwrap().direction, TextDirection::Rtl);
        }
    }

    #[test]
    fn codes_are_unique() {
        let registry = LocaleRegistry::get();
        let mut codes: Vec<_> = registry.list().iter().map(|l| l.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), registry.list().len());
    }

    #[test]
    fn negotiate_strips_region_and_encoding() {
        let registry = LocaleRegistry::get();
        assert_eq!(registry.negotiate("ar_SA.UTF-8").unwrap().code, "ar");
        assert_eq!(registry.negotiate("HE-il").unwrap().code, "he");
        assert!(registry.negotiate("C").is_none());
        assert!(registry.negotiate("").is_none());
    }

    #[test]
    fn next_after_wraps() {
        let registry = LocaleRegistry::get();
        assert_eq!(registry.next_after("en").code, "es");
        assert_eq!(registry.next_after("fa").code, "en");
        assert_eq!(registry.next_after("xx").code, "en");
    }
}
