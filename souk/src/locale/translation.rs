//! Translation catalogs and the sources they are loaded from.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;

use super::LocaleError;

/// Translated strings for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    code: String,
    strings: HashMap<String, String>,
}

impl Catalog {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            strings: HashMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.insert(key.into(), value.into());
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Translate `key`, falling back to the key itself.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Overlay `other` on top of this catalog.
    pub fn merge(&mut self, other: HashMap<String, String>) {
        self.strings.extend(other);
    }
}

/// Where translation catalogs come from.
#[async_trait]
pub trait TranslationSource: Send + Sync {
    async fn load(&self, code: &str) -> Result<Catalog, LocaleError>;
}

/// Strings compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTranslations;

impl BuiltinTranslations {
    /// The built-in catalog for `code`; unknown codes get an empty catalog.
    pub fn catalog(code: &str) -> Catalog {
        let mut catalog = Catalog::new(code);
        if let Some(table) = builtin_table(code) {
            catalog.merge(
                table
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                    .collect(),
            );
        }
        catalog
    }
}

#[async_trait]
impl TranslationSource for BuiltinTranslations {
    async fn load(&self, code: &str) -> Result<Catalog, LocaleError> {
        if builtin_table(code).is_none() {
            return Err(LocaleError::Unsupported(code.to_string()));
        }
        Ok(Self::catalog(code))
    }
}

/// Reads `<dir>/<code>.json`, a flat object of key to string, merged over
/// the built-in catalog. A missing file means the built-ins are used as is.
#[derive(Debug, Clone)]
pub struct JsonDirTranslations {
    dir: PathBuf,
}

impl JsonDirTranslations {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, code: &str) -> PathBuf {
        self.dir.join(format!("{code}.json"))
    }
}

#[async_trait]
impl TranslationSource for JsonDirTranslations {
    async fn load(&self, code: &str) -> Result<Catalog, LocaleError> {
        let path = self.path_for(code);
        let mut catalog = BuiltinTranslations::catalog(code);

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No translation file at {}, using built-ins", path.display());
                return Ok(catalog);
            }
            Err(source) => return Err(LocaleError::Io { path, source }),
        };

        let strings: HashMap<String, String> = serde_json::from_str(&contents)
            .map_err(|source| LocaleError::Parse {
                path: path.clone(),
                source,
            })?;
        debug!("Loaded {} strings from {}", strings.len(), path.display());
        catalog.merge(strings);
        Ok(catalog)
    }
}

type Table = &'static [(&'static str, &'static str)];

fn builtin_table(code: &str) -> Option<Table> {
    match code {
        "en" => Some(EN),
        "es" => Some(ES),
        "fr" => Some(FR),
        "ar" => Some(AR),
        "he" => Some(HE),
        "fa" => Some(FA),
        _ => None,
    }
}

const EN: Table = &[
    ("app.title", "Asset Marketplace"),
    ("app.hint", "Tab: move  Enter: sort  F2: language  Ctrl+Q: quit"),
    ("app.showing", "Showing"),
    ("column.id", "ID"),
    ("column.title", "Title"),
    ("column.type", "Type"),
    ("column.price", "Price"),
    ("column.status", "Status"),
    ("column.location", "Location"),
    ("column.risk", "Risk"),
    ("filter.placeholder", "Filter…"),
    ("selector.title", "Language"),
    ("table.empty", "No assets match"),
    ("risk.low", "Low"),
    ("risk.medium", "Medium"),
    ("risk.high", "High"),
];

const ES: Table = &[
    ("app.title", "Mercado de activos"),
    ("app.hint", "Tab: mover  Enter: ordenar  F2: idioma  Ctrl+Q: salir"),
    ("app.showing", "Mostrando"),
    ("column.id", "ID"),
    ("column.title", "Título"),
    ("column.type", "Tipo"),
    ("column.price", "Precio"),
    ("column.status", "Estado"),
    ("column.location", "Ubicación"),
    ("column.risk", "Riesgo"),
    ("filter.placeholder", "Filtrar…"),
    ("selector.title", "Idioma"),
    ("table.empty", "Ningún activo coincide"),
    ("risk.low", "Bajo"),
    ("risk.medium", "Medio"),
    ("risk.high", "Alto"),
];

const FR: Table = &[
    ("app.title", "Place de marché d'actifs"),
    ("app.hint", "Tab : déplacer  Entrée : trier  F2 : langue  Ctrl+Q : quitter"),
    ("app.showing", "Affichés"),
    ("column.id", "ID"),
    ("column.title", "Titre"),
    ("column.type", "Type"),
    ("column.price", "Prix"),
    ("column.status", "Statut"),
    ("column.location", "Emplacement"),
    ("column.risk", "Risque"),
    ("filter.placeholder", "Filtrer…"),
    ("selector.title", "Langue"),
    ("table.empty", "Aucun actif ne correspond"),
    ("risk.low", "Faible"),
    ("risk.medium", "Moyen"),
    ("risk.high", "Élevé"),
];

const AR: Table = &[
    ("app.title", "سوق الأصول"),
    ("app.hint", "Tab: تنقل  Enter: فرز  F2: اللغة  Ctrl+Q: خروج"),
    ("app.showing", "المعروض"),
    ("column.id", "المعرف"),
    ("column.title", "العنوان"),
    ("column.type", "النوع"),
    ("column.price", "السعر"),
    ("column.status", "الحالة"),
    ("column.location", "الموقع"),
    ("column.risk", "المخاطر"),
    ("filter.placeholder", "تصفية…"),
    ("selector.title", "اللغة"),
    ("table.empty", "لا توجد أصول مطابقة"),
    ("risk.low", "منخفض"),
    ("risk.medium", "متوسط"),
    ("risk.high", "مرتفع"),
];

const HE: Table = &[
    ("app.title", "שוק נכסים"),
    ("app.hint", "Tab: מעבר  Enter: מיון  F2: שפה  Ctrl+Q: יציאה"),
    ("app.showing", "מוצגים"),
    ("column.id", "מזהה"),
    ("column.title", "כותרת"),
    ("column.type", "סוג"),
    ("column.price", "מחיר"),
    ("column.status", "סטטוס"),
    ("column.location", "מיקום"),
    ("column.risk", "סיכון"),
    ("filter.placeholder", "סינון…"),
    ("selector.title", "שפה"),
    ("table.empty", "אין נכסים תואמים"),
    ("risk.low", "נמוך"),
    ("risk.medium", "בינוני"),
    ("risk.high", "גבוה"),
];

const FA: Table = &[
    ("app.title", "بازار دارایی"),
    ("app.hint", "Tab: جابجایی  Enter: مرتب‌سازی  F2: زبان  Ctrl+Q: خروج"),
    ("app.showing", "نمایش"),
    ("column.id", "شناسه"),
    ("column.title", "عنوان"),
    ("column.type", "نوع"),
    ("column.price", "قیمت"),
    ("column.status", "وضعیت"),
    ("column.location", "مکان"),
    ("column.risk", "ریسک"),
    ("filter.placeholder", "فیلتر…"),
    ("selector.title", "زبان"),
    ("table.empty", "هیچ دارایی مطابق نیست"),
    ("risk.low", "کم"),
    ("risk.medium", "متوسط"),
    ("risk.high", "زیاد"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_locale_has_the_same_keys() {
        let keys = |table: Table| {
            let mut keys: Vec<_> = table.iter().map(|(k, _)| *k).collect();
            keys.sort_unstable();
            keys
        };
        let english = keys(EN);
        for table in [ES, FR, AR, HE, FA] {
            assert_eq!(keys(table), english);
        }
    }

    #[test]
    fn t_falls_back_to_key() {
        let catalog = BuiltinTranslations::catalog("fr");
        assert_eq!(catalog.t("column.price"), "Prix");
        assert_eq!(catalog.t("no.such.key"), "no.such.key");
    }

    #[tokio::test]
    async fn builtin_source_rejects_unknown_code() {
        let result = BuiltinTranslations.load("xx").await;
        assert!(matches!(result, Err(LocaleError::Unsupported(code)) if code == "xx"));
    }

    #[tokio::test]
    async fn json_dir_missing_file_uses_builtins() {
        let dir = std::env::temp_dir().join("souk-missing-translations");
        let catalog = JsonDirTranslations::new(dir).load("he").await.unwrap();
        assert_eq!(catalog.t("column.price"), "מחיר");
    }

    #[tokio::test]
    async fn json_dir_overlays_file_on_builtins() {
        let dir = std::env::temp_dir().join(format!("souk-translations-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(dir.join("es.json"), r#"{"column.price": "Importe"}"#)
            .await
            .unwrap();

        let catalog = JsonDirTranslations::new(&dir).load("es").await.unwrap();
        assert_eq!(catalog.t("column.price"), "Importe");
        assert_eq!(catalog.t("column.title"), "Título");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn json_dir_reports_malformed_file() {
        let dir = std::env::temp_dir().join(format!("souk-bad-translations-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(dir.join("fr.json"), "not json").await.unwrap();

        let result = JsonDirTranslations::new(&dir).load("fr").await;
        assert!(matches!(result, Err(LocaleError::Parse { .. })));

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
