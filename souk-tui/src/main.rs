mod app;
mod catalog;
mod config;
mod paths;
mod store;

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use log::{debug, info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};
use souk::locale::{BuiltinTranslations, JsonDirTranslations, TranslationSource};
use souk::{LocaleContext, Runtime, RuntimeError};
use thiserror::Error;

use app::MarketApp;
use catalog::CatalogError;
use config::{ConfigError, Settings};
use store::AssetStore;

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to initialize logger: {0}")]
    Logger(String),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), RunError> {
    let settings_path = paths::settings_file();
    let loaded = match &settings_path {
        Some(path) => Settings::load(path).await?,
        None => None,
    };
    let from_file = loaded.is_some();
    let mut settings = loaded.unwrap_or_default();
    let rejected_lang = settings.apply_env();

    init_logging(settings.level_filter())?;
    match (&settings_path, from_file) {
        (Some(path), true) => info!("Settings loaded from {}", path.display()),
        (Some(path), false) => debug!("No settings at {}, using defaults", path.display()),
        (None, _) => debug!("No config directory, using default settings"),
    }
    if let Some(tag) = rejected_lang {
        warn!("Ignoring {}={tag}: no such language", config::LANG_ENV);
    }
    info!("Starting with settings {settings:?}");

    let source: Arc<dyn TranslationSource> =
        match settings.translations_dir.clone().or_else(paths::translations_dir) {
            Some(dir) => Arc::new(JsonDirTranslations::new(dir)),
            None => Arc::new(BuiltinTranslations),
        };
    let locale = LocaleContext::with_source(source);
    if !locale.change_language(&settings.language).await {
        warn!(
            "Configured language '{}' is not available, staying in '{}'",
            settings.language,
            locale.code()
        );
    }

    let assets = match &settings.assets_file {
        Some(path) => catalog::load_assets(path).await?,
        None => catalog::sample_assets(),
    };
    info!("Loaded {} assets", assets.len());

    let app = MarketApp::new(
        locale.clone(),
        AssetStore::new(assets),
        settings,
        settings_path,
    );
    Runtime::new(locale).run(app).await?;
    Ok(())
}

/// Rotate old logs and send `log` output to `latest.log` in the cache dir.
fn init_logging(level: LevelFilter) -> Result<(), RunError> {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    let open_err = |source| RunError::LogFile {
        path: path.clone(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(open_err)?;
    }
    let file = File::create(&path).map_err(open_err)?;
    WriteLogger::init(level, Config::default(), file).map_err(|e| RunError::Logger(e.to_string()))
}
