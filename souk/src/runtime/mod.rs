//! Runtime: owns the terminal and drives an [`App`](crate::App).

mod event_loop;

use std::io;

use thiserror::Error;

use crate::app::App;
use crate::context::AppContext;
use crate::locale::LocaleContext;

/// Runtime error
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Entry point for running an app in the terminal.
pub struct Runtime {
    locale: LocaleContext,
}

impl Runtime {
    pub fn new(locale: LocaleContext) -> Self {
        Self { locale }
    }

    /// Run `app` until it calls [`AppContext::exit`] or input ends.
    pub async fn run<A: App>(self, app: A) -> Result<(), RuntimeError> {
        let cx = AppContext::new(self.locale);
        log::info!("Starting {}", app.name());
        let result = event_loop::run(&app, &cx).await;
        app.on_stop(&cx).await;
        log::info!("Stopped {}", app.name());
        result
    }
}
