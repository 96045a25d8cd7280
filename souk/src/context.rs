use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::locale::LocaleContext;
use crate::wakeup::{WakeupHandle, WakeupSender};

/// Handle apps use to talk to the runtime.
#[derive(Clone, Debug)]
pub struct AppContext {
    locale: LocaleContext,
    exit_requested: Arc<AtomicBool>,
    focus_request: Arc<Mutex<Option<String>>>,
    wakeup: WakeupHandle,
}

impl AppContext {
    pub fn new(locale: LocaleContext) -> Self {
        Self {
            locale,
            exit_requested: Arc::new(AtomicBool::new(false)),
            focus_request: Arc::new(Mutex::new(None)),
            wakeup: WakeupHandle::new(),
        }
    }

    pub(crate) fn install_wakeup(&self, sender: WakeupSender) {
        self.wakeup.install(sender);
    }

    pub fn locale(&self) -> &LocaleContext {
        &self.locale
    }

    /// Request to exit the app
    pub fn exit(&self) {
        log::debug!("cx.exit() called");
        self.exit_requested.store(true, Ordering::SeqCst);
        self.wakeup.send();
    }

    pub fn is_exit_requested(&self) -> bool {
        self.exit_requested.load(Ordering::SeqCst)
    }

    /// Move focus to the element with `id` on the next render.
    pub fn focus(&self, id: impl Into<String>) {
        if let Ok(mut request) = self.focus_request.lock() {
            *request = Some(id.into());
        }
        self.wakeup.send();
    }

    pub(crate) fn take_focus_request(&self) -> Option<String> {
        self.focus_request.lock().ok().and_then(|mut r| r.take())
    }

    /// Ask for a re-render.
    pub fn request_render(&self) {
        self.wakeup.send();
    }
}
