//! Re-render signal for the idle event loop.
//!
//! The loop sleeps until input arrives or something it draws changes.
//! [`State`](crate::State) writes and locale switches ring the bell here.
//! Signals coalesce: any number of rings before the loop wakes count once.

use std::sync::{Arc, Mutex, Weak};

use tokio::sync::Notify;

/// Rings the bell. Cheap to clone; a no-op once the [`Bell`] is gone.
#[derive(Clone, Debug)]
pub struct WakeupSender {
    bell: Weak<Notify>,
}

impl WakeupSender {
    pub fn send(&self) {
        if let Some(bell) = self.bell.upgrade() {
            bell.notify_one();
        }
    }
}

/// The event loop's end of the signal.
#[derive(Debug)]
pub struct Bell {
    notify: Arc<Notify>,
}

impl Bell {
    /// Resolves once at least one send happened since the last wait.
    pub async fn wait(&self) {
        self.notify.notified().await;
    }
}

pub fn channel() -> (WakeupSender, Bell) {
    let notify = Arc::new(Notify::new());
    let sender = WakeupSender {
        bell: Arc::downgrade(&notify),
    };
    (sender, Bell { notify })
}

/// Slot for a sender the runtime installs after the owner was built.
#[derive(Debug, Default, Clone)]
pub struct WakeupHandle {
    slot: Arc<Mutex<Option<WakeupSender>>>,
}

impl WakeupHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&self, sender: WakeupSender) {
        if let Ok(mut slot) = self.slot.lock() {
            slot.replace(sender);
        }
    }

    pub fn send(&self) {
        let sender = self.slot.lock().ok().and_then(|slot| slot.clone());
        if let Some(sender) = sender {
            sender.send();
        }
    }
}
