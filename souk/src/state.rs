use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

use crate::wakeup::{WakeupHandle, WakeupSender};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Listeners<T> {
    next_id: AtomicU64,
    entries: RwLock<Vec<(u64, Listener<T>)>>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            next_id: AtomicU64::new(0),
            entries: RwLock::new(Vec::new()),
        }
    }
}

/// Reactive state wrapper with interior mutability.
///
/// `State<T>` is cheap to clone; clones share the value, the dirty flag,
/// the subscriber list and the wakeup handle. Every write marks the state
/// dirty, notifies subscribers with the new value and wakes the event loop.
///
/// Subscribers run while a read guard is held on the value, so a subscriber
/// must never write back to the state it observes.
///
/// ```ignore
/// let count = State::new(0);
/// let _sub = count.subscribe(|v| log::debug!("count is now {v}"));
/// count.update(|v| *v += 1);
/// ```
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
    listeners: Arc<Listeners<T>>,
    wakeup: WakeupHandle,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
            listeners: Arc::new(Listeners::default()),
            wakeup: WakeupHandle::new(),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Read the value in place without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = value;
        } else {
            return;
        }
        self.changed();
    }

    /// Update the value using a closure
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut guard);
        } else {
            return;
        }
        self.changed();
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// Clear the dirty flag, returning whether it was set.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }

    /// Wake the given event loop whenever this state changes.
    pub fn install_wakeup(&self, sender: WakeupSender) {
        self.wakeup.install(sender);
    }

    /// Register a callback invoked with the new value after every write.
    ///
    /// The callback stays registered until the returned [`Subscription`]
    /// is dropped.
    pub fn subscribe<F>(&self, f: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
        T: 'static,
    {
        let id = self.listeners.next_id.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut entries) = self.listeners.entries.write() {
            entries.push((id, Arc::new(f)));
        }

        let weak: Weak<Listeners<T>> = Arc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = weak.upgrade() {
                if let Ok(mut entries) = listeners.entries.write() {
                    entries.retain(|(entry_id, _)| *entry_id != id);
                }
            }
        })
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.listeners
            .entries
            .read()
            .map(|entries| entries.len())
            .unwrap_or(0)
    }

    fn changed(&self) {
        self.dirty.store(true, Ordering::SeqCst);

        // Snapshot so callbacks may subscribe or unsubscribe freely.
        let listeners: Vec<Listener<T>> = self
            .listeners
            .entries
            .read()
            .map(|entries| entries.iter().map(|(_, l)| Arc::clone(l)).collect())
            .unwrap_or_default();

        if !listeners.is_empty() {
            if let Ok(guard) = self.inner.read() {
                for listener in &listeners {
                    listener(&*guard);
                }
            }
        }

        self.wakeup.send();
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            listeners: Arc::clone(&self.listeners),
            wakeup: self.wakeup.clone(),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for State<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.with(|value| {
            f.debug_struct("State")
                .field("value", value)
                .field("dirty", &self.is_dirty())
                .finish()
        })
    }
}

/// Guard for a [`State::subscribe`] registration. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Mutex::new(Some(Box::new(cancel))),
        }
    }

    /// Unsubscribe now instead of on drop.
    pub fn cancel(&self) {
        let cancel = self.cancel.lock().ok().and_then(|mut slot| slot.take());
        if let Some(cancel) = cancel {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_marks_dirty_and_notifies() {
        let state = State::new(1);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = state.subscribe(move |v| sink.lock().unwrap().push(*v));

        state.set(2);
        state.update(|v| *v += 3);

        assert!(state.take_dirty());
        assert!(!state.is_dirty());
        assert_eq!(*seen.lock().unwrap(), vec![2, 5]);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let state = State::new(String::new());
        let hits = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&hits);
        let sub = state.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(state.subscriber_count(), 1);

        state.set("a".into());
        drop(sub);
        state.set("b".into());

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(state.subscriber_count(), 0);
    }

    #[test]
    fn clones_share_value_and_listeners() {
        let state = State::new(0u8);
        let other = state.clone();
        let hits = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&hits);
        let _sub = state.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        other.set(9);

        assert_eq!(state.get(), 9);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn subscription_outliving_state_is_harmless() {
        let state = State::new(0);
        let sub = state.subscribe(|_| {});
        drop(state);
        sub.cancel();
    }

    #[tokio::test]
    async fn writes_wake_the_event_loop() {
        let (tx, bell) = crate::wakeup::channel();
        let state = State::new(0);
        state.install_wakeup(tx);

        state.set(1);

        bell.wait().await;
        assert!(state.is_dirty());
    }
}
