//! The application contract driven by the [`Runtime`](crate::Runtime).

use async_trait::async_trait;
use soukdom::{Element, Event};

use crate::context::AppContext;
use crate::widgets::EventResult;

/// A terminal application.
///
/// The runtime rebuilds the element tree after every event or wakeup, so
/// `element` should be a pure function of the app's state.
#[async_trait]
pub trait App: Send + Sync + 'static {
    /// Window title for logs.
    fn name(&self) -> &str {
        "app"
    }

    /// Build the current element tree.
    fn element(&self, cx: &AppContext) -> Element;

    /// Called once before the first render.
    async fn on_start(&self, cx: &AppContext) {
        let _ = cx;
    }

    /// Handle a targeted event. Unhandled events are dropped.
    async fn on_event(&self, event: &Event, cx: &AppContext) -> EventResult;

    /// Called once after the loop exits, before the terminal is restored.
    async fn on_stop(&self, cx: &AppContext) {
        let _ = cx;
    }
}
