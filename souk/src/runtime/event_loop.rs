//! Main event loop for the runtime.

use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, trace};
use soukdom::{apply_focus, Element, FocusState, Terminal};

use crate::app::App;
use crate::context::AppContext;
use crate::wakeup::channel;

use super::RuntimeError;

pub(super) async fn run<A: App>(app: &A, cx: &AppContext) -> Result<(), RuntimeError> {
    let mut terminal = Terminal::new()?;
    let (wakeup_tx, bell) = channel();
    cx.install_wakeup(wakeup_tx.clone());
    cx.locale().install_wakeup(wakeup_tx);

    let mut events = EventStream::new();
    let mut focus = FocusState::new();

    app.on_start(cx).await;

    loop {
        let root = build(app, cx, &mut focus);
        terminal.render(&root)?;

        if cx.is_exit_requested() {
            debug!("Exit requested");
            break;
        }

        tokio::select! {
            next = events.next() => {
                let raw = match next {
                    Some(Ok(raw)) => raw,
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        debug!("Input stream closed");
                        break;
                    }
                };
                let targeted = focus.process_events(&[raw], &root, terminal.layout());
                for event in &targeted {
                    let result = app.on_event(event, cx).await;
                    trace!("{event:?} -> {result:?}");
                }
            }
            _ = bell.wait() => trace!("Wakeup"),
        }
    }

    Ok(())
}

/// Build the app's tree with document attributes and focus applied.
fn build<A: App>(app: &A, cx: &AppContext, focus: &mut FocusState) -> Element {
    let mut root = cx.locale().document().apply_to(app.element(cx));

    if let Some(id) = cx.take_focus_request() {
        focus.focus(&id);
    }
    focus.retain_in(&root);
    apply_focus(&mut root, focus.focused());
    root
}
