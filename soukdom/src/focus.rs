//! Keyboard focus and raw input targeting.

use crossterm::event::{Event as TermEvent, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

use crate::element::{find_element, walk, Content, Element};
use crate::event::{Event, Key};
use crate::hit::{hit_test, hit_test_focusable};
use crate::layout::LayoutResult;

/// The focused element id, plus the translation of raw terminal input into
/// targeted [`Event`]s.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Returns false when `id` already had focus.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_owned());
        true
    }

    /// Forget focus on an element that is no longer in the tree.
    pub fn retain_in(&mut self, root: &Element) {
        let stale = self
            .focused
            .as_deref()
            .is_some_and(|id| find_element(root, id).is_none());
        if stale {
            log::debug!("Focused element {:?} left the tree", self.focused);
            self.focused = None;
        }
    }

    /// Turn raw input into targeted events.
    ///
    /// Tab and Shift+Tab cycle focus and yield only Blur/Focus. Escape blurs
    /// when something is focused and is delivered as a key otherwise. A press
    /// focuses the focusable element under the pointer, then clicks the
    /// deepest clickable one.
    pub fn process_events(
        &mut self,
        raw: &[TermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut out = Vec::new();
        for event in raw {
            match event {
                TermEvent::Key(key) => self.on_key(key, root, &mut out),
                TermEvent::Mouse(mouse) => self.on_mouse(mouse, root, layout, &mut out),
                TermEvent::Resize(width, height) => out.push(Event::Resize {
                    width: *width,
                    height: *height,
                }),
                _ => {}
            }
        }
        out
    }

    fn on_key(&mut self, raw: &KeyEvent, root: &Element, out: &mut Vec<Event>) {
        if raw.kind != KeyEventKind::Press {
            return;
        }
        let key = Key::from(raw.code);
        match key {
            Key::Tab | Key::BackTab => {
                if let Some(next) = self.neighbour(root, key == Key::Tab) {
                    self.move_to(next, out);
                }
            }
            Key::Escape if self.focused.is_some() => {
                out.extend(self.focused.take().map(|target| Event::Blur { target }));
            }
            _ => out.push(Event::Key {
                target: self.focused.clone(),
                key,
                modifiers: raw.modifiers.into(),
            }),
        }
    }

    fn on_mouse(
        &mut self,
        raw: &MouseEvent,
        root: &Element,
        layout: &LayoutResult,
        out: &mut Vec<Event>,
    ) {
        let MouseEventKind::Down(button) = raw.kind else {
            return;
        };
        let (x, y) = (raw.column, raw.row);
        if let Some(id) = hit_test_focusable(layout, root, x, y) {
            self.move_to(id, out);
        }
        out.push(Event::Click {
            target: hit_test(layout, root, x, y),
            x,
            y,
            button: button.into(),
        });
    }

    /// Focus `id`, reporting Blur for the old element and Focus for the new.
    fn move_to(&mut self, id: String, out: &mut Vec<Event>) {
        if self.focused.as_ref() == Some(&id) {
            return;
        }
        if let Some(target) = self.focused.replace(id.clone()) {
            out.push(Event::Blur { target });
        }
        out.push(Event::Focus { target: id });
    }

    /// The focusable element after (or before) the focused one, wrapping.
    fn neighbour(&self, root: &Element, forward: bool) -> Option<String> {
        let ids = collect_focusable(root);
        let len = ids.len();
        if len == 0 {
            return None;
        }
        let current = self
            .focused
            .as_ref()
            .and_then(|focused| ids.iter().position(|id| id == focused));
        let index = match (current, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        ids.into_iter().nth(index)
    }
}

/// Ids of enabled focusable elements, in tree order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut ids = Vec::new();
    walk(root, &mut |el| {
        if el.focusable && !el.disabled {
            ids.push(el.id.clone());
        }
    });
    ids
}

/// Flag the focused element, and the cursor of a focused text input, for
/// the renderer.
pub fn apply_focus(root: &mut Element, focused: Option<&str>) {
    let on = focused == Some(root.id.as_str());
    root.focused = on;
    match &mut root.content {
        Content::TextInput { focused, .. } => *focused = on,
        Content::Children(children) => children
            .iter_mut()
            .for_each(|child| apply_focus(child, focused)),
        _ => {}
    }
}
