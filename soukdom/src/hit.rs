//! Pointer hit testing against the last layout.

use crate::element::{Content, Element};
use crate::layout::LayoutResult;

#[derive(Clone, Copy)]
enum Wanted {
    Clickable,
    Focusable,
}

impl Wanted {
    fn accepts(self, element: &Element) -> bool {
        !element.disabled
            && match self {
                Wanted::Clickable => element.clickable,
                Wanted::Focusable => element.focusable,
            }
    }
}

/// Id of the deepest enabled clickable element under `(x, y)`.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    deepest(layout, root, x, y, Wanted::Clickable).map(|el| el.id.clone())
}

/// Id of the deepest enabled focusable element under `(x, y)`.
pub fn hit_test_focusable(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
) -> Option<String> {
    deepest(layout, root, x, y, Wanted::Focusable).map(|el| el.id.clone())
}

// Later siblings paint over earlier ones, so they are tried first.
fn deepest<'a>(
    layout: &LayoutResult,
    element: &'a Element,
    x: u16,
    y: u16,
    wanted: Wanted,
) -> Option<&'a Element> {
    if !layout.get(&element.id).is_some_and(|rect| rect.contains(x, y)) {
        return None;
    }
    let children: &[Element] = match &element.content {
        Content::Children(children) => children,
        _ => &[],
    };
    children
        .iter()
        .rev()
        .find_map(|child| deepest(layout, child, x, y, wanted))
        .or_else(|| wanted.accepts(element).then_some(element))
}
