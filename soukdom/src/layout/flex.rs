use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Align, Direction, Justify, Size, TextDirection};

pub type LayoutResult = HashMap<String, Rect>;

/// Compute screen rects for every element in the tree.
///
/// Row containers whose effective [`TextDirection`] is right-to-left place
/// their first child at the right edge; padding is mirrored the same way.
/// Column containers are unaffected by direction.
pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let dir = element.dir.unwrap_or_default();
    let width = resolve_size(element.width, available.width, element, true);
    let height = resolve_size(element.height, available.height, element, false);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, dir, &mut result);
    result
}

fn layout_children(element: &Element, rect: Rect, dir: TextDirection, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let inner = rect.inset(
        element
            .padding
            .resolve(dir)
            .grow(element.style.border.size()),
    );

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    // First pass: fixed sizes and flex weights
    let mut fixed_total = 0u16;
    let mut flex_weight = 0u32;
    let gap_total = gap_span(element.gap, children.len());

    for child in children {
        let child_main_size = if is_row { child.width } else { child.height };
        match child_main_size {
            Size::Fixed(n) => fixed_total = fixed_total.saturating_add(n),
            Size::Auto => {
                fixed_total = fixed_total.saturating_add(estimate_size(child, is_row));
            }
            Size::Fill => flex_weight += 1,
            Size::Flex(w) => flex_weight += u32::from(w.max(1)),
            Size::Percent(p) => {
                fixed_total = fixed_total.saturating_add((main_size as f32 * p) as u16);
            }
        }
    }

    let remaining = main_size.saturating_sub(fixed_total.saturating_add(gap_total));

    let mut sizes: Vec<u16> = Vec::with_capacity(children.len());
    let mut leftover = remaining;
    let mut last_flex = None;
    for (i, child) in children.iter().enumerate() {
        let child_main_size = if is_row { child.width } else { child.height };
        let main = match child_main_size {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row),
            Size::Fill | Size::Flex(_) => {
                let weight = match child_main_size {
                    Size::Flex(w) => w.max(1),
                    _ => 1,
                };
                let share = if flex_weight > 0 {
                    (u32::from(remaining) * u32::from(weight) / flex_weight) as u16
                } else {
                    0
                };
                leftover = leftover.saturating_sub(share);
                last_flex = Some(i);
                share
            }
            Size::Percent(p) => (main_size as f32 * p) as u16,
        };

        sizes.push(main);
    }
    // Integer division leaves a remainder; the last flex child absorbs it.
    if let Some(i) = last_flex {
        sizes[i] = sizes[i].saturating_add(leftover);
    }

    let total: u16 = sizes.iter().fold(0u16, |acc, s| acc.saturating_add(*s));
    let extra_space = main_size.saturating_sub(total.saturating_add(gap_total));
    let (start_offset, between_gap) = match element.justify {
        Justify::Start => (0, element.gap),
        Justify::End => (extra_space, element.gap),
        Justify::Center => (extra_space / 2, element.gap),
        Justify::SpaceBetween => {
            if children.len() > 1 {
                (0, extra_space / (children.len() - 1) as u16 + element.gap)
            } else {
                (0, element.gap)
            }
        }
    };

    let mut offset = start_offset;
    for (child, main) in children.iter().zip(sizes) {
        let child_dir = child.dir.unwrap_or(dir);
        let child_cross_size = if is_row { child.height } else { child.width };
        let cross = match child_cross_size {
            Size::Fixed(n) => n,
            Size::Fill | Size::Flex(_) => cross_size,
            Size::Auto => {
                if element.align == Align::Stretch {
                    cross_size
                } else {
                    estimate_size(child, !is_row)
                }
            }
            Size::Percent(p) => (cross_size as f32 * p) as u16,
        };
        let cross = cross.min(cross_size);
        let main = main.min(main_size.saturating_sub(offset));

        let cross_offset = match element.align {
            Align::Start | Align::Stretch => 0,
            Align::Center => cross_size.saturating_sub(cross) / 2,
            Align::End => cross_size.saturating_sub(cross),
        };

        let child_rect = if is_row {
            let x = if dir.is_rtl() {
                // Mirror within the content box
                inner.right().saturating_sub(offset.saturating_add(main))
            } else {
                inner.x.saturating_add(offset)
            };
            Rect::new(x, inner.y.saturating_add(cross_offset), main, cross)
        } else {
            let x = if dir.is_rtl() && element.align != Align::Stretch {
                inner.right().saturating_sub(cross_offset.saturating_add(cross))
            } else {
                inner.x.saturating_add(cross_offset)
            };
            Rect::new(x, inner.y.saturating_add(offset), cross, main)
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, child_dir, result);

        offset = offset.saturating_add(main).saturating_add(between_gap);
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill | Size::Flex(_) => available,
        Size::Auto => estimate_size(element, is_width).min(available),
        Size::Percent(p) => ((available as f32 * p) as u16).min(available),
    }
}

fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let border_size = element.style.border.size() * 2;
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content_size = match &element.content {
        Content::Text(text) => {
            if is_width {
                text.lines().map(display_width).max().unwrap_or(0) as u16
            } else {
                text.lines().count().max(1) as u16
            }
        }
        Content::TextInput {
            value, placeholder, ..
        } => {
            if is_width {
                let shown = if value.is_empty() {
                    placeholder.as_deref().unwrap_or("")
                } else {
                    value
                };
                // One extra column for the cursor
                (display_width(shown) as u16).saturating_add(1)
            } else {
                1
            }
        }
        Content::Children(children) => {
            if children.is_empty() {
                0
            } else if element.direction == Direction::Row && is_width
                || element.direction == Direction::Column && !is_width
            {
                // Sum along main axis
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .fold(gap_span(element.gap, children.len()), u16::saturating_add)
            } else {
                // Max along cross axis
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    let fixed = match (is_width, element.width, element.height) {
        (true, Size::Fixed(n), _) => Some(n),
        (false, _, Size::Fixed(n)) => Some(n),
        _ => None,
    };

    fixed.unwrap_or(content_size.saturating_add(padding).saturating_add(border_size))
}

/// Total gap between `count` children along the main axis.
fn gap_span(gap: u16, count: usize) -> u16 {
    let gaps = u16::try_from(count.saturating_sub(1)).unwrap_or(u16::MAX);
    gap.saturating_mul(gaps)
}
