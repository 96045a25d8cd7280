use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width, truncate_to_width};
use crate::types::{Border, Rgb, TextAlign, TextDirection, TextStyle, TextWrap};

/// Inherited paint state: colors cascade from parent to child the way text
/// color does in a document.
#[derive(Clone, Copy)]
struct Inherited {
    fg: Rgb,
    bg: Rgb,
    text_style: TextStyle,
    dir: TextDirection,
    clip: Rect,
}

/// Paint `element` and its descendants into `buf` using a precomputed layout.
///
/// Elements missing from the layout (not laid out yet) are skipped along
/// with their subtree.
pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let inherited = Inherited {
        fg: Rgb::WHITE,
        bg: Rgb::BLACK,
        text_style: TextStyle::new(),
        dir: element.dir.unwrap_or_default(),
        clip: Rect::from_size(buf.width(), buf.height()),
    };
    let mut painted = 0usize;
    render_element(element, layout, buf, inherited, &mut painted);
    log::trace!("rendered {painted} elements");
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    parent: Inherited,
    painted: &mut usize,
) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };
    *painted += 1;

    let style = if element.focused {
        match &element.style_focused {
            Some(focused) => element.style.patch(focused),
            None => element.style.clone(),
        }
    } else {
        element.style.clone()
    };

    let state = Inherited {
        fg: style.foreground.unwrap_or(parent.fg),
        bg: style.background.unwrap_or(parent.bg),
        text_style: parent.text_style.merge(style.text_style),
        dir: element.dir.unwrap_or(parent.dir),
        clip: parent.clip,
    };
    let visible = rect.intersect(&parent.clip);

    if style.background.is_some() {
        buf.fill(visible, state.bg);
    }
    if style.border != Border::None {
        draw_border(buf, *rect, visible, style.border, state);
    }

    let inner = rect.inset(element.padding.resolve(state.dir).grow(style.border.size()));
    let inner_clip = inner.intersect(&parent.clip);

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            let align = element.text_align.resolve(state.dir);
            for (i, line) in text.lines().enumerate() {
                let y = inner.y.saturating_add(i as u16);
                if y >= inner.bottom() {
                    break;
                }
                let shown = match element.text_wrap {
                    TextWrap::Truncate => truncate_to_width(line, inner.width as usize),
                    TextWrap::NoWrap => line.to_string(),
                };
                let offset = align_offset(display_width(&shown), inner.width as usize, align);
                draw_str(buf, inner.x + offset as u16, y, &shown, state, inner_clip);
            }
        }
        Content::TextInput {
            value,
            cursor,
            placeholder,
            focused,
        } => {
            render_text_input(buf, inner, inner_clip, value, *cursor, placeholder, *focused, state);
        }
        Content::Children(children) => {
            let child_state = Inherited {
                clip: inner_clip,
                ..state
            };
            for child in children {
                render_element(child, layout, buf, child_state, painted);
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_text_input(
    buf: &mut Buffer,
    inner: Rect,
    clip: Rect,
    value: &str,
    cursor: usize,
    placeholder: &Option<String>,
    focused: bool,
    state: Inherited,
) {
    let align = TextAlign::Start.resolve(state.dir);
    if value.is_empty() {
        if let Some(placeholder) = placeholder {
            let shown = truncate_to_width(placeholder, inner.width as usize);
            let offset = align_offset(display_width(&shown), inner.width as usize, align);
            let dimmed = Inherited {
                text_style: state.text_style.dim(),
                ..state
            };
            draw_str(buf, inner.x + offset as u16, inner.y, &shown, dimmed, clip);
        }
    } else {
        let shown = truncate_to_width(value, inner.width.saturating_sub(1) as usize);
        let offset = align_offset(display_width(&shown) + 1, inner.width as usize, align);
        draw_str(buf, inner.x + offset as u16, inner.y, &shown, state, clip);
    }

    if focused {
        let before: String = value.chars().take(cursor).collect();
        let cursor_col = display_width(&before).min(inner.width.saturating_sub(1) as usize);
        let x = if align == TextAlign::Right {
            inner.right().saturating_sub(1 + (display_width(value) - display_width(&before)) as u16)
        } else {
            inner.x + cursor_col as u16
        };
        if clip.contains(x, inner.y) {
            if let Some(cell) = buf.get_mut(x, inner.y) {
                cell.style = cell.style.reverse();
            }
        }
    }
}

fn draw_str(buf: &mut Buffer, x: u16, y: u16, s: &str, state: Inherited, clip: Rect) {
    let mut col = x;
    for ch in s.chars() {
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if col.saturating_add(width) > clip.right() {
            break;
        }
        if clip.contains(col, y) {
            buf.put(col, y, Cell::glyph(ch, state.fg, state.bg, state.text_style));
            for extra in 1..width {
                if let Some(cell) = buf.get_mut(col + extra, y) {
                    cell.continuation = true;
                }
            }
        }
        col += width;
    }
}

fn draw_border(buf: &mut Buffer, rect: Rect, clip: Rect, border: Border, state: Inherited) {
    let Some([tl, tr, bl, br, h, v]) = border.glyphs() else {
        return;
    };
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;
    let mut put = |x: u16, y: u16, ch: char| {
        if clip.contains(x, y) {
            buf.put(x, y, Cell::glyph(ch, state.fg, state.bg, TextStyle::new()));
        }
    };
    for x in rect.x + 1..right {
        put(x, rect.y, h);
        put(x, bottom, h);
    }
    for y in rect.y + 1..bottom {
        put(rect.x, y, v);
        put(right, y, v);
    }
    put(rect.x, rect.y, tl);
    put(right, rect.y, tr);
    put(rect.x, bottom, bl);
    put(right, bottom, br);
}
