use soukdom::layout::layout;
use soukdom::render::render_to_buffer;
use soukdom::{Border, Buffer, Element, Rect, Size, Style, TextAlign, TextDirection};

fn render(root: &Element, width: u16, height: u16) -> Buffer {
    let layout = layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &layout, &mut buf);
    buf
}

#[test]
fn test_text_starts_at_left_in_ltr() {
    let root = Element::text("abc")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1));

    let buf = render(&root, 10, 1);

    assert_eq!(buf.row_text(0), "abc       ");
}

#[test]
fn test_text_starts_at_right_in_rtl() {
    let root = Element::text("abc")
        .dir(TextDirection::Rtl)
        .width(Size::Fixed(10))
        .height(Size::Fixed(1));

    let buf = render(&root, 10, 1);

    assert_eq!(buf.row_text(0), "       abc");
}

#[test]
fn test_physical_alignment_ignores_direction() {
    let root = Element::text("abc")
        .dir(TextDirection::Rtl)
        .text_align(TextAlign::Left)
        .width(Size::Fixed(10))
        .height(Size::Fixed(1));

    let buf = render(&root, 10, 1);

    assert_eq!(buf.row_text(0), "abc       ");
}

#[test]
fn test_rtl_row_renders_children_mirrored() {
    let root = Element::row()
        .dir(TextDirection::Rtl)
        .width(Size::Fixed(10))
        .height(Size::Fixed(1))
        .child(Element::text("A").width(Size::Fixed(1)))
        .child(Element::text("B").width(Size::Fixed(1)));

    let buf = render(&root, 10, 1);

    assert_eq!(buf.row_text(0), "        BA");
}

#[test]
fn test_border_draws_corners() {
    let root = Element::box_()
        .width(Size::Fixed(4))
        .height(Size::Fixed(3))
        .style(Style::new().border(Border::Single));

    let buf = render(&root, 4, 3);

    assert_eq!(buf.row_text(0), "┌──┐");
    assert_eq!(buf.row_text(1), "│  │");
    assert_eq!(buf.row_text(2), "└──┘");
}

#[test]
fn test_children_are_clipped_to_parent() {
    let root = Element::row()
        .width(Size::Fixed(3))
        .height(Size::Fixed(1))
        .child(Element::text("abcdef").width(Size::Fixed(6)));

    let buf = render(&root, 8, 1);

    assert_eq!(buf.row_text(0), "abc     ");
}

#[test]
fn test_truncated_text_gets_ellipsis() {
    let root = Element::text("Jane Smith")
        .text_wrap(soukdom::TextWrap::Truncate)
        .width(Size::Fixed(6))
        .height(Size::Fixed(1));

    let buf = render(&root, 6, 1);

    assert_eq!(buf.row_text(0), "Jane …");
}

#[test]
fn test_empty_input_shows_placeholder() {
    let root = Element::text_input("")
        .placeholder("Filter")
        .width(Size::Fixed(8))
        .height(Size::Fixed(1));

    let buf = render(&root, 8, 1);

    assert_eq!(buf.row_text(0), "Filter  ");
    assert!(buf.get(0, 0).map(|c| c.style.dim).unwrap_or(false));
}

#[test]
fn test_focused_input_marks_cursor() {
    let root = Element::text_input("ab")
        .input_focused(true)
        .width(Size::Fixed(8))
        .height(Size::Fixed(1));

    let buf = render(&root, 8, 1);

    assert_eq!(buf.row_text(0), "ab      ");
    assert!(buf.get(2, 0).map(|c| c.style.reverse).unwrap_or(false));
}
