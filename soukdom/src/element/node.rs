use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{
    Align, Direction, Edges, Justify, Role, Size, Style, TextAlign, TextDirection, TextWrap,
};

static AUTO_IDS: AtomicU64 = AtomicU64::new(0);

/// Ids for elements the caller never names; they only need to be unique.
fn auto_id(kind: &str) -> String {
    format!("{kind}-{}", AUTO_IDS.fetch_add(1, Ordering::Relaxed))
}

/// A node of the retained UI tree.
///
/// Elements are plain values built fresh on every frame. Layout, hit testing
/// and focus all address them by `id`, so widgets give stable ids to
/// anything that receives events.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: String,
    pub role: Role,
    /// Accessible name when the visible content does not say it.
    pub label: Option<String>,
    /// `None` inherits from the parent.
    pub dir: Option<TextDirection>,
    pub lang: Option<String>,
    pub content: Content,

    pub width: Size,
    pub height: Size,
    pub padding: Edges,
    pub direction: Direction,
    pub gap: u16,
    pub justify: Justify,
    pub align: Align,

    pub style: Style,
    pub style_focused: Option<Style>,
    pub text_wrap: TextWrap,
    pub text_align: TextAlign,

    pub focusable: bool,
    pub clickable: bool,
    pub disabled: bool,
    /// Set by [`crate::apply_focus`] before rendering.
    pub focused: bool,

    /// Free-form attributes widgets hang on their elements.
    pub data: HashMap<String, String>,
}

macro_rules! setters {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $name(mut self, $name: $ty) -> Self {
                self.$name = $name;
                self
            }
        )*
    };
}

impl Element {
    fn blank(kind: &str, direction: Direction, content: Content) -> Self {
        Self {
            id: auto_id(kind),
            role: Role::None,
            label: None,
            dir: None,
            lang: None,
            content,
            width: Size::Auto,
            height: Size::Auto,
            padding: Edges::default(),
            direction,
            gap: 0,
            justify: Justify::Start,
            align: Align::Start,
            style: Style::default(),
            style_focused: None,
            text_wrap: TextWrap::NoWrap,
            text_align: TextAlign::Start,
            focusable: false,
            clickable: false,
            disabled: false,
            focused: false,
            data: HashMap::new(),
        }
    }

    /// An empty vertical container.
    pub fn box_() -> Self {
        Self::blank("box", Direction::Column, Content::None)
    }

    pub fn col() -> Self {
        Self::blank("col", Direction::Column, Content::None)
    }

    pub fn row() -> Self {
        Self::blank("row", Direction::Row, Content::None)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::blank("text", Direction::Column, Content::Text(text.into()))
    }

    /// Single-line input showing `value`, cursor at its end.
    pub fn text_input(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        let content = Content::TextInput {
            value,
            cursor,
            placeholder: None,
            focused: false,
        };
        Self {
            focusable: true,
            ..Self::blank("input", Direction::Column, content)
        }
    }

    setters! {
        role: Role,
        width: Size,
        height: Size,
        padding: Edges,
        direction: Direction,
        gap: u16,
        justify: Justify,
        align: Align,
        style: Style,
        text_wrap: TextWrap,
        text_align: TextAlign,
        focusable: bool,
        clickable: bool,
        disabled: bool,
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn dir(mut self, dir: TextDirection) -> Self {
        self.dir = Some(dir);
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn style_focused(mut self, style: Style) -> Self {
        self.style_focused = Some(style);
        self
    }

    /// No effect unless this is a text input.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Content::TextInput { placeholder, .. } = &mut self.content {
            *placeholder = Some(text.into());
        }
        self
    }

    /// Show the input cursor. No effect unless this is a text input.
    pub fn input_focused(mut self, on: bool) -> Self {
        if let Content::TextInput { focused, .. } = &mut self.content {
            *focused = on;
        }
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    /// Append one child. Leaf content is replaced.
    pub fn child(self, child: Element) -> Self {
        self.children(std::iter::once(child))
    }

    pub fn children(mut self, more: impl IntoIterator<Item = Element>) -> Self {
        if let Content::Children(existing) = &mut self.content {
            existing.extend(more);
        } else {
            self.content = Content::Children(more.into_iter().collect());
        }
        self
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::box_()
    }
}
