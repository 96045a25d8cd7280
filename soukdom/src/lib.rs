//! Element tree, layout and terminal rendering with writing-direction
//! support.
//!
//! Elements carry accessibility [`Role`]s plus `dir`/`lang` attributes.
//! Row layout mirrors under right-to-left direction, and the
//! [`Terminal`] paints the result through a diffed cell [`Buffer`].

pub mod buffer;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{effective_dir, find_by_role, find_element, text_content, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{apply_focus, collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_focusable};
pub use layout::{layout, LayoutResult, Rect};
pub use terminal::Terminal;
pub use types::{
    Align, Border, Direction, Edges, Justify, Rgb, Role, Size, Style, TextAlign, TextDirection,
    TextStyle, TextWrap,
};
