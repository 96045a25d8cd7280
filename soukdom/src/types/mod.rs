mod color;
mod edges;
mod enums;
mod role;
mod style;

pub use color::Rgb;
pub use edges::Edges;
pub use enums::{
    Align, Border, Direction, Justify, Size, TextAlign, TextDirection, TextStyle, TextWrap,
};
pub use role::Role;
pub use style::Style;
