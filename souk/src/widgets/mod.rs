//! Widgets built on the element tree.
//!
//! Widgets build [`Element`](soukdom::Element) trees from shared state and
//! map targeted events back onto their own operations.

pub mod events;
pub mod language;
pub mod table;

pub use events::EventResult;
pub use language::LanguageSelector;
pub use table::{
    CellRenderer, Column, ColumnWidth, DataTable, FilterState, SortDirection, SortState, TableRow,
};
