//! Column descriptors and the row contract.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use soukdom::{Element, Size};

/// Builds the content of one cell from a row.
pub type CellRenderer<R> = Arc<dyn Fn(&R) -> Element + Send + Sync>;

/// Column width specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Fixed width in terminal columns.
    Fixed(u16),
    /// Share of the remaining width.
    Flex(u16),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1)
    }
}

impl ColumnWidth {
    pub(super) fn size(self) -> Size {
        match self {
            ColumnWidth::Fixed(w) => Size::Fixed(w),
            ColumnWidth::Flex(w) => Size::Flex(w),
        }
    }
}

/// A table column definition.
///
/// Keys must be unique within a table.
pub struct Column<R> {
    /// Identifies the column in sort/filter state and callbacks.
    pub key: String,
    /// Header label. Looked up in the active translation catalog, so a
    /// catalog key and a literal label both work.
    pub header: String,
    pub sortable: bool,
    pub filterable: bool,
    pub width: ColumnWidth,
    /// Custom cell content; defaults to the row's field text.
    pub render: Option<CellRenderer<R>>,
}

impl<R> Column<R> {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
            filterable: false,
            width: ColumnWidth::default(),
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub fn fixed(mut self, width: u16) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    pub fn flex(mut self, weight: u16) -> Self {
        self.width = ColumnWidth::Flex(weight);
        self
    }

    pub fn render<F>(mut self, f: F) -> Self
    where
        F: Fn(&R) -> Element + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(f));
        self
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            sortable: self.sortable,
            filterable: self.filterable,
            width: self.width,
            render: self.render.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("width", &self.width)
            .field("render", &self.render.is_some())
            .finish()
    }
}

/// A record the table can display.
///
/// The table only reads rows; ordering and filtering belong to the owner.
pub trait TableRow: Send + Sync + 'static {
    /// Display text for the field under `key`, `None` if the row has none.
    fn field(&self, key: &str) -> Option<String>;
}

impl TableRow for HashMap<String, String> {
    fn field(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl TableRow for BTreeMap<String, String> {
    fn field(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
