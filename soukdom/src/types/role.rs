use std::fmt;

/// Accessibility role of an element.
///
/// Roles carry no rendering behavior; they describe structure so that
/// tests and assistive consumers can query the tree ("how many column
/// headers does this table have?") without depending on layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Role {
    #[default]
    None,
    Table,
    Row,
    ColumnHeader,
    Cell,
    Searchbox,
    Listbox,
    Option,
    Button,
    Heading,
    Status,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::None => "none",
            Role::Table => "table",
            Role::Row => "row",
            Role::ColumnHeader => "columnheader",
            Role::Cell => "cell",
            Role::Searchbox => "searchbox",
            Role::Listbox => "listbox",
            Role::Option => "option",
            Role::Button => "button",
            Role::Heading => "heading",
            Role::Status => "status",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
