//! Sort and filter state.

use std::fmt;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Header indicator glyph.
    pub const fn arrow(self) -> char {
        match self {
            SortDirection::Asc => '▲',
            SortDirection::Desc => '▼',
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which column is sorted, and which way. `column_key == None` means
/// unsorted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub column_key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column_key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column_key: Some(column_key.into()),
            direction,
        }
    }

    /// State after activating the header of `key`.
    ///
    /// The sorted column toggles its direction; any other column starts
    /// ascending.
    pub fn next(&self, key: &str) -> SortState {
        match &self.column_key {
            Some(current) if current == key => SortState::new(key, self.direction.toggled()),
            _ => SortState::new(key, SortDirection::Asc),
        }
    }

    /// Direction of `key` if it is the sorted column.
    pub fn direction_of(&self, key: &str) -> Option<SortDirection> {
        match &self.column_key {
            Some(current) if current == key => Some(self.direction),
            _ => None,
        }
    }

    pub fn is_sorted(&self) -> bool {
        self.column_key.is_some()
    }
}

/// Filter text per column, in the order filters were first set.
///
/// A stored empty string is distinct from an absent entry: it records that
/// the user cleared the filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    entries: Vec<(String, String)>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries with non-empty text.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(_, v)| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
