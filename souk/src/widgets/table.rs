//! Direction-aware data table.
//!
//! The table renders columns and rows, keeps sort and filter state, and
//! reports sort/filter intents to its owner through callbacks. It never
//! reorders or filters rows itself: the owner does that and hands the
//! result back with [`DataTable::set_rows`].
//!
//! Layout direction comes from the [`LocaleContext`]. Switching language
//! mirrors the table but leaves sort and filter state untouched.

mod events;
mod item;
mod render;
mod state;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use log::debug;

use crate::locale::{LocaleContext, TextDirection};
use crate::state::{State, Subscription};
use crate::theme::Theme;

use super::events::EventResult;

pub use item::{CellRenderer, Column, ColumnWidth, TableRow};
pub use state::{FilterState, SortDirection, SortState};

/// Called with the column key and new direction after a header activation.
pub type SortCallback = Arc<dyn Fn(&str, SortDirection) + Send + Sync>;

/// Called with the column key and the full filter text on every change.
pub type FilterCallback = Arc<dyn Fn(&str, &str) + Send + Sync>;

fn next_table_id() -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    format!("table-{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// A table whose layout follows the active locale's direction.
///
/// ```ignore
/// let table = DataTable::new(columns, locale.clone())
///     .rows(assets)
///     .on_sort(|key, direction| store.sort_by(key, direction))
///     .on_filter(|key, text| store.filter(key, text));
/// ```
pub struct DataTable<R: TableRow> {
    id: String,
    columns: Vec<Column<R>>,
    rows: State<Vec<R>>,
    locale: LocaleContext,
    sort: State<SortState>,
    filters: State<FilterState>,
    on_sort: Option<SortCallback>,
    on_filter: Option<FilterCallback>,
    theme: Theme,
    dirty: Arc<AtomicBool>,
    subscriptions: Vec<Subscription>,
}

impl<R: TableRow> DataTable<R> {
    /// Create an empty, unsorted, unfiltered table.
    ///
    /// Column keys must be unique.
    pub fn new(columns: Vec<Column<R>>, locale: LocaleContext) -> Self {
        Self {
            id: next_table_id(),
            columns,
            rows: State::new(Vec::new()),
            locale,
            sort: State::default(),
            filters: State::default(),
            on_sort: None,
            on_filter: None,
            theme: Theme::default(),
            dirty: Arc::new(AtomicBool::new(false)),
            subscriptions: Vec::new(),
        }
        .watch()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Initial rows.
    pub fn rows(self, rows: Vec<R>) -> Self {
        self.rows.set(rows);
        self.rows.clear_dirty();
        self.dirty.store(false, Ordering::SeqCst);
        self
    }

    /// Share row storage with the owner, which may then write rows
    /// directly instead of going through [`DataTable::set_rows`].
    pub fn rows_state(mut self, rows: State<Vec<R>>) -> Self {
        self.rows = rows;
        self.watch()
    }

    /// Use sort state owned by the enclosing context.
    pub fn sort_state(mut self, sort: State<SortState>) -> Self {
        self.sort = sort;
        self.watch()
    }

    /// Use filter state owned by the enclosing context.
    pub fn filter_state(mut self, filters: State<FilterState>) -> Self {
        self.filters = filters;
        self.watch()
    }

    pub fn on_sort<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, SortDirection) + Send + Sync + 'static,
    {
        self.on_sort = Some(Arc::new(f));
        self
    }

    pub fn on_filter<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str) + Send + Sync + 'static,
    {
        self.on_filter = Some(Arc::new(f));
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Re-register change listeners on the current state handles.
    fn watch(mut self) -> Self {
        let flag = |dirty: &Arc<AtomicBool>| {
            let dirty = Arc::clone(dirty);
            move || dirty.store(true, Ordering::SeqCst)
        };
        let on_locale = flag(&self.dirty);
        let on_sort = flag(&self.dirty);
        let on_filter = flag(&self.dirty);
        let on_rows = flag(&self.dirty);

        self.subscriptions = vec![
            self.locale.subscribe(move |_| on_locale()),
            self.sort.subscribe(move |_| on_sort()),
            self.filters.subscribe(move |_| on_filter()),
            self.rows.subscribe(move |_| on_rows()),
        ];
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn table_id(&self) -> &str {
        &self.id
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn column(&self, key: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn row_count(&self) -> usize {
        self.rows.with(Vec::len)
    }

    /// Snapshot of the displayed rows.
    pub fn visible_rows(&self) -> Vec<R>
    where
        R: Clone,
    {
        self.rows.get()
    }

    pub fn sort(&self) -> SortState {
        self.sort.get()
    }

    pub fn filters(&self) -> FilterState {
        self.filters.get()
    }

    /// Current filter text for `key`, empty if none.
    pub fn filter_text(&self, key: &str) -> String {
        self.filters
            .with(|f| f.get(key).map(str::to_string))
            .unwrap_or_default()
    }

    pub fn direction(&self) -> TextDirection {
        self.locale.direction()
    }

    pub fn locale(&self) -> &LocaleContext {
        &self.locale
    }

    /// Clear the changed flag, returning whether locale, sort, filter or
    /// rows changed since the last call.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Activate the header of `key`.
    ///
    /// For a sortable column this advances the sort state and reports the
    /// new direction to `on_sort` exactly once. Unknown or non-sortable
    /// columns are ignored.
    pub fn activate_header(&self, key: &str) -> EventResult {
        match self.column(key) {
            Some(column) if column.sortable => {}
            _ => return EventResult::Ignored,
        }

        let next = self.sort.with(|s| s.next(key));
        let direction = next.direction;
        self.sort.set(next);
        debug!("{}: sort by {key} {direction}", self.id);

        if let Some(on_sort) = &self.on_sort {
            on_sort(key, direction);
        }
        EventResult::Consumed
    }

    /// Set the filter text of `key` and report it to `on_filter`.
    ///
    /// Every call reports, including repeats and the empty string.
    /// Unknown or non-filterable columns are ignored.
    pub fn change_filter(&self, key: &str, value: &str) -> EventResult {
        match self.column(key) {
            Some(column) if column.filterable => {}
            _ => return EventResult::Ignored,
        }

        self.filters.update(|f| f.set(key, value));
        debug!("{}: filter {key} = {value:?}", self.id);

        if let Some(on_filter) = &self.on_filter {
            on_filter(key, value);
        }
        EventResult::Consumed
    }

    /// Replace the displayed rows. Sort and filter state are kept.
    pub fn set_rows(&self, rows: Vec<R>) {
        self.rows.set(rows);
    }

    /// Back to unsorted. No callback is made.
    pub fn reset_sort(&self) {
        self.sort.set(SortState::default());
    }

    /// Drop all filters. No callback is made.
    pub fn reset_filters(&self) {
        self.filters.set(FilterState::new());
    }
}

impl<R: TableRow> std::fmt::Debug for DataTable<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("id", &self.id)
            .field("columns", &self.columns)
            .field("rows", &self.row_count())
            .field("sort", &self.sort())
            .field("filters", &self.filters())
            .finish_non_exhaustive()
    }
}
