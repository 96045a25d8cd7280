use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use souk::prelude::*;
use souk::widgets::FilterState;
use soukdom::element::{count_role, effective_dir, find_by_role, find_element, text_content};
use soukdom::{Modifiers, MouseButton, TextDirection};

type Row = HashMap<String, String>;

fn row(name: &str, age: &str) -> Row {
    HashMap::from([
        ("name".to_string(), name.to_string()),
        ("age".to_string(), age.to_string()),
    ])
}

fn columns() -> Vec<Column<Row>> {
    vec![
        Column::new("name", "Name").sortable().filterable(),
        Column::new("age", "Age").sortable(),
        Column::new("notes", "Notes"),
    ]
}

#[derive(Default, Clone)]
struct Recorder {
    sorts: Arc<Mutex<Vec<(String, SortDirection)>>>,
    filters: Arc<Mutex<Vec<(String, String)>>>,
}

impl Recorder {
    fn attach(&self, table: DataTable<Row>) -> DataTable<Row> {
        let sorts = Arc::clone(&self.sorts);
        let filters = Arc::clone(&self.filters);
        table
            .on_sort(move |key, direction| sorts.lock().unwrap().push((key.to_string(), direction)))
            .on_filter(move |key, value| {
                filters
                    .lock()
                    .unwrap()
                    .push((key.to_string(), value.to_string()))
            })
    }

    fn sorts(&self) -> Vec<(String, SortDirection)> {
        self.sorts.lock().unwrap().clone()
    }

    fn filters(&self) -> Vec<(String, String)> {
        self.filters.lock().unwrap().clone()
    }
}

fn key(target: &str, key: Key) -> Event {
    Event::Key {
        target: Some(target.to_string()),
        key,
        modifiers: Modifiers::NONE,
    }
}

fn click(target: &str) -> Event {
    Event::Click {
        target: Some(target.to_string()),
        x: 0,
        y: 0,
        button: MouseButton::Left,
    }
}

#[test]
fn test_header_cells_without_rows() {
    let table = DataTable::new(columns(), LocaleContext::new());
    let root = table.element();

    assert_eq!(root.role, Role::Table);
    assert_eq!(count_role(&root, Role::ColumnHeader), 3);
    assert_eq!(count_role(&root, Role::Cell), 0);
    assert_eq!(count_role(&root, Role::Row), 1);
}

#[test]
fn test_cell_count_is_rows_times_columns() {
    let table = DataTable::new(columns(), LocaleContext::new())
        .rows(vec![row("John", "30"), row("Jane", "25")]);
    let root = table.element();

    assert_eq!(count_role(&root, Role::ColumnHeader), 3);
    assert_eq!(count_role(&root, Role::Cell), 6);
    assert_eq!(count_role(&root, Role::Row), 3);
}

#[test]
fn test_filter_inputs_do_not_add_cells() {
    let table = DataTable::new(columns(), LocaleContext::new()).rows(vec![row("John", "30")]);
    let root = table.element();

    assert_eq!(count_role(&root, Role::Searchbox), 1);
    assert_eq!(count_role(&root, Role::ColumnHeader), 3);
    assert_eq!(count_role(&root, Role::Cell), 3);
}

#[test]
fn test_custom_renderer_keeps_cell_count() {
    let columns = vec![
        Column::new("name", "Name").render(|r: &Row| {
            Element::text(format!("<{}>", r.get("name").cloned().unwrap_or_default()))
        }),
        Column::new("age", "Age"),
    ];
    let table = DataTable::new(columns, LocaleContext::new())
        .rows(vec![row("John", "30"), row("Jane", "25")]);
    let root = table.element();

    assert_eq!(count_role(&root, Role::Cell), 4);
    let first = find_by_role(&root, Role::Cell)[0];
    assert_eq!(text_content(first), "<John>");
}

#[test]
fn test_missing_field_renders_empty() {
    let table = DataTable::new(columns(), LocaleContext::new()).rows(vec![row("John", "30")]);
    let root = table.element();

    let cells = find_by_role(&root, Role::Cell);
    assert_eq!(text_content(cells[0]), "John");
    assert_eq!(text_content(cells[1]), "30");
    assert_eq!(text_content(cells[2]), "");
}

#[test]
fn test_sort_sequence() {
    let recorder = Recorder::default();
    let table = recorder.attach(DataTable::new(columns(), LocaleContext::new()));

    assert_eq!(table.activate_header("name"), EventResult::Consumed);
    assert_eq!(table.activate_header("name"), EventResult::Consumed);
    assert_eq!(table.activate_header("age"), EventResult::Consumed);

    assert_eq!(
        recorder.sorts(),
        vec![
            ("name".to_string(), SortDirection::Asc),
            ("name".to_string(), SortDirection::Desc),
            ("age".to_string(), SortDirection::Asc),
        ]
    );
    assert_eq!(table.sort(), SortState::new("age", SortDirection::Asc));
}

#[test]
fn test_non_sortable_header_is_ignored() {
    let recorder = Recorder::default();
    let table = recorder.attach(DataTable::new(columns(), LocaleContext::new()));

    assert_eq!(table.activate_header("notes"), EventResult::Ignored);
    assert_eq!(table.activate_header("missing"), EventResult::Ignored);

    assert!(recorder.sorts().is_empty());
    assert_eq!(table.sort(), SortState::default());
}

#[test]
fn test_filter_then_clear_reports_both() {
    let recorder = Recorder::default();
    let table = recorder.attach(DataTable::new(columns(), LocaleContext::new()));

    table.change_filter("name", "John");
    table.change_filter("name", "");

    assert_eq!(
        recorder.filters(),
        vec![
            ("name".to_string(), "John".to_string()),
            ("name".to_string(), String::new()),
        ]
    );
    assert_eq!(table.filters().get("name"), Some(""));
}

#[test]
fn test_repeated_filter_value_reports_each_time() {
    let recorder = Recorder::default();
    let table = recorder.attach(DataTable::new(columns(), LocaleContext::new()));

    table.change_filter("name", "Jo");
    table.change_filter("name", "Jo");

    assert_eq!(recorder.filters().len(), 2);
}

#[test]
fn test_non_filterable_column_is_ignored() {
    let recorder = Recorder::default();
    let table = recorder.attach(DataTable::new(columns(), LocaleContext::new()));

    assert_eq!(table.change_filter("age", "30"), EventResult::Ignored);
    assert!(recorder.filters().is_empty());
    assert!(table.filters().is_empty());
}

#[test]
fn test_sort_indicator_on_sorted_header() {
    let table = DataTable::new(columns(), LocaleContext::new());
    table.activate_header("name");
    let root = table.element();
    let header = find_element(&root, &format!("{}-header-name", table.table_id())).unwrap();
    assert!(header.label.as_deref().unwrap().ends_with('▲'));
    assert_eq!(header.get_data("sort").map(String::as_str), Some("ascending"));

    table.activate_header("name");
    let root = table.element();
    let header = find_element(&root, &format!("{}-header-name", table.table_id())).unwrap();
    assert!(header.label.as_deref().unwrap().ends_with('▼'));
}

#[test]
fn test_header_events_activate_sort() {
    let recorder = Recorder::default();
    let table = recorder.attach(DataTable::new(columns(), LocaleContext::new()));
    let header = format!("{}-header-name", table.table_id());

    assert_eq!(table.handle_event(&click(&header)), EventResult::Consumed);
    assert_eq!(table.handle_event(&key(&header, Key::Enter)), EventResult::Consumed);
    assert_eq!(table.handle_event(&key(&header, Key::Char(' '))), EventResult::Consumed);
    assert_eq!(table.handle_event(&key(&header, Key::Char('x'))), EventResult::Ignored);

    let directions: Vec<_> = recorder.sorts().into_iter().map(|(_, d)| d).collect();
    assert_eq!(
        directions,
        vec![SortDirection::Asc, SortDirection::Desc, SortDirection::Asc]
    );
}

#[test]
fn test_filter_typing_and_clearing() {
    let recorder = Recorder::default();
    let table = recorder.attach(DataTable::new(columns(), LocaleContext::new()));
    let input = format!("{}-filter-name", table.table_id());

    table.handle_event(&key(&input, Key::Char('J')));
    table.handle_event(&key(&input, Key::Char('o')));
    table.handle_event(&key(&input, Key::Backspace));
    table.handle_event(&Event::Key {
        target: Some(input.clone()),
        key: Key::Char('u'),
        modifiers: Modifiers::CTRL,
    });

    assert_eq!(
        recorder.filters(),
        vec![
            ("name".to_string(), "J".to_string()),
            ("name".to_string(), "Jo".to_string()),
            ("name".to_string(), "J".to_string()),
            ("name".to_string(), String::new()),
        ]
    );
}

#[test]
fn test_backspace_on_empty_filter_reports_nothing() {
    let recorder = Recorder::default();
    let table = recorder.attach(DataTable::new(columns(), LocaleContext::new()));
    let input = format!("{}-filter-name", table.table_id());

    assert_eq!(table.handle_event(&key(&input, Key::Backspace)), EventResult::Consumed);
    assert!(recorder.filters().is_empty());
}

#[test]
fn test_events_for_other_elements_are_ignored() {
    let table = DataTable::new(columns(), LocaleContext::new());
    assert_eq!(table.handle_event(&click("elsewhere")), EventResult::Ignored);
    assert_eq!(
        table.handle_event(&Event::Resize {
            width: 80,
            height: 24
        }),
        EventResult::Ignored
    );
    assert!(!table.owns("elsewhere"));
    assert!(table.owns(&format!("{}-header-age", table.table_id())));
}

#[test]
fn test_set_rows_keeps_sort_and_filters() {
    let table = DataTable::new(columns(), LocaleContext::new());
    table.activate_header("age");
    table.change_filter("name", "J");

    table.set_rows(vec![row("Jane", "25")]);

    assert_eq!(table.sort(), SortState::new("age", SortDirection::Asc));
    assert_eq!(table.filter_text("name"), "J");
    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_reset_clears_state_without_callbacks() {
    let recorder = Recorder::default();
    let table = recorder.attach(DataTable::new(columns(), LocaleContext::new()));
    table.activate_header("name");
    table.change_filter("name", "x");

    table.reset_sort();
    table.reset_filters();

    assert_eq!(table.sort(), SortState::default());
    assert_eq!(table.filters(), FilterState::new());
    assert_eq!(recorder.sorts().len(), 1);
    assert_eq!(recorder.filters().len(), 1);
}

#[test]
fn test_external_state_is_shared() {
    let sort = State::new(SortState::new("age", SortDirection::Desc));
    let table = DataTable::new(columns(), LocaleContext::new()).sort_state(sort.clone());

    table.activate_header("age");

    assert_eq!(sort.get(), SortState::new("age", SortDirection::Asc));
}

#[test]
fn test_take_dirty_tracks_changes() {
    let table = DataTable::new(columns(), LocaleContext::new());
    table.take_dirty();

    assert!(!table.take_dirty());
    table.change_filter("name", "a");
    assert!(table.take_dirty());
    assert!(!table.take_dirty());
    table.set_rows(vec![]);
    assert!(table.take_dirty());
}

#[tokio::test]
async fn test_direction_follows_locale() {
    let locale = LocaleContext::new();
    let table = DataTable::new(columns(), locale.clone()).rows(vec![row("John", "30")]);
    assert_eq!(table.element().dir, Some(TextDirection::Ltr));

    locale.change_language("ar").await;
    let root = table.element();
    assert_eq!(root.dir, Some(TextDirection::Rtl));
    assert_eq!(root.lang.as_deref(), Some("ar"));

    let cell = find_by_role(&root, Role::Cell)[0].id.clone();
    assert_eq!(effective_dir(&root, &cell), Some(TextDirection::Rtl));

    locale.change_language("en").await;
    assert_eq!(table.element().dir, Some(TextDirection::Ltr));
}

#[tokio::test]
async fn test_locale_change_marks_dirty_and_keeps_state() {
    let locale = LocaleContext::new();
    let table = DataTable::new(columns(), locale.clone());
    table.activate_header("name");
    table.change_filter("name", "J");
    table.take_dirty();

    locale.change_language("he").await;

    assert!(table.take_dirty());
    assert_eq!(table.sort(), SortState::new("name", SortDirection::Asc));
    assert_eq!(table.filter_text("name"), "J");
}

#[tokio::test]
async fn test_headers_follow_catalog() {
    let locale = LocaleContext::new();
    let columns = vec![Column::<Row>::new("price", "column.price").sortable()];
    let table = DataTable::new(columns, locale.clone());

    let header = |table: &DataTable<Row>| {
        find_by_role(&table.element(), Role::ColumnHeader)[0]
            .label
            .clone()
            .unwrap()
    };
    assert_eq!(header(&table), "Price");

    locale.change_language("es").await;
    assert_eq!(header(&table), "Precio");
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let locale = LocaleContext::new();
    let recorder = Recorder::default();
    let columns = vec![
        Column::new("name", "Name").sortable().filterable(),
        Column::new("age", "Age").sortable(),
    ];
    let table = recorder.attach(
        DataTable::new(columns, locale.clone()).rows(vec![row("John", "30"), row("Jane", "25")]),
    );

    let root = table.element();
    assert_eq!(root.dir, Some(TextDirection::Ltr));
    assert_eq!(count_role(&root, Role::ColumnHeader), 2);
    assert_eq!(count_role(&root, Role::Cell), 4);

    table.activate_header("name");
    table.activate_header("name");
    assert_eq!(
        recorder.sorts(),
        vec![
            ("name".to_string(), SortDirection::Asc),
            ("name".to_string(), SortDirection::Desc),
        ]
    );

    table.change_filter("name", "John");
    assert_eq!(recorder.filters(), vec![("name".to_string(), "John".to_string())]);

    locale.change_language("ar").await;
    let root = table.element();
    assert_eq!(root.dir, Some(TextDirection::Rtl));
    assert_eq!(count_role(&root, Role::Cell), 4);
    assert_eq!(table.sort(), SortState::new("name", SortDirection::Desc));
    assert_eq!(table.filter_text("name"), "John");
    assert_eq!(recorder.sorts().len(), 2);
    assert_eq!(recorder.filters(), vec![("name".to_string(), "John".to_string())]);

    // The table reports intents only; row order is the owner's business.
    let names: Vec<_> = find_by_role(&root, Role::Cell)
        .iter()
        .step_by(2)
        .map(|cell| text_content(cell))
        .collect();
    assert_eq!(names, vec!["John", "Jane"]);
}

#[tokio::test]
async fn test_language_switch_leaves_callback_history_alone() {
    let locale = LocaleContext::new();
    let recorder = Recorder::default();
    let rows: Vec<Row> = ["John Doe", "Jane Smith"]
        .into_iter()
        .map(|name| HashMap::from([("name".to_string(), name.to_string())]))
        .collect();
    let table = recorder.attach(
        DataTable::new(
            vec![Column::new("name", "Name").sortable().filterable()],
            locale.clone(),
        )
        .rows(rows),
    );

    table.activate_header("name");
    table.change_filter("name", "John");
    let sorts = vec![("name".to_string(), SortDirection::Asc)];
    let filters = vec![("name".to_string(), "John".to_string())];
    assert_eq!(recorder.sorts(), sorts);
    assert_eq!(recorder.filters(), filters);

    assert!(locale.change_language("ar").await);
    let root = table.element();
    assert_eq!(root.dir, Some(TextDirection::Rtl));
    assert_eq!(count_role(&root, Role::Cell), 2);
    assert_eq!(recorder.sorts(), sorts);
    assert_eq!(recorder.filters(), filters);

    assert!(!locale.change_language("xx").await);
    assert_eq!(table.element().dir, Some(TextDirection::Rtl));
    assert_eq!(recorder.sorts(), sorts);
    assert_eq!(recorder.filters(), filters);
}

#[test]
fn test_new_table_starts_clean() {
    let table = DataTable::new(columns(), LocaleContext::new()).rows(vec![row("John", "30")]);
    assert!(!table.take_dirty());

    table.set_rows(vec![]);
    assert!(table.take_dirty());
}

#[test]
fn test_heavy_flex_columns_lay_out() {
    let table: DataTable<Row> = DataTable::new(
        vec![
            Column::new("name", "Name").flex(40000),
            Column::new("age", "Age").flex(40000),
        ],
        LocaleContext::new(),
    )
    .rows(vec![row("John", "30")]);
    let root = table.element();

    let result = soukdom::layout(&root, soukdom::Rect::new(0, 0, 80, 24));

    let width = |key: &str| result[&format!("{}-header-{key}", table.table_id())].width;
    assert!(width("name") >= 39 && width("age") >= 39);
    assert!(width("name") + width("age") <= 80);
}
