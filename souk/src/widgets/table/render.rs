//! Element tree for the data table.

use soukdom::{Edges, Element, Role, Size, TextWrap};

use super::item::{Column, TableRow};
use super::state::{FilterState, SortDirection, SortState};
use super::DataTable;

pub(super) const HEADER_PART: &str = "-header-";
pub(super) const FILTER_PART: &str = "-filter-";

impl<R: TableRow> DataTable<R> {
    /// Build the table element.
    ///
    /// The root has role `Table` and the active direction. It holds one
    /// header row with a `ColumnHeader` per column, then one `Row` per data
    /// row with exactly one `Cell` per column. Filter inputs sit inside
    /// their header cell as `Searchbox` elements.
    pub fn element(&self) -> Element {
        let direction = self.locale.direction();
        let sort = self.sort.get();
        let filters = self.filters.get();

        let header = self.header_row(&sort, &filters);
        let rows: Vec<Element> = self.rows.with(|rows| {
            rows.iter()
                .enumerate()
                .map(|(index, row)| self.body_row(index, row))
                .collect()
        });

        let mut body = Element::col()
            .id(format!("{}-body", self.id))
            .width(Size::Fill)
            .height(Size::Fill);
        if rows.is_empty() {
            body = body.child(
                Element::text(self.locale.t("table.empty"))
                    .role(Role::Status)
                    .padding(Edges::horizontal(1))
                    .style(self.theme.empty.clone()),
            );
        } else {
            body = body.children(rows);
        }

        Element::col()
            .id(&self.id)
            .role(Role::Table)
            .dir(direction)
            .lang(self.locale.code())
            .width(Size::Fill)
            .height(Size::Fill)
            .style(self.theme.row.clone())
            .data("sort-key", sort.column_key.clone().unwrap_or_default())
            .data("sort-direction", sort.direction.as_str())
            .child(header)
            .child(body)
    }

    pub(super) fn header_id(&self, key: &str) -> String {
        format!("{}{HEADER_PART}{key}", self.id)
    }

    pub(super) fn filter_id(&self, key: &str) -> String {
        format!("{}{FILTER_PART}{key}", self.id)
    }

    fn header_row(&self, sort: &SortState, filters: &FilterState) -> Element {
        let has_filters = self.columns.iter().any(|c| c.filterable);
        let height = if has_filters { 2 } else { 1 };

        let cells = self
            .columns
            .iter()
            .map(|column| self.header_cell(column, sort.direction_of(&column.key), filters));

        Element::row()
            .id(format!("{}-header", self.id))
            .role(Role::Row)
            .width(Size::Fill)
            .height(Size::Fixed(height))
            .style(self.theme.header.clone())
            .children(cells)
    }

    fn header_cell(
        &self,
        column: &Column<R>,
        sorted: Option<SortDirection>,
        filters: &FilterState,
    ) -> Element {
        let mut label = self.locale.t(&column.header);
        if let Some(direction) = sorted {
            label.push(' ');
            label.push(direction.arrow());
        }

        let style = if sorted.is_some() {
            &self.theme.header_sorted
        } else {
            &self.theme.header
        };

        let mut cell = Element::col()
            .id(self.header_id(&column.key))
            .role(Role::ColumnHeader)
            .label(label.clone())
            .width(column.width.size())
            .height(Size::Fill)
            .padding(Edges::horizontal(1))
            .style(style.clone())
            .data("key", column.key.clone())
            .child(
                Element::text(label)
                    .width(Size::Fill)
                    .height(Size::Fixed(1))
                    .text_wrap(TextWrap::Truncate),
            );

        if column.sortable {
            let aria_sort = match sorted {
                Some(SortDirection::Asc) => "ascending",
                Some(SortDirection::Desc) => "descending",
                None => "none",
            };
            cell = cell
                .focusable(true)
                .clickable(true)
                .style_focused(self.theme.header_focused.clone())
                .data("sort", aria_sort);
        }

        if column.filterable {
            let placeholder = self.locale.t("filter.placeholder");
            let value = filters.get(&column.key).unwrap_or_default();
            cell = cell.child(
                Element::text_input(value)
                    .id(self.filter_id(&column.key))
                    .role(Role::Searchbox)
                    .label(format!("{placeholder} {}", self.locale.t(&column.header)))
                    .placeholder(placeholder)
                    .width(Size::Fill)
                    .height(Size::Fixed(1))
                    .clickable(true)
                    .style(self.theme.filter.clone())
                    .style_focused(self.theme.filter_focused.clone())
                    .data("key", column.key.clone()),
            );
        }

        cell
    }

    fn body_row(&self, index: usize, row: &R) -> Element {
        let style = if index % 2 == 0 {
            &self.theme.row
        } else {
            &self.theme.row_alt
        };

        let cells = self.columns.iter().map(|column| {
            let content = match &column.render {
                Some(render) => render(row),
                None => Element::text(row.field(&column.key).unwrap_or_default())
                    .width(Size::Fill)
                    .text_wrap(TextWrap::Truncate),
            };
            Element::box_()
                .id(format!("{}-cell-{index}-{}", self.id, column.key))
                .role(Role::Cell)
                .width(column.width.size())
                .height(Size::Fixed(1))
                .padding(Edges::horizontal(1))
                .data("key", column.key.clone())
                .child(content)
        });

        Element::row()
            .id(format!("{}-row-{index}", self.id))
            .role(Role::Row)
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .style(style.clone())
            .children(cells)
    }
}
