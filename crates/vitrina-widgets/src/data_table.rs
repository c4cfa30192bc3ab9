//! `DataTable` widget: tabular data with client-side sort, pagination, and
//! row selection.
//!
//! The table's state machine is deliberately forgiving: out-of-range page
//! requests, sort toggles on non-sortable columns, and selections past the
//! current row count are silent no-ops. A malformed interaction never panics
//! and never emits a notification.
//!
//! Selection is positional. `selected` holds absolute indices into the stored
//! row sequence, and those indices are resolved against whatever the row
//! sequence is at read time. Re-sorting or replacing rows after a selection
//! silently changes which logical rows are selected; callers that need
//! identity-based selection must track it themselves.

use crate::checkbox::CheckState;
use vitrina_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, FontWeight, MouseButton, Point, Rect, Size, TextStyle,
    TypeId, Widget,
};

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

/// Width of the leading checkbox column when selection is enabled.
const CHECKBOX_COL_WIDTH: f32 = 48.0;
/// Default width for columns without an explicit width.
const DEFAULT_COL_WIDTH: f32 = 100.0;
/// Height of the pagination footer.
const FOOTER_HEIGHT: f32 = 48.0;
/// Side length of a pagination button hit area.
const PAGE_BUTTON_SIZE: f32 = 24.0;
/// Horizontal gap between pagination buttons.
const PAGE_BUTTON_GAP: f32 = 8.0;

/// Formatter turning a raw cell value into display text.
pub type CellFormatter = fn(&CellValue, &TableRow) -> String;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Natural `<` ordering first
    #[default]
    Ascending,
    /// Reversed comparison
    Descending,
}

impl SortDirection {
    /// Flip the direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Text alignment within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Column definition for a data table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableColumn {
    /// Column key (field name in row data)
    pub key: String,
    /// Display label
    pub label: String,
    /// Whether the column responds to sort toggles
    pub sortable: bool,
    /// Text alignment
    pub align: TextAlign,
    /// Column width (None = default)
    pub width: Option<f32>,
    /// Optional display formatter for cell values
    #[serde(skip)]
    pub formatter: Option<CellFormatter>,
}

impl TableColumn {
    /// Create a new column. Columns are sortable unless opted out.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: true,
            align: TextAlign::Left,
            width: None,
            formatter: None,
        }
    }

    /// Set whether the column is sortable.
    #[must_use]
    pub const fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Set text alignment.
    #[must_use]
    pub const fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Set column width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width.max(24.0));
        self
    }

    /// Set a display formatter.
    #[must_use]
    pub fn formatter(mut self, formatter: CellFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }
}

/// A cell value in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Boolean value
    Bool(bool),
    /// Empty cell
    Empty,
}

impl CellValue {
    /// Get display text for the cell.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => format!("{n}"),
            Self::Bool(b) => if *b { "Yes" } else { "No" }.to_string(),
            Self::Empty => String::new(),
        }
    }

    /// Numeric view of the value, when one exists.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Bool(b) => Some(f64::from(u8::from(*b))),
            Self::Empty => None,
        }
    }

    /// Relational comparison used by column sorting.
    ///
    /// Both sides compare numerically when both have a numeric view, else
    /// lexicographically on display text. Mixed-type columns therefore get a
    /// coercive but total ordering.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => self.display().cmp(&other.display()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// A row of data in the table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cell values by column key
    pub cells: HashMap<String, CellValue>,
}

impl TableRow {
    /// Create a new empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell value.
    #[must_use]
    pub fn cell(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(key.into(), value.into());
        self
    }

    /// Get a cell value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.get(key)
    }
}

/// Message emitted when the set of selected rows changes.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSelectionChanged {
    /// Materialized rows for the current selection, in ascending index order
    pub selected_rows: Vec<TableRow>,
}

/// Message emitted when the current page changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TablePageChanged {
    /// The new 1-based page number
    pub page: usize,
}

/// `DataTable` widget with client-side sort, pagination, and selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTable {
    /// Column definitions
    columns: Vec<TableColumn>,
    /// Row data, in caller-supplied order
    rows: Vec<TableRow>,
    /// Index into `columns` of the active sort, if any
    sort_column: Option<usize>,
    /// Direction of the active sort
    sort_direction: SortDirection,
    /// Current 1-based page
    page: usize,
    /// Rows per page
    page_size: usize,
    /// Absolute indices of selected rows
    selected: BTreeSet<usize>,
    /// Whether the selection column is shown
    selectable: bool,
    /// Row height
    row_height: f32,
    /// Header height
    header_height: f32,
    /// Header background color
    header_bg: Color,
    /// Row background color
    row_bg: Color,
    /// Selected row background color
    selected_bg: Color,
    /// Divider color
    divider_color: Color,
    /// Text color
    text_color: Color,
    /// Header text color
    header_text_color: Color,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for DataTable {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            sort_column: None,
            sort_direction: SortDirection::Ascending,
            page: 1,
            page_size: 10,
            selected: BTreeSet::new(),
            selectable: false,
            row_height: 48.0,
            header_height: 56.0,
            header_bg: Color::new(0.98, 0.98, 0.98, 1.0),
            row_bg: Color::WHITE,
            selected_bg: Color::new(0.9, 0.95, 1.0, 1.0),
            divider_color: Color::new(0.0, 0.0, 0.0, 0.12),
            text_color: Color::new(0.0, 0.0, 0.0, 0.87),
            header_text_color: Color::new(0.0, 0.0, 0.0, 0.54),
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }
}

impl DataTable {
    /// Create a new empty data table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Builder configuration =====

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Add multiple columns.
    #[must_use]
    pub fn columns(mut self, columns: impl IntoIterator<Item = TableColumn>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Add a row.
    #[must_use]
    pub fn row(mut self, row: TableRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Add multiple rows.
    #[must_use]
    pub fn rows(mut self, rows: impl IntoIterator<Item = TableRow>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Enable the selection column.
    #[must_use]
    pub const fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Set rows per page (minimum 1). Re-clamps the current page.
    #[must_use]
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self.clamp_page();
        self
    }

    /// Set row height.
    #[must_use]
    pub fn row_height(mut self, height: f32) -> Self {
        self.row_height = height.max(24.0);
        self
    }

    /// Set header height.
    #[must_use]
    pub fn header_height(mut self, height: f32) -> Self {
        self.header_height = height.max(24.0);
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    // ===== State mutation =====

    /// Replace the row data wholesale.
    ///
    /// Recomputes the page count and clamps the current page. The selection
    /// is not cleared; its indices now refer to positions in the new
    /// sequence. An active sort is not applied here, it is reapplied on the
    /// next read of the visible slice.
    pub fn set_rows(&mut self, rows: Vec<TableRow>) {
        self.rows = rows;
        self.clamp_page();
    }

    /// Replace the column definitions wholesale.
    ///
    /// Sort and pagination state are left untouched, even when the active
    /// sort index points past the new columns' bounds. The stale index is
    /// ignored by the sort until it is re-toggled.
    pub fn set_columns(&mut self, columns: Vec<TableColumn>) {
        self.columns = columns;
    }

    /// Toggle sorting on a column.
    ///
    /// Toggling the active column flips its direction; any other column
    /// becomes the active ascending sort. Non-sortable and out-of-range
    /// columns are silent no-ops.
    pub fn toggle_sort(&mut self, column_index: usize) {
        let Some(column) = self.columns.get(column_index) else {
            return;
        };
        if !column.sortable {
            return;
        }
        if self.sort_column == Some(column_index) {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_column = Some(column_index);
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Select or deselect a row by its position on the current page.
    ///
    /// The page-relative index is translated to an absolute index into the
    /// row sequence. Indices past the current row count are silent no-ops.
    /// Returns the selection-change notification otherwise.
    pub fn select_row(
        &mut self,
        page_relative_index: usize,
        selected: bool,
    ) -> Option<TableSelectionChanged> {
        let absolute = (self.page - 1) * self.page_size + page_relative_index;
        if absolute >= self.rows.len() {
            return None;
        }
        if selected {
            self.selected.insert(absolute);
        } else {
            self.selected.remove(&absolute);
        }
        Some(self.selection_changed())
    }

    /// Select or deselect every row on the current page.
    pub fn select_all_on_page(&mut self, selected: bool) -> TableSelectionChanged {
        let base = (self.page - 1) * self.page_size;
        for absolute in base..(base + self.page_size).min(self.rows.len()) {
            if selected {
                self.selected.insert(absolute);
            } else {
                self.selected.remove(&absolute);
            }
        }
        self.selection_changed()
    }

    /// Navigate to a 1-based page.
    ///
    /// Out-of-range pages and the current page are silent no-ops (no
    /// notification). Returns the page-change notification otherwise.
    pub fn go_to_page(&mut self, page: usize) -> Option<TablePageChanged> {
        if page < 1 || page > self.total_pages() || page == self.page {
            return None;
        }
        self.page = page;
        Some(TablePageChanged { page })
    }

    // ===== Derived views =====

    /// Total page count: `max(1, ceil(rows / page_size))`.
    ///
    /// An empty table is one page with zero visible rows.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.rows.len().div_ceil(self.page_size).max(1)
    }

    /// Current 1-based page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.page
    }

    /// Rows for the current page, with the active sort applied to the full
    /// row sequence first. Computed freshly on each call; the stored rows
    /// keep their caller-supplied order.
    #[must_use]
    pub fn visible_slice(&self) -> Vec<TableRow> {
        let sorted = self.sorted_rows();
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(sorted.len());
        if start >= end {
            return Vec::new();
        }
        sorted[start..end].to_vec()
    }

    /// Materialize the selected rows, resolved against the current row
    /// sequence in ascending index order. Indices past the current row count
    /// are skipped.
    #[must_use]
    pub fn selected_rows(&self) -> Vec<TableRow> {
        self.selected
            .iter()
            .filter_map(|&idx| self.rows.get(idx).cloned())
            .collect()
    }

    /// Absolute indices of the current selection.
    #[must_use]
    pub const fn selected_indices(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    /// State of the select-all summary checkbox for the current page.
    #[must_use]
    pub fn select_all_state(&self) -> CheckState {
        let base = (self.page - 1) * self.page_size;
        let end = (base + self.page_size).min(self.rows.len());
        if base >= end {
            return CheckState::Unchecked;
        }
        let selected_on_page = (base..end).filter(|idx| self.selected.contains(idx)).count();
        if selected_on_page == end - base {
            CheckState::Checked
        } else if selected_on_page > 0 {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }

    /// Displayed pagination range, e.g. "21-25 of 25".
    ///
    /// `None` when the table is empty: the empty state replaces the
    /// pagination UI entirely.
    #[must_use]
    pub fn range_label(&self) -> Option<String> {
        if self.rows.is_empty() {
            return None;
        }
        let start = (self.page - 1) * self.page_size + 1;
        let end = (start + self.page_size - 1).min(self.rows.len());
        Some(format!("{start}-{end} of {}", self.rows.len()))
    }

    /// Get column count.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get row count.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the active sort column index.
    #[must_use]
    pub const fn sort_column(&self) -> Option<usize> {
        self.sort_column
    }

    /// Get the active sort direction.
    #[must_use]
    pub const fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    // ===== Internals =====

    fn selection_changed(&self) -> TableSelectionChanged {
        TableSelectionChanged {
            selected_rows: self.selected_rows(),
        }
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.total_pages());
    }

    /// Full row sequence with the active sort applied.
    ///
    /// A stale sort index (past the column bounds after `set_columns`) sorts
    /// nothing.
    fn sorted_rows(&self) -> Vec<TableRow> {
        let mut rows = self.rows.clone();
        if let Some(key) = self
            .sort_column
            .and_then(|idx| self.columns.get(idx))
            .map(|col| col.key.clone())
        {
            rows.sort_by(|a, b| {
                let va = a.get(&key).unwrap_or(&CellValue::Empty);
                let vb = b.get(&key).unwrap_or(&CellValue::Empty);
                let ordering = va.compare(vb);
                match self.sort_direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        rows
    }

    fn column_width(&self, index: usize) -> f32 {
        self.columns
            .get(index)
            .and_then(|col| col.width)
            .unwrap_or(DEFAULT_COL_WIDTH)
    }

    /// X offset of the first data column (after the checkbox column).
    fn data_x(&self) -> f32 {
        if self.selectable {
            self.bounds.x + CHECKBOX_COL_WIDTH
        } else {
            self.bounds.x
        }
    }

    /// Column index at an x coordinate, if any.
    fn column_at(&self, x: f32) -> Option<usize> {
        let mut left = self.data_x();
        for index in 0..self.columns.len() {
            let right = left + self.column_width(index);
            if x >= left && x < right {
                return Some(index);
            }
            left = right;
        }
        None
    }

    fn rows_top(&self) -> f32 {
        self.bounds.y + self.header_height
    }

    fn footer_top(&self) -> f32 {
        self.rows_top() + self.visible_row_count() as f32 * self.row_height
    }

    fn visible_row_count(&self) -> usize {
        let start = (self.page - 1) * self.page_size;
        self.rows.len().saturating_sub(start).min(self.page_size)
    }

    /// Hit rects for the first/prev/next/last pagination buttons.
    fn pagination_button_rects(&self) -> [Rect; 4] {
        let y = self.footer_top() + (FOOTER_HEIGHT - PAGE_BUTTON_SIZE) / 2.0;
        let step = PAGE_BUTTON_SIZE + PAGE_BUTTON_GAP;
        let last_x = self.bounds.x + self.bounds.width - 16.0 - PAGE_BUTTON_SIZE;
        [
            Rect::new(last_x - 3.0 * step, y, PAGE_BUTTON_SIZE, PAGE_BUTTON_SIZE),
            Rect::new(last_x - 2.0 * step, y, PAGE_BUTTON_SIZE, PAGE_BUTTON_SIZE),
            Rect::new(last_x - step, y, PAGE_BUTTON_SIZE, PAGE_BUTTON_SIZE),
            Rect::new(last_x, y, PAGE_BUTTON_SIZE, PAGE_BUTTON_SIZE),
        ]
    }

    fn handle_header_click(&mut self, position: Point) -> Option<Box<dyn Any + Send>> {
        if self.selectable && position.x < self.bounds.x + CHECKBOX_COL_WIDTH {
            if self.rows.is_empty() {
                return None;
            }
            let select = self.select_all_state() != CheckState::Checked;
            let msg = self.select_all_on_page(select);
            return Some(Box::new(msg));
        }
        if let Some(index) = self.column_at(position.x) {
            self.toggle_sort(index);
        }
        None
    }

    fn handle_row_click(&mut self, position: Point) -> Option<Box<dyn Any + Send>> {
        let row_index = ((position.y - self.rows_top()) / self.row_height) as usize;
        if row_index >= self.visible_row_count() {
            return None;
        }
        if self.selectable && position.x < self.bounds.x + CHECKBOX_COL_WIDTH {
            let absolute = (self.page - 1) * self.page_size + row_index;
            let selected = !self.selected.contains(&absolute);
            let msg = self.select_row(row_index, selected)?;
            return Some(Box::new(msg));
        }
        None
    }

    fn handle_footer_click(&mut self, position: Point) -> Option<Box<dyn Any + Send>> {
        let targets = [
            1,
            self.page.saturating_sub(1),
            self.page + 1,
            self.total_pages(),
        ];
        for (rect, target) in self.pagination_button_rects().iter().zip(targets) {
            if rect.contains_point(&position) {
                let msg = self.go_to_page(target)?;
                return Some(Box::new(msg));
            }
        }
        None
    }

    fn paint_checkbox(&self, canvas: &mut dyn Canvas, center: Point, state: CheckState) {
        let half = 9.0;
        let rect = Rect::new(center.x - half, center.y - half, 2.0 * half, 2.0 * half);
        match state {
            CheckState::Unchecked => canvas.stroke_rect(rect, self.header_text_color, 2.0),
            CheckState::Checked | CheckState::Indeterminate => {
                canvas.fill_rect(rect, Color::new(0.1, 0.46, 0.82, 1.0));
            }
        }
    }
}

impl Widget for DataTable {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let mut width: f32 = (0..self.columns.len()).map(|i| self.column_width(i)).sum();
        if self.selectable {
            width += CHECKBOX_COL_WIDTH;
        }
        let mut height = self.header_height + self.visible_row_count() as f32 * self.row_height;
        if self.rows.is_empty() {
            height += self.row_height; // empty-state message row
        } else {
            height += FOOTER_HEIGHT;
        }
        constraints.constrain(Size::new(width.max(DEFAULT_COL_WIDTH), height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        // Header band
        let header_rect = Rect::new(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            self.header_height,
        );
        canvas.fill_rect(header_rect, self.header_bg);

        let header_center_y = self.bounds.y + self.header_height / 2.0;
        if self.selectable {
            self.paint_checkbox(
                canvas,
                Point::new(self.bounds.x + CHECKBOX_COL_WIDTH / 2.0, header_center_y),
                self.select_all_state(),
            );
        }

        let header_style = TextStyle {
            size: 12.0,
            color: self.header_text_color,
            weight: FontWeight::Medium,
            ..TextStyle::default()
        };
        let mut x = self.data_x();
        for (index, col) in self.columns.iter().enumerate() {
            let mut label = col.label.clone();
            if self.sort_column == Some(index) {
                label.push_str(match self.sort_direction {
                    SortDirection::Ascending => " \u{25b2}",
                    SortDirection::Descending => " \u{25bc}",
                });
            }
            canvas.draw_text(&label, Point::new(x + 16.0, header_center_y), &header_style);
            x += self.column_width(index);
        }

        // Data rows (or the empty state)
        let visible = self.visible_slice();
        let cell_style = TextStyle {
            size: 14.0,
            color: self.text_color,
            ..TextStyle::default()
        };
        if visible.is_empty() {
            canvas.draw_text(
                "No data available",
                Point::new(
                    self.bounds.center().x,
                    self.rows_top() + self.row_height / 2.0,
                ),
                &cell_style,
            );
        }
        let base = (self.page - 1) * self.page_size;
        for (row_index, row) in visible.iter().enumerate() {
            let top = self.rows_top() + row_index as f32 * self.row_height;
            let center_y = top + self.row_height / 2.0;
            let absolute = base + row_index;
            let is_selected = self.selected.contains(&absolute);

            let row_rect = Rect::new(self.bounds.x, top, self.bounds.width, self.row_height);
            canvas.fill_rect(
                row_rect,
                if is_selected {
                    self.selected_bg
                } else {
                    self.row_bg
                },
            );

            if self.selectable {
                self.paint_checkbox(
                    canvas,
                    Point::new(self.bounds.x + CHECKBOX_COL_WIDTH / 2.0, center_y),
                    if is_selected {
                        CheckState::Checked
                    } else {
                        CheckState::Unchecked
                    },
                );
            }

            let mut x = self.data_x();
            for (index, col) in self.columns.iter().enumerate() {
                let value = row.get(&col.key).unwrap_or(&CellValue::Empty);
                let text = col
                    .formatter
                    .map_or_else(|| value.display(), |format| format(value, row));
                canvas.draw_text(&text, Point::new(x + 16.0, center_y), &cell_style);
                x += self.column_width(index);
            }

            // Row divider
            canvas.draw_line(
                Point::new(self.bounds.x, top + self.row_height),
                Point::new(self.bounds.x + self.bounds.width, top + self.row_height),
                self.divider_color,
                1.0,
            );
        }

        // Pagination footer, suppressed entirely for an empty table
        if let Some(label) = self.range_label() {
            let footer_center_y = self.footer_top() + FOOTER_HEIGHT / 2.0;
            let buttons = self.pagination_button_rects();
            canvas.draw_text(
                &label,
                Point::new(buttons[0].x - 96.0, footer_center_y),
                &header_style,
            );
            let glyphs = ["\u{27ea}", "\u{27e8}", "\u{27e9}", "\u{27eb}"];
            for (rect, glyph) in buttons.iter().zip(glyphs) {
                canvas.draw_text(glyph, rect.center(), &header_style);
            }
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let Event::MouseDown {
            position,
            button: MouseButton::Left,
        } = event
        else {
            return None;
        };
        if !self.bounds.contains_point(position) {
            return None;
        }
        if position.y < self.rows_top() {
            self.handle_header_click(*position)
        } else if position.y < self.footer_top() {
            self.handle_row_click(*position)
        } else if !self.rows.is_empty() && position.y < self.footer_top() + FOOTER_HEIGHT {
            self.handle_footer_click(*position)
        } else {
            None
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Table
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
