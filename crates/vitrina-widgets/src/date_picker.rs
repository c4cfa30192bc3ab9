//! Date picker widget with a month calendar grid.
//!
//! The calendar is always a 42-cell (6 x 7, Sunday-first) grid: leading cells
//! come from the previous month based on the weekday of the 1st, trailing
//! cells fill out the final week from the next month. Cells outside the
//! optional min/max bounds are disabled and ignore clicks.

use vitrina_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Key, MouseButton, Point, Rect, Size, TextStyle, TypeId,
    Widget,
};

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Cells in the calendar grid (6 weeks of 7 days).
pub const GRID_CELLS: usize = 42;

/// Height of the month header band.
const HEADER_HEIGHT: f32 = 40.0;
/// Height of the weekday label row.
const WEEKDAY_ROW_HEIGHT: f32 = 24.0;

/// One cell of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The civil date of this cell
    pub date: NaiveDate,
    /// Whether the cell belongs to the visible month
    pub in_month: bool,
    /// Whether the cell is the configured "today"
    pub today: bool,
    /// Whether the cell is the selected date
    pub selected: bool,
    /// Whether the cell is outside the min/max bounds
    pub disabled: bool,
}

/// Message emitted when a date is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSelected {
    /// The picked date
    pub date: NaiveDate,
}

/// Message emitted when the visible month changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthChanged {
    /// First day of the newly visible month
    pub month: NaiveDate,
}

/// Date picker widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatePicker {
    /// Selected date, if any
    selected: Option<NaiveDate>,
    /// First day of the visible month
    visible_month: NaiveDate,
    /// Lower bound (inclusive)
    min: Option<NaiveDate>,
    /// Upper bound (inclusive)
    max: Option<NaiveDate>,
    /// The date highlighted as today, if configured
    today: Option<NaiveDate>,
    /// Whether the whole picker is disabled
    disabled: bool,
    /// Accent color for the selected cell
    accent_color: Color,
    /// Text color
    text_color: Color,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new()
    }
}

/// Fallback month shown before any date is supplied.
fn default_month() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN)
}

impl DatePicker {
    /// Create a date picker with no selection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected: None,
            visible_month: default_month(),
            min: None,
            max: None,
            today: None,
            disabled: false,
            accent_color: Color::new(0.1, 0.46, 0.82, 1.0),
            text_color: Color::new(0.0, 0.0, 0.0, 0.87),
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set the selected date; the visible month follows it.
    #[must_use]
    pub fn value(mut self, date: NaiveDate) -> Self {
        self.selected = Some(date);
        self.visible_month = first_of_month(date);
        self
    }

    /// Set the selected date from an ISO-8601 (`YYYY-MM-DD`) string.
    ///
    /// Invalid strings are treated as no value at all.
    #[must_use]
    pub fn value_str(self, value: &str) -> Self {
        match parse_iso(value) {
            Some(date) => self.value(date),
            None => self,
        }
    }

    /// Set the inclusive lower bound. Invalid strings via [`parse_iso`]
    /// upstream are simply absent.
    #[must_use]
    pub const fn min(mut self, min: NaiveDate) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the inclusive upper bound.
    #[must_use]
    pub const fn max(mut self, max: NaiveDate) -> Self {
        self.max = Some(max);
        self
    }

    /// Set the date highlighted as today.
    #[must_use]
    pub fn today(mut self, today: NaiveDate) -> Self {
        if self.selected.is_none() {
            self.visible_month = first_of_month(today);
        }
        self.today = Some(today);
        self
    }

    /// Disable the picker.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
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

    /// Get the selected date.
    #[must_use]
    pub const fn selected_date(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Selected date as an ISO-8601 string, empty when unset.
    #[must_use]
    pub fn value_iso(&self) -> String {
        self.selected
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// First day of the visible month.
    #[must_use]
    pub const fn visible_month(&self) -> NaiveDate {
        self.visible_month
    }

    /// Whether a date falls outside the configured bounds.
    #[must_use]
    pub fn is_out_of_bounds(&self, date: NaiveDate) -> bool {
        self.min.is_some_and(|min| date < min) || self.max.is_some_and(|max| date > max)
    }

    /// Build the 42-cell calendar grid for the visible month.
    #[must_use]
    pub fn calendar_grid(&self) -> Vec<CalendarDay> {
        let first = self.visible_month;
        let lead = first.weekday().num_days_from_sunday();
        let start = first
            .checked_sub_days(Days::new(u64::from(lead)))
            .unwrap_or(first);

        (0..GRID_CELLS)
            .filter_map(|offset| start.checked_add_days(Days::new(offset as u64)))
            .map(|date| CalendarDay {
                date,
                in_month: date.year() == first.year() && date.month() == first.month(),
                today: self.today == Some(date),
                selected: self.selected == Some(date),
                disabled: self.is_out_of_bounds(date),
            })
            .collect()
    }

    /// Pick a date. Out-of-bounds dates and a disabled picker are silent
    /// no-ops. Re-picking the selected date still notifies, matching
    /// checkbox-style idempotent interactions elsewhere in the catalog.
    pub fn select_date(&mut self, date: NaiveDate) -> Option<DateSelected> {
        if self.disabled || self.is_out_of_bounds(date) {
            return None;
        }
        self.selected = Some(date);
        self.visible_month = first_of_month(date);
        Some(DateSelected { date })
    }

    /// Show the next month.
    pub fn next_month(&mut self) -> Option<MonthChanged> {
        self.shift_month(1)
    }

    /// Show the previous month.
    pub fn previous_month(&mut self) -> Option<MonthChanged> {
        self.shift_month(-1)
    }

    fn shift_month(&mut self, delta: i32) -> Option<MonthChanged> {
        if self.disabled {
            return None;
        }
        let shifted = if delta >= 0 {
            self.visible_month.checked_add_months(Months::new(1))
        } else {
            self.visible_month.checked_sub_months(Months::new(1))
        }?;
        self.visible_month = shifted;
        Some(MonthChanged { month: shifted })
    }

    fn grid_top(&self) -> f32 {
        self.bounds.y + HEADER_HEIGHT + WEEKDAY_ROW_HEIGHT
    }

    fn cell_size(&self) -> Size {
        Size::new(
            self.bounds.width / 7.0,
            ((self.bounds.height - HEADER_HEIGHT - WEEKDAY_ROW_HEIGHT) / 6.0).max(1.0),
        )
    }

    /// Grid cell under a point, if any.
    fn cell_at(&self, position: Point) -> Option<CalendarDay> {
        if position.y < self.grid_top() {
            return None;
        }
        let cell = self.cell_size();
        let col = ((position.x - self.bounds.x) / cell.width) as usize;
        let row = ((position.y - self.grid_top()) / cell.height) as usize;
        if col >= 7 || row >= 6 {
            return None;
        }
        self.calendar_grid().get(row * 7 + col).copied()
    }
}

/// Parse an ISO-8601 (`YYYY-MM-DD`) date, treating invalid input as absent.
#[must_use]
pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

impl Widget for DatePicker {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(
            280.0,
            HEADER_HEIGHT + WEEKDAY_ROW_HEIGHT + 6.0 * 36.0,
        ))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let text_style = TextStyle {
            size: 14.0,
            color: self.text_color,
            ..TextStyle::default()
        };
        let muted_style = TextStyle {
            color: self.text_color.with_alpha(0.38),
            ..text_style.clone()
        };

        // Month header with navigation arrows
        canvas.draw_text(
            "\u{2039}",
            Point::new(self.bounds.x + 16.0, self.bounds.y + HEADER_HEIGHT / 2.0),
            &text_style,
        );
        canvas.draw_text(
            &self.visible_month.format("%B %Y").to_string(),
            Point::new(self.bounds.center().x, self.bounds.y + HEADER_HEIGHT / 2.0),
            &text_style,
        );
        canvas.draw_text(
            "\u{203a}",
            Point::new(
                self.bounds.x + self.bounds.width - 16.0,
                self.bounds.y + HEADER_HEIGHT / 2.0,
            ),
            &text_style,
        );

        // Weekday labels
        let cell = self.cell_size();
        for (index, label) in ["S", "M", "T", "W", "T", "F", "S"].iter().enumerate() {
            canvas.draw_text(
                label,
                Point::new(
                    self.bounds.x + (index as f32 + 0.5) * cell.width,
                    self.bounds.y + HEADER_HEIGHT + WEEKDAY_ROW_HEIGHT / 2.0,
                ),
                &muted_style,
            );
        }

        // Date cells
        for (index, day) in self.calendar_grid().iter().enumerate() {
            let col = index % 7;
            let row = index / 7;
            let center = Point::new(
                self.bounds.x + (col as f32 + 0.5) * cell.width,
                self.grid_top() + (row as f32 + 0.5) * cell.height,
            );
            if day.selected {
                canvas.fill_circle(center, cell.height.min(cell.width) / 2.0, self.accent_color);
            } else if day.today {
                canvas.stroke_circle(
                    center,
                    cell.height.min(cell.width) / 2.0,
                    self.accent_color,
                    1.0,
                );
            }
            let style = if day.selected {
                TextStyle {
                    color: Color::WHITE,
                    ..text_style.clone()
                }
            } else if day.disabled || !day.in_month {
                muted_style.clone()
            } else {
                text_style.clone()
            };
            canvas.draw_text(&day.date.day().to_string(), center, &style);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.disabled {
            return None;
        }
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } if self.bounds.contains_point(position) => {
                if position.y < self.bounds.y + HEADER_HEIGHT {
                    let msg = if position.x < self.bounds.x + self.bounds.width / 2.0 {
                        self.previous_month()
                    } else {
                        self.next_month()
                    };
                    return msg.map(|m| Box::new(m) as Box<dyn Any + Send>);
                }
                let day = self.cell_at(*position)?;
                if day.disabled {
                    return None;
                }
                self.select_date(day.date)
                    .map(|msg| Box::new(msg) as Box<dyn Any + Send>)
            }
            Event::KeyDown { key: Key::PageUp } => self
                .previous_month()
                .map(|msg| Box::new(msg) as Box<dyn Any + Send>),
            Event::KeyDown {
                key: Key::PageDown,
            } => self
                .next_month()
                .map(|msg| Box::new(msg) as Box<dyn Any + Send>),
            _ => None,
        }
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Grid
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso() {
        assert_eq!(parse_iso("2024-02-29"), Some(date(2024, 2, 29)));
        assert_eq!(parse_iso(" 2024-01-05 "), Some(date(2024, 1, 5)));
        assert!(parse_iso("2023-02-29").is_none()); // not a leap year
        assert!(parse_iso("not-a-date").is_none());
        assert!(parse_iso("").is_none());
    }

    #[test]
    fn test_grid_is_always_42_cells() {
        let picker = DatePicker::new().value(date(2024, 2, 15));
        assert_eq!(picker.calendar_grid().len(), GRID_CELLS);
    }

    #[test]
    fn test_grid_leading_days_from_previous_month() {
        // March 2024 starts on a Friday (weekday index 5 from Sunday).
        let picker = DatePicker::new().value(date(2024, 3, 10));
        let grid = picker.calendar_grid();
        assert_eq!(grid[0].date, date(2024, 2, 25));
        assert!(!grid[0].in_month);
        assert_eq!(grid[5].date, date(2024, 3, 1));
        assert!(grid[5].in_month);
    }

    #[test]
    fn test_grid_month_starting_sunday_has_no_lead() {
        // September 2024 starts on a Sunday.
        let picker = DatePicker::new().value(date(2024, 9, 15));
        let grid = picker.calendar_grid();
        assert_eq!(grid[0].date, date(2024, 9, 1));
        assert!(grid[0].in_month);
    }

    #[test]
    fn test_grid_trailing_days_from_next_month() {
        let picker = DatePicker::new().value(date(2024, 3, 10));
        let grid = picker.calendar_grid();
        let last = grid[GRID_CELLS - 1];
        assert_eq!(last.date, date(2024, 4, 6));
        assert!(!last.in_month);
    }

    #[test]
    fn test_grid_flags_today_and_selected() {
        let picker = DatePicker::new()
            .value(date(2024, 3, 10))
            .today(date(2024, 3, 12));
        let grid = picker.calendar_grid();
        let selected: Vec<_> = grid.iter().filter(|d| d.selected).collect();
        let today: Vec<_> = grid.iter().filter(|d| d.today).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, date(2024, 3, 10));
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, date(2024, 3, 12));
    }

    #[test]
    fn test_bounds_disable_cells() {
        let picker = DatePicker::new()
            .value(date(2024, 3, 10))
            .min(date(2024, 3, 5))
            .max(date(2024, 3, 20));
        let grid = picker.calendar_grid();
        assert!(grid.iter().any(|d| d.disabled));
        assert!(grid
            .iter()
            .filter(|d| !d.disabled)
            .all(|d| d.date >= date(2024, 3, 5) && d.date <= date(2024, 3, 20)));
    }

    #[test]
    fn test_select_date_out_of_bounds_is_noop() {
        let mut picker = DatePicker::new()
            .value(date(2024, 3, 10))
            .min(date(2024, 3, 5));
        assert!(picker.select_date(date(2024, 3, 1)).is_none());
        assert_eq!(picker.selected_date(), Some(date(2024, 3, 10)));
    }

    #[test]
    fn test_select_date_updates_visible_month() {
        let mut picker = DatePicker::new().value(date(2024, 3, 10));
        let msg = picker.select_date(date(2024, 5, 1)).unwrap();
        assert_eq!(msg.date, date(2024, 5, 1));
        assert_eq!(picker.visible_month(), date(2024, 5, 1));
    }

    #[test]
    fn test_month_navigation() {
        let mut picker = DatePicker::new().value(date(2024, 1, 31));
        let msg = picker.next_month().unwrap();
        assert_eq!(msg.month, date(2024, 2, 1));
        picker.previous_month();
        assert_eq!(picker.visible_month(), date(2024, 1, 1));
    }

    #[test]
    fn test_disabled_picker_ignores_selection() {
        let mut picker = DatePicker::new().value(date(2024, 3, 10)).disabled(true);
        assert!(picker.select_date(date(2024, 3, 11)).is_none());
        assert!(picker.next_month().is_none());
    }

    #[test]
    fn test_value_str_invalid_is_absent() {
        let picker = DatePicker::new().value_str("garbage");
        assert!(picker.selected_date().is_none());
        assert_eq!(picker.value_iso(), "");
    }

    #[test]
    fn test_value_iso_round_trip() {
        let picker = DatePicker::new().value_str("2024-07-04");
        assert_eq!(picker.value_iso(), "2024-07-04");
    }

    #[test]
    fn test_click_selects_cell() {
        let mut picker = DatePicker::new().value(date(2024, 9, 15));
        picker.layout(Rect::new(0.0, 0.0, 280.0, 280.0));
        // September 2024 starts on Sunday, so cell (0,0) is Sep 1.
        let msg = picker.event(&Event::MouseDown {
            position: Point::new(10.0, 70.0),
            button: MouseButton::Left,
        });
        let selected = msg.unwrap().downcast::<DateSelected>().unwrap();
        assert_eq!(selected.date, date(2024, 9, 1));
    }

    #[test]
    fn test_header_click_navigates() {
        let mut picker = DatePicker::new().value(date(2024, 9, 15));
        picker.layout(Rect::new(0.0, 0.0, 280.0, 280.0));
        let msg = picker.event(&Event::MouseDown {
            position: Point::new(270.0, 20.0),
            button: MouseButton::Left,
        });
        let changed = msg.unwrap().downcast::<MonthChanged>().unwrap();
        assert_eq!(changed.month, date(2024, 10, 1));
    }
}
