//! Widget implementations for the Vitrina UI catalog.

pub mod button;
pub mod checkbox;
pub mod chip;
pub mod data_table;
pub mod date_picker;
pub mod expansion_panels;
pub mod progress;
pub mod rating;
pub mod slider;
pub mod stepper;

pub use button::{Button, ButtonClicked, ButtonVariant};
pub use checkbox::{CheckState, Checkbox, CheckboxChanged};
pub use chip::{Chip, ChipClicked, ChipClosed};
pub use data_table::{
    CellValue, DataTable, SortDirection, TableColumn, TablePageChanged, TableRow,
    TableSelectionChanged, TextAlign,
};
pub use date_picker::{CalendarDay, DatePicker, DateSelected, MonthChanged};
pub use expansion_panels::{ExpansionPanels, Panel, PanelToggled};
pub use progress::{ProgressIndicator, ProgressVariant};
pub use rating::{Rating, RatingChanged, StarFill};
pub use slider::{Slider, SliderChanged};
pub use stepper::{Step, StepChanged, Stepper, StepperCompleted};
