//! Types and view-model logic shared between the SproutSphere backend and
//! the browser frontend.

pub mod api;
pub mod calendar;
pub mod events;
pub mod models;
pub mod programs;

pub use calendar::{CalendarView, Selection, YearMonth};
pub use events::{normalize_event, normalize_events, DisplayEvent, InvalidDateError, RawEventRecord};
pub use models::EventStatus;
