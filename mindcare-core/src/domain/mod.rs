//! Domain logic for the calendar screens.
//!
//! Everything here is synchronous and UI-agnostic: the rendering surface
//! asks for data and reports user actions, nothing in this module draws.

pub mod appointment_lookup;
pub mod appointment_review;
pub mod calendar;
pub mod calendar_service;
pub mod calendar_view;
pub mod day_matching;
pub mod search;

pub use appointment_lookup::{appointments_for, has_appointment, AppointmentIndex};
pub use appointment_review::{AppointmentReview, ReviewError, ReviewPrompt};
pub use calendar::build_month_grid;
pub use calendar_service::{CalendarError, CalendarService};
pub use calendar_view::{CalendarViewState, RolloverPolicy};
pub use day_matching::{is_same_day, is_selected, is_today, is_today_at, DayKey};
pub use search::{filter_appointments, matches_query};
