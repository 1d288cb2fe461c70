//! # Calendar View State
//!
//! The two pieces of mutable state a calendar screen owns: the month being
//! displayed and the selected day. They only change through
//! [`CalendarViewState::navigate_month`] and
//! [`CalendarViewState::select_date`], and neither transition touches the
//! other field, so a selection survives paging through months.

use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::MonthDirection;

use super::calendar::{days_in_month, next_month, previous_month};

/// What happens to a day-of-month that does not exist in the target month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RolloverPolicy {
    /// Stay in the target month on its last day (Jan 31 -> Feb 28)
    #[default]
    Clamp,
    /// Overflow into the following month like native date arithmetic
    /// (Jan 31 -> Mar 3, or Mar 2 in a leap year)
    RollForward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarViewState {
    /// Any date inside the displayed month
    current_month: NaiveDate,
    selected_date: NaiveDate,
}

impl CalendarViewState {
    /// Fresh state for a screen mounted on `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            current_month: today,
            selected_date: today,
        }
    }

    /// Fresh state using the local clock
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn current_month(&self) -> NaiveDate {
        self.current_month
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// (year, month) of the displayed month
    pub fn displayed_month(&self) -> (i32, u32) {
        (self.current_month.year(), self.current_month.month())
    }

    /// Move to the adjacent month using the default rollover policy
    pub fn navigate_month(&mut self, direction: MonthDirection) -> NaiveDate {
        self.navigate_month_with(direction, RolloverPolicy::default())
    }

    /// Move to the adjacent month, keeping the day-of-month when it exists
    pub fn navigate_month_with(&mut self, direction: MonthDirection, policy: RolloverPolicy) -> NaiveDate {
        self.current_month = shift_month(self.current_month, direction, policy);
        log::info!(
            "📅 Navigated {:?} to {}/{}",
            direction,
            self.current_month.month(),
            self.current_month.year()
        );
        self.current_month
    }

    /// Select a day; the displayed month is left alone
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        log::debug!("📅 Selected {}", date);
    }

    /// Whether the selected day lies in the displayed month
    pub fn selection_visible(&self) -> bool {
        self.displayed_month() == (self.selected_date.year(), self.selected_date.month())
    }
}

/// Shift `date` one month in `direction`, resolving missing days per `policy`.
///
/// Dates at the edge of the representable range are returned unchanged.
pub fn shift_month(date: NaiveDate, direction: MonthDirection, policy: RolloverPolicy) -> NaiveDate {
    let (year, month) = match direction {
        MonthDirection::Previous => previous_month(date.year(), date.month()),
        MonthDirection::Next => next_month(date.year(), date.month()),
    };
    let day = date.day();
    let last_day = days_in_month(year, month);

    let shifted = if day <= last_day {
        NaiveDate::from_ymd_opt(year, month, day)
    } else {
        let end_of_month = NaiveDate::from_ymd_opt(year, month, last_day);
        match policy {
            RolloverPolicy::Clamp => end_of_month,
            RolloverPolicy::RollForward => {
                end_of_month.and_then(|end| end.checked_add_days(Days::new(u64::from(day - last_day))))
            }
        }
    };

    shifted.unwrap_or(date)
}
