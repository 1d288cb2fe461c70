//! Calendar screen logic shared by the student and doctor calendars.
//!
//! A `CalendarService` is created when a calendar screen mounts and dropped
//! with it. It owns the view state and the current appointment snapshot;
//! the rendering surface only reads [`CalendarMonth`] values and calls the
//! navigation and selection transitions.

use chrono::{Local, NaiveDate};
use shared::{AppointmentRecord, CalendarMonth, ClassifiedCell, MonthDirection};
use std::sync::Arc;

use super::appointment_lookup::AppointmentIndex;
use super::calendar::{build_month_grid, first_weekday, format_month_year, format_selected_heading};
use super::calendar_view::CalendarViewState;
use super::day_matching::{is_selected, is_today_at};
use super::search::filter_appointments;
use crate::config::ScreenConfig;
use crate::storage::AppointmentSource;

#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("Failed to load appointments: {0}")]
    Source(#[from] anyhow::Error),
}

pub struct CalendarService {
    config: ScreenConfig,
    source: Arc<dyn AppointmentSource>,
    view: CalendarViewState,
    index: AppointmentIndex,
}

impl CalendarService {
    /// Mount a screen on the local clock's today; no appointments are loaded
    /// until [`CalendarService::refresh`] is called
    pub fn new(config: ScreenConfig, source: Arc<dyn AppointmentSource>) -> Self {
        Self::new_at(config, source, Local::now().date_naive())
    }

    pub fn new_at(config: ScreenConfig, source: Arc<dyn AppointmentSource>, today: NaiveDate) -> Self {
        log::info!("🗓️ Mounting {:?} calendar on {}", config.role, today);
        Self {
            config,
            source,
            view: CalendarViewState::new(today),
            index: AppointmentIndex::default(),
        }
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn view(&self) -> &CalendarViewState {
        &self.view
    }

    pub fn appointments(&self) -> &[AppointmentRecord] {
        self.index.records()
    }

    /// Replace the appointment snapshot with a fresh one from the source.
    ///
    /// On failure the previous snapshot stays in place.
    pub fn refresh(&mut self) -> Result<usize, CalendarError> {
        let records = self.source.list_appointments().map_err(|e| {
            log::error!("❌ Failed to refresh appointments: {}", e);
            CalendarError::Source(e)
        })?;
        self.index = AppointmentIndex::new(records);
        log::info!("Loaded {} appointments", self.index.len());
        Ok(self.index.len())
    }

    pub fn navigate_month(&mut self, direction: MonthDirection) -> NaiveDate {
        self.view.navigate_month_with(direction, self.config.rollover)
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.view.select_date(date);
    }

    /// Displayed month with every cell classified against the local today
    pub fn month_view(&self) -> CalendarMonth {
        self.month_view_at(Local::now().date_naive())
    }

    /// Displayed month with every cell classified against `today`
    pub fn month_view_at(&self, today: NaiveDate) -> CalendarMonth {
        let (year, month) = self.view.displayed_month();
        let cells = build_month_grid(self.view.current_month())
            .into_iter()
            .map(|cell| ClassifiedCell {
                date: cell.date,
                day_type: cell.day_type(),
                is_today: is_today_at(&cell, today),
                is_selected: is_selected(&cell, &self.view),
                has_appointment: self.index.has_appointment(&cell),
            })
            .collect();

        CalendarMonth {
            month,
            year,
            title: format_month_year(self.view.current_month()),
            cells,
            first_day_of_week: first_weekday(year, month),
        }
    }

    /// Heading for the appointment list, e.g. "Thursday, October 17"
    pub fn selected_heading(&self) -> String {
        format_selected_heading(self.view.selected_date())
    }

    /// Appointments on the selected day, in source order
    pub fn selected_appointments(&self) -> Vec<&AppointmentRecord> {
        self.index.appointments_for(&self.view.selected_date())
    }

    /// Selected-day appointments narrowed by the search box
    pub fn search(&self, query: &str) -> Vec<&AppointmentRecord> {
        if !self.config.search_enabled() && !query.trim().is_empty() {
            log::debug!("Search ignored on {:?} calendar", self.config.role);
            return self.selected_appointments();
        }
        filter_appointments(self.selected_appointments(), query)
    }
}
