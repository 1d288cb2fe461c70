//! Appointment lookup by calendar day.
//!
//! The free functions scan the record list on every call. [`AppointmentIndex`]
//! buckets one snapshot of records by day up front and answers the same
//! questions with the same results.

use chrono::NaiveDate;
use shared::AppointmentRecord;
use std::collections::HashMap;

use super::day_matching::{is_same_day, DayKey};

/// True iff any record falls on the same day as `date`
pub fn has_appointment<D: DayKey + ?Sized>(date: &D, records: &[AppointmentRecord]) -> bool {
    records.iter().any(|record| is_same_day(record, date))
}

/// All records on the same day as `date`, in their original order
pub fn appointments_for<'a, D: DayKey + ?Sized>(
    date: &D,
    records: &'a [AppointmentRecord],
) -> Vec<&'a AppointmentRecord> {
    records
        .iter()
        .filter(|record| is_same_day(*record, date))
        .collect()
}

/// A snapshot of appointment records grouped by calendar day
#[derive(Debug, Clone, Default)]
pub struct AppointmentIndex {
    records: Vec<AppointmentRecord>,
    /// Positions into `records`, ascending
    by_day: HashMap<NaiveDate, Vec<usize>>,
}

impl AppointmentIndex {
    pub fn new(records: Vec<AppointmentRecord>) -> Self {
        let mut by_day: HashMap<NaiveDate, Vec<usize>> = HashMap::new();

        for (position, record) in records.iter().enumerate() {
            match record.day_key() {
                Some(day) => by_day.entry(day).or_default().push(position),
                None => log::warn!(
                    "Appointment {} has an unreadable date {:?}; it will not be shown",
                    record.id,
                    record.date
                ),
            }
        }

        log::debug!("Indexed {} appointments over {} days", records.len(), by_day.len());
        Self { records, by_day }
    }

    pub fn records(&self) -> &[AppointmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_appointment<D: DayKey + ?Sized>(&self, date: &D) -> bool {
        date.day_key().is_some_and(|day| self.by_day.contains_key(&day))
    }

    pub fn appointments_for<D: DayKey + ?Sized>(&self, date: &D) -> Vec<&AppointmentRecord> {
        date.day_key()
            .and_then(|day| self.by_day.get(&day))
            .map(|positions| {
                positions
                    .iter()
                    .map(|&position| &self.records[position])
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    }

    /// Days in the given month that have at least one appointment, ascending
    pub fn days_in_month_with_appointments(&self, year: i32, month: u32) -> Vec<NaiveDate> {
        use chrono::Datelike;

        let mut days: Vec<NaiveDate> = self
            .by_day
            .keys()
            .filter(|day| day.year() == year && day.month() == month)
            .copied()
            .collect();
        days.sort();
        days
    }
}
