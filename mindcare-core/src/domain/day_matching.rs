//! Day-granularity date comparison.
//!
//! Every "same calendar day" question in the calendar (today highlighting,
//! selection, appointment markers) goes through [`is_same_day`], so the
//! grid and the appointment list can never disagree about which day a
//! value belongs to.
//!
//! Values are reduced to a [`DayKey`], their calendar day with the
//! time-of-day discarded. Anything that does not describe a valid calendar
//! date has no key and never matches, not even itself.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use shared::{AppointmentRecord, CalendarCell};

use super::calendar_view::CalendarViewState;

/// Naive date-time layouts accepted when a value is not RFC 3339
const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Something that can be bucketed into a calendar day
pub trait DayKey {
    /// The calendar day of this value, or `None` when it is not a valid date
    fn day_key(&self) -> Option<NaiveDate>;
}

impl DayKey for NaiveDate {
    fn day_key(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

impl DayKey for NaiveDateTime {
    fn day_key(&self) -> Option<NaiveDate> {
        Some(self.date())
    }
}

/// Uses the calendar day in the value's own offset.
impl<Tz: TimeZone> DayKey for DateTime<Tz> {
    fn day_key(&self) -> Option<NaiveDate> {
        Some(self.date_naive())
    }
}

impl DayKey for str {
    fn day_key(&self) -> Option<NaiveDate> {
        parse_day(self)
    }
}

impl DayKey for String {
    fn day_key(&self) -> Option<NaiveDate> {
        parse_day(self)
    }
}

impl<T: DayKey + ?Sized> DayKey for &T {
    fn day_key(&self) -> Option<NaiveDate> {
        (**self).day_key()
    }
}

impl<T: DayKey> DayKey for Option<T> {
    fn day_key(&self) -> Option<NaiveDate> {
        self.as_ref().and_then(DayKey::day_key)
    }
}

impl DayKey for AppointmentRecord {
    fn day_key(&self) -> Option<NaiveDate> {
        parse_day(&self.date)
    }
}

impl DayKey for CalendarCell {
    fn day_key(&self) -> Option<NaiveDate> {
        self.date
    }
}

/// Parse an ISO 8601 date or date-time string into its calendar day.
///
/// Accepts "2024-10-17", "2024-10-17T16:00:00+07:00" (the day is taken in
/// the written offset) and naive date-times such as "2024-10-17T16:00".
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|datetime| datetime.date())
}

/// True iff both values fall on the same year, month and day
pub fn is_same_day<A, B>(a: &A, b: &B) -> bool
where
    A: DayKey + ?Sized,
    B: DayKey + ?Sized,
{
    match (a.day_key(), b.day_key()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Whether `date` is today on the local clock
pub fn is_today<D: DayKey + ?Sized>(date: &D) -> bool {
    is_today_at(date, Local::now().date_naive())
}

/// Whether `date` falls on `today`
pub fn is_today_at<D: DayKey + ?Sized>(date: &D, today: NaiveDate) -> bool {
    is_same_day(date, &today)
}

/// Whether `date` is the selected day of the view
pub fn is_selected<D: DayKey + ?Sized>(date: &D, state: &CalendarViewState) -> bool {
    is_same_day(date, &state.selected_date())
}
