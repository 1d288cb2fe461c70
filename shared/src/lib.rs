use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single appointment as handed to the calendar by a data source.
///
/// Only `id`, `date` and `time` are read by the calendar itself; `details`
/// is carried through untouched for the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    /// Render key, unique per record
    pub id: String,
    /// Calendar day of the appointment, ISO 8601 date or date-time
    /// (e.g. "2024-10-17" or "2024-10-17T16:00:00+07:00")
    pub date: String,
    /// Free-form display time, e.g. "09:00"
    pub time: String,
    pub details: AppointmentDetails,
}

/// Screen-specific payload of an appointment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppointmentDetails {
    /// Appointment as seen from the student calendar
    Student {
        doctor_name: String,
        visit: VisitKind,
        status: AppointmentStatus,
    },
    /// Appointment as seen from the doctor calendar
    Doctor {
        patient: String,
        mode: SessionMode,
        /// Display string, e.g. "30 minutes"
        duration: String,
        tags: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitKind {
    InPerson,
    VideoCall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionMode {
    Offline,
    Online,
}

/// Review status of an appointment request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Rejected,
}

/// Which calendar screen a component is mounted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenRole {
    Student,
    Doctor,
}

/// Direction of a month navigation action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthDirection {
    Previous,
    Next,
}

/// One position of a month grid: a real date or a leading blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    /// `None` for the blanks before the month's first weekday
    pub date: Option<NaiveDate>,
}

/// Type of calendar cell for explicit rendering logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarDayType {
    /// Empty padding cell before the start of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// A grid cell together with the flags the rendering surface needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedCell {
    pub date: Option<NaiveDate>,
    pub day_type: CalendarDayType,
    pub is_today: bool,
    pub is_selected: bool,
    pub has_appointment: bool,
}

/// A month of classified cells ready to be drawn in rows of seven
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    /// e.g. "October 2024"
    pub title: String,
    pub cells: Vec<ClassifiedCell>,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
}

impl AppointmentDetails {
    /// Name of the other party: the doctor for students, the patient for doctors
    pub fn counterpart_name(&self) -> &str {
        match self {
            AppointmentDetails::Student { doctor_name, .. } => doctor_name,
            AppointmentDetails::Doctor { patient, .. } => patient,
        }
    }

    pub fn tags(&self) -> &[String] {
        match self {
            AppointmentDetails::Student { .. } => &[],
            AppointmentDetails::Doctor { tags, .. } => tags,
        }
    }
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Rejected => "Rejected",
        }
    }

    /// Confirmed and rejected appointments cannot change again
    pub fn is_final(&self) -> bool {
        !matches!(self, AppointmentStatus::Pending)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl VisitKind {
    pub fn label(&self) -> &'static str {
        match self {
            VisitKind::InPerson => "In-person",
            VisitKind::VideoCall => "Video call",
        }
    }
}

impl CalendarCell {
    pub fn blank() -> Self {
        Self { date: None }
    }

    pub fn day(date: NaiveDate) -> Self {
        Self { date: Some(date) }
    }

    pub fn is_blank(&self) -> bool {
        self.date.is_none()
    }

    pub fn day_type(&self) -> CalendarDayType {
        match self.date {
            Some(_) => CalendarDayType::MonthDay,
            None => CalendarDayType::PaddingBefore,
        }
    }
}
