//! In-memory appointment source backed by fixture data.

use anyhow::Result;
use chrono::{Days, NaiveDate};
use shared::{AppointmentDetails, AppointmentRecord, AppointmentStatus, SessionMode, VisitKind};
use std::sync::{Arc, Mutex};

use super::traits::AppointmentSource;

/// Appointment source holding its records in memory.
///
/// Clones share the same records, so a test can keep a handle and swap the
/// data underneath a screen with [`MockAppointmentSource::replace`].
#[derive(Debug, Clone, Default)]
pub struct MockAppointmentSource {
    records: Arc<Mutex<Vec<AppointmentRecord>>>,
}

impl MockAppointmentSource {
    pub fn from_records(records: Vec<AppointmentRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    /// Sample appointments for the student calendar, relative to `today`
    pub fn student_fixture(today: NaiveDate) -> Self {
        let records = vec![
            student_record("1", today, "09:00", "Dr. Nguyen Thi Lan", VisitKind::InPerson, AppointmentStatus::Confirmed),
            student_record("2", today, "14:30", "Dr. Tran Van Minh", VisitKind::VideoCall, AppointmentStatus::Pending),
            student_record("3", offset(today, 3), "10:00", "Dr. Nguyen Thi Lan", VisitKind::VideoCall, AppointmentStatus::Pending),
            student_record("4", offset(today, 10), "15:00", "Dr. Le Hoang Anh", VisitKind::InPerson, AppointmentStatus::Confirmed),
        ];
        Self::from_records(records)
    }

    /// Sample appointments for the doctor calendar, relative to `today`
    pub fn doctor_fixture(today: NaiveDate) -> Self {
        let records = vec![
            doctor_record("1", today, "09:00", "Truc Quynh", SessionMode::Offline, "30 minutes", &["Anxiety"]),
            doctor_record("2", today, "14:00", "Thuy Vi", SessionMode::Offline, "30 minutes", &["Pressure"]),
            doctor_record("3", today, "16:00", "Truc Quynh", SessionMode::Online, "45 minutes", &["Stress", "Relationship Issues Chat"]),
            doctor_record("4", offset(today, 1), "10:00", "Anonymous", SessionMode::Online, "30 minutes", &["Stress", "Relationship Issues Chat"]),
        ];
        Self::from_records(records)
    }

    /// Swap the whole record set, as a refetch would
    pub fn replace(&self, records: Vec<AppointmentRecord>) {
        let mut guard = match self.records.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = records;
    }
}

impl AppointmentSource for MockAppointmentSource {
    fn list_appointments(&self) -> Result<Vec<AppointmentRecord>> {
        let guard = self
            .records
            .lock()
            .map_err(|_| anyhow::anyhow!("mock appointment store is poisoned"))?;
        Ok(guard.clone())
    }
}

fn offset(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_add_days(Days::new(days)).unwrap_or(today)
}

fn student_record(
    id: &str,
    date: NaiveDate,
    time: &str,
    doctor_name: &str,
    visit: VisitKind,
    status: AppointmentStatus,
) -> AppointmentRecord {
    AppointmentRecord {
        id: id.to_string(),
        date: format!("{}T{}:00", date.format("%Y-%m-%d"), time),
        time: time.to_string(),
        details: AppointmentDetails::Student {
            doctor_name: doctor_name.to_string(),
            visit,
            status,
        },
    }
}

fn doctor_record(
    id: &str,
    date: NaiveDate,
    time: &str,
    patient: &str,
    mode: SessionMode,
    duration: &str,
    tags: &[&str],
) -> AppointmentRecord {
    AppointmentRecord {
        id: id.to_string(),
        date: format!("{}T{}:00", date.format("%Y-%m-%d"), time),
        time: time.to_string(),
        details: AppointmentDetails::Doctor {
            patient: patient.to_string(),
            mode,
            duration: duration.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        },
    }
}
