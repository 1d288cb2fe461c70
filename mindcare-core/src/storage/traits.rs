//! # Storage Traits
//!
//! The calendar never reaches for appointment data on its own: a screen is
//! handed an [`AppointmentSource`] and pulls a fresh snapshot from it when
//! it refreshes. Today that is mock data; a networked source can be
//! dropped in later without touching the grid or lookup logic.

use anyhow::Result;
use shared::AppointmentRecord;

/// Supplies the appointment records a calendar screen displays
pub trait AppointmentSource: Send + Sync {
    /// Current snapshot of appointments, in display order
    fn list_appointments(&self) -> Result<Vec<AppointmentRecord>>;
}
