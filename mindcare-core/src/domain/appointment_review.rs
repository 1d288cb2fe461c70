//! # Appointment Review
//!
//! Accept/reject flow of the doctor's appointment-detail screen. Confirming
//! shows a success popup and the status flips once it is closed. Rejecting
//! asks for confirmation first, then shows its own success popup. Once an
//! appointment is confirmed or rejected it stays that way for the session.

use serde::{Deserialize, Serialize};
use shared::AppointmentStatus;
use std::fmt;

/// Popup currently shown over the detail screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReviewPrompt {
    #[default]
    None,
    ConfirmSuccess,
    RejectConfirm,
    RejectSuccess,
}

impl fmt::Display for ReviewPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReviewPrompt::None => "no popup",
            ReviewPrompt::ConfirmSuccess => "confirm-success popup",
            ReviewPrompt::RejectConfirm => "reject confirmation popup",
            ReviewPrompt::RejectSuccess => "reject-success popup",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("Appointment {id} is already {status}")]
    AlreadyDecided { id: String, status: AppointmentStatus },
    #[error("Cannot {action} while {prompt} is shown")]
    OutOfOrder { action: &'static str, prompt: ReviewPrompt },
}

/// Review state of one appointment on the detail screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentReview {
    appointment_id: String,
    status: AppointmentStatus,
    prompt: ReviewPrompt,
}

impl AppointmentReview {
    pub fn new(appointment_id: impl Into<String>) -> Self {
        Self {
            appointment_id: appointment_id.into(),
            status: AppointmentStatus::Pending,
            prompt: ReviewPrompt::None,
        }
    }

    pub fn appointment_id(&self) -> &str {
        &self.appointment_id
    }

    pub fn status(&self) -> AppointmentStatus {
        self.status
    }

    pub fn prompt(&self) -> ReviewPrompt {
        self.prompt
    }

    /// Accept/reject buttons are only offered while pending with no popup open
    pub fn actions_available(&self) -> bool {
        self.status == AppointmentStatus::Pending && self.prompt == ReviewPrompt::None
    }

    /// Doctor taps "confirm"
    pub fn request_confirm(&mut self) -> Result<ReviewPrompt, ReviewError> {
        self.open_from_idle("confirm", ReviewPrompt::ConfirmSuccess)
    }

    /// Doctor closes the confirm-success popup; the appointment is confirmed
    pub fn close_confirm_success(&mut self) -> Result<AppointmentStatus, ReviewError> {
        self.expect_prompt("close the confirm-success popup", ReviewPrompt::ConfirmSuccess)?;
        self.decide(AppointmentStatus::Confirmed);
        Ok(self.status)
    }

    /// Doctor taps "reject"; a confirmation popup is shown
    pub fn request_reject(&mut self) -> Result<ReviewPrompt, ReviewError> {
        self.open_from_idle("reject", ReviewPrompt::RejectConfirm)
    }

    /// Doctor backs out of the reject confirmation
    pub fn cancel_reject(&mut self) -> Result<ReviewPrompt, ReviewError> {
        self.expect_prompt("cancel the rejection", ReviewPrompt::RejectConfirm)?;
        self.prompt = ReviewPrompt::None;
        Ok(self.prompt)
    }

    /// Doctor agrees to reject
    pub fn agree_reject(&mut self) -> Result<ReviewPrompt, ReviewError> {
        self.expect_prompt("agree to the rejection", ReviewPrompt::RejectConfirm)?;
        self.prompt = ReviewPrompt::RejectSuccess;
        Ok(self.prompt)
    }

    /// Doctor closes the reject-success popup; the appointment is rejected
    pub fn close_reject_success(&mut self) -> Result<AppointmentStatus, ReviewError> {
        self.expect_prompt("close the reject-success popup", ReviewPrompt::RejectSuccess)?;
        self.decide(AppointmentStatus::Rejected);
        Ok(self.status)
    }

    fn open_from_idle(&mut self, action: &'static str, prompt: ReviewPrompt) -> Result<ReviewPrompt, ReviewError> {
        if self.status.is_final() {
            return Err(ReviewError::AlreadyDecided {
                id: self.appointment_id.clone(),
                status: self.status,
            });
        }
        if self.prompt != ReviewPrompt::None {
            return Err(ReviewError::OutOfOrder { action, prompt: self.prompt });
        }
        self.prompt = prompt;
        Ok(prompt)
    }

    fn expect_prompt(&self, action: &'static str, expected: ReviewPrompt) -> Result<(), ReviewError> {
        if self.prompt == expected {
            Ok(())
        } else {
            Err(ReviewError::OutOfOrder { action, prompt: self.prompt })
        }
    }

    fn decide(&mut self, status: AppointmentStatus) {
        self.status = status;
        self.prompt = ReviewPrompt::None;
        log::info!("✅ Appointment {} marked {}", self.appointment_id, status);
    }
}
