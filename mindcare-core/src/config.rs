//! Per-screen configuration.
//!
//! The student and doctor calendars share all grid and lookup logic; what
//! differs between them lives here: the header title, accent colour, the
//! route an appointment card opens, and the month rollover policy.

use serde::{Deserialize, Serialize};
use shared::ScreenRole;
use std::path::Path;

use crate::domain::calendar_view::RolloverPolicy;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read screen config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid screen config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub role: ScreenRole,
    /// Subtitle shown in the screen header
    pub title: String,
    /// Hex colour used for the selected day and appointment markers
    pub accent_color: String,
    /// Route opened when an appointment card is tapped
    pub appointment_route: String,
    pub rollover: RolloverPolicy,
}

impl ScreenConfig {
    pub fn student() -> Self {
        Self {
            role: ScreenRole::Student,
            title: "Student Dashboard".to_string(),
            accent_color: "#4A90E2".to_string(),
            appointment_route: "AppointmentHistory".to_string(),
            rollover: RolloverPolicy::default(),
        }
    }

    pub fn doctor() -> Self {
        Self {
            role: ScreenRole::Doctor,
            title: "Doctor Dashboard".to_string(),
            accent_color: "#7B61FF".to_string(),
            appointment_route: "DoctorAppointmentDetail".to_string(),
            rollover: RolloverPolicy::default(),
        }
    }

    /// Search box is only offered on the doctor calendar
    pub fn search_enabled(&self) -> bool {
        self.role == ScreenRole::Doctor
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: ScreenConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml_content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml_str(&yaml_content)?;
        log::info!("Loaded {:?} screen config from {}", config.role, path.display());
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self::student()
    }
}
