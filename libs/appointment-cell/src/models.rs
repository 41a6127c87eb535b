// libs/appointment-cell/src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type AppointmentId = u64;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub patient_name: String,
    pub appointment_type: String,
    pub phone: String,
    pub notes: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Calendar label shown for the booking, e.g. "John Doe - Consultation".
    pub fn display_title(patient_name: &str, appointment_type: &str) -> String {
        format!("{} - {}", patient_name, appointment_type)
    }

    pub fn refresh_title(&mut self) {
        self.title = Self::display_title(&self.patient_name, &self.appointment_type);
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Confirmed,
    #[default]
    Pending,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub patient_name: String,
    pub appointment_type: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub status: AppointmentStatus,
    /// Overrides the derived "{patient} - {type}" label.
    pub title: Option<String>,
}

/// Partial update; absent fields keep the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub title: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub patient_name: Option<String>,
    pub appointment_type: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub status: Option<AppointmentStatus>,
}

impl UpdateAppointmentRequest {
    pub fn touches_schedule(&self) -> bool {
        self.start_time.is_some() || self.end_time.is_some()
    }

    pub fn touches_label(&self) -> bool {
        self.patient_name.is_some() || self.appointment_type.is_some()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DateRangeQuery {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppointmentStats {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
    pub today: usize,
    pub this_week: usize,
}

// ==============================================================================
// CONFLICT POLICY
// ==============================================================================

/// Which stored records take part in overlap checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictPolicy {
    /// When true, cancelled appointments still occupy their slot.
    pub cancelled_blocks_slots: bool,
}

impl Default for ConflictPolicy {
    fn default() -> Self {
        Self {
            cancelled_blocks_slots: true,
        }
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound(AppointmentId),

    #[error("Time slot conflicts with another appointment")]
    ConflictDetected,

    #[error("Appointment must end after it starts")]
    InvalidTimeRange,

    #[error("Range start must not be after range end")]
    InvalidDateRange,
}
