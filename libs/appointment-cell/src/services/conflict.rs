use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::models::{
    Appointment, AppointmentError, AppointmentId, AppointmentStatus, ConflictPolicy,
};

pub struct ConflictDetectionService {
    policy: ConflictPolicy,
}

impl ConflictDetectionService {
    pub fn new(policy: ConflictPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Appointments in `existing` whose slot intersects `[start_time, end_time)`.
    pub fn find_conflicts<'a>(
        &self,
        existing: &'a [Appointment],
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        exclude_appointment_id: Option<AppointmentId>,
    ) -> Vec<&'a Appointment> {
        debug!("Checking conflicts from {} to {} against {} appointments",
               start_time, end_time, existing.len());

        existing
            .iter()
            .filter(|apt| Some(apt.id) != exclude_appointment_id)
            .filter(|apt| self.blocks_slot(&apt.status))
            .filter(|apt| appointments_overlap(start_time, end_time, apt.start_time, apt.end_time))
            .collect()
    }

    /// Fails with `ConflictDetected` if the proposed slot intersects any blocking appointment.
    pub fn ensure_slot_available(
        &self,
        existing: &[Appointment],
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        exclude_appointment_id: Option<AppointmentId>,
    ) -> Result<(), AppointmentError> {
        let conflicts = self.find_conflicts(existing, start_time, end_time, exclude_appointment_id);

        if conflicts.is_empty() {
            return Ok(());
        }

        let ids: Vec<AppointmentId> = conflicts.iter().map(|apt| apt.id).collect();
        warn!("Conflict detected for slot {} - {}: overlaps appointments {:?}",
              start_time, end_time, ids);
        Err(AppointmentError::ConflictDetected)
    }

    /// Whether an appointment in `status` occupies its slot under this policy.
    pub fn blocks_slot(&self, status: &AppointmentStatus) -> bool {
        // Cancelled bookings keep their slot unless the policy releases them.
        match status {
            AppointmentStatus::Cancelled => self.policy.cancelled_blocks_slots,
            AppointmentStatus::Confirmed | AppointmentStatus::Pending => true,
        }
    }
}

/// Half-open overlap: `[start1, end1)` and `[start2, end2)` share at least one instant.
/// Back-to-back slots (one ends exactly when the other starts) do not overlap.
pub fn appointments_overlap(
    start1: DateTime<Utc>,
    end1: DateTime<Utc>,
    start2: DateTime<Utc>,
    end2: DateTime<Utc>,
) -> bool {
    start1 < end2 && start2 < end1
}

/// Rejects zero-length and inverted slots.
pub fn validate_time_range(
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> Result<(), AppointmentError> {
    if start_time < end_time {
        Ok(())
    } else {
        Err(AppointmentError::InvalidTimeRange)
    }
}
