// libs/appointment-cell/src/services/booking.rs
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use shared_config::AppConfig;

use crate::models::{
    Appointment, AppointmentError, AppointmentId, AppointmentStats, ConflictPolicy,
    CreateAppointmentRequest, UpdateAppointmentRequest,
};
use crate::services::conflict::{validate_time_range, ConflictDetectionService};
use crate::services::seed::demo_appointments;
use crate::services::stats::compute_stats;

/// Owns the appointment calendar. Every mutation holds the write lock from the
/// conflict check through the write, so two bookings cannot both pass the check
/// for the same slot.
pub struct AppointmentBookingService {
    appointments: RwLock<Vec<Appointment>>,
    conflict_service: ConflictDetectionService,
}

impl AppointmentBookingService {
    pub fn new(config: &AppConfig) -> Self {
        let policy = ConflictPolicy {
            cancelled_blocks_slots: config.cancelled_blocks_slots,
        };
        let appointments = if config.seed_demo_data {
            demo_appointments()
        } else {
            Vec::new()
        };

        info!("Appointment calendar initialised with {} appointments (cancelled blocks slots: {})",
              appointments.len(), policy.cancelled_blocks_slots);

        Self::with_appointments(appointments, policy)
    }

    pub fn with_appointments(appointments: Vec<Appointment>, policy: ConflictPolicy) -> Self {
        Self {
            appointments: RwLock::new(appointments),
            conflict_service: ConflictDetectionService::new(policy),
        }
    }

    pub fn empty(policy: ConflictPolicy) -> Self {
        Self::with_appointments(Vec::new(), policy)
    }

    // ==============================================================================
    // READS
    // ==============================================================================

    pub async fn list_appointments(&self) -> Vec<Appointment> {
        self.appointments.read().await.clone()
    }

    pub async fn get_appointment(&self, id: AppointmentId) -> Result<Appointment, AppointmentError> {
        self.appointments
            .read()
            .await
            .iter()
            .find(|apt| apt.id == id)
            .cloned()
            .ok_or(AppointmentError::NotFound(id))
    }

    /// Appointments starting within `[from, to]`, inclusive on both ends.
    pub async fn appointments_in_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        if from > to {
            return Err(AppointmentError::InvalidDateRange);
        }

        let appointments = self.appointments.read().await;
        Ok(appointments
            .iter()
            .filter(|apt| apt.start_time >= from && apt.start_time <= to)
            .cloned()
            .collect())
    }

    pub async fn appointment_stats(&self, now: DateTime<Utc>) -> AppointmentStats {
        compute_stats(&self.appointments.read().await, now)
    }

    // ==============================================================================
    // MUTATIONS
    // ==============================================================================

    pub async fn create_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Booking appointment for {} from {} to {}",
               request.patient_name, request.start_time, request.end_time);

        validate_time_range(request.start_time, request.end_time)?;

        let mut appointments = self.appointments.write().await;
        self.conflict_service
            .ensure_slot_available(&appointments, request.start_time, request.end_time, None)?;

        let id = next_appointment_id(&appointments);
        let title = request
            .title
            .unwrap_or_else(|| Appointment::display_title(&request.patient_name, &request.appointment_type));

        let appointment = Appointment {
            id,
            title,
            start_time: request.start_time,
            end_time: request.end_time,
            patient_name: request.patient_name,
            appointment_type: request.appointment_type,
            phone: request.phone,
            notes: request.notes,
            status: request.status,
        };
        appointments.push(appointment.clone());

        info!("Appointment {} booked ({} - {})", id, appointment.start_time, appointment.end_time);
        Ok(appointment)
    }

    pub async fn update_appointment(
        &self,
        id: AppointmentId,
        patch: UpdateAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Updating appointment {}", id);

        let mut appointments = self.appointments.write().await;
        let index = appointments
            .iter()
            .position(|apt| apt.id == id)
            .ok_or(AppointmentError::NotFound(id))?;

        let current = &appointments[index];
        let reactivates = patch.status.is_some_and(|status| {
            !self.conflict_service.blocks_slot(&current.status)
                && self.conflict_service.blocks_slot(&status)
        });

        if patch.touches_schedule() || reactivates {
            let start_time = patch.start_time.unwrap_or(current.start_time);
            let end_time = patch.end_time.unwrap_or(current.end_time);

            if patch.touches_schedule() {
                validate_time_range(start_time, end_time)?;
            }
            self.conflict_service
                .ensure_slot_available(&appointments, start_time, end_time, Some(id))?;
        }

        let relabel = patch.touches_label();
        let appointment = &mut appointments[index];
        apply_patch(appointment, patch);
        if relabel {
            appointment.refresh_title();
        }

        info!("Appointment {} updated ({} - {}, {})",
              id, appointment.start_time, appointment.end_time, appointment.status);
        Ok(appointment.clone())
    }

    /// Removes the appointment outright; there is no tombstone.
    pub async fn cancel_appointment(&self, id: AppointmentId) -> Result<(), AppointmentError> {
        let mut appointments = self.appointments.write().await;
        let Some(index) = appointments.iter().position(|apt| apt.id == id) else {
            warn!("Cancel requested for unknown appointment {}", id);
            return Err(AppointmentError::NotFound(id));
        };

        appointments.remove(index);
        info!("Appointment {} cancelled, {} remaining", id, appointments.len());
        Ok(())
    }
}

fn next_appointment_id(appointments: &[Appointment]) -> AppointmentId {
    appointments.iter().map(|apt| apt.id).max().unwrap_or(0) + 1
}

fn apply_patch(appointment: &mut Appointment, patch: UpdateAppointmentRequest) {
    let UpdateAppointmentRequest {
        title,
        start_time,
        end_time,
        patient_name,
        appointment_type,
        phone,
        notes,
        status,
    } = patch;

    if let Some(title) = title {
        appointment.title = title;
    }
    if let Some(start_time) = start_time {
        appointment.start_time = start_time;
    }
    if let Some(end_time) = end_time {
        appointment.end_time = end_time;
    }
    if let Some(patient_name) = patient_name {
        appointment.patient_name = patient_name;
    }
    if let Some(appointment_type) = appointment_type {
        appointment.appointment_type = appointment_type;
    }
    if let Some(phone) = phone {
        appointment.phone = phone;
    }
    if let Some(notes) = notes {
        appointment.notes = notes;
    }
    if let Some(status) = status {
        appointment.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_max_plus_one() {
        assert_eq!(next_appointment_id(&[]), 1);

        let mut appointments = demo_appointments();
        assert_eq!(next_appointment_id(&appointments), 6);

        // Deleted interior ids are not reused; the highest one is.
        appointments.retain(|apt| apt.id != 5 && apt.id != 2);
        assert_eq!(next_appointment_id(&appointments), 5);
    }

    #[test]
    fn explicit_title_is_kept_without_label_change() {
        let mut appointment = demo_appointments().remove(0);
        apply_patch(&mut appointment, UpdateAppointmentRequest {
            title: Some("Custom".to_string()),
            ..Default::default()
        });
        assert_eq!(appointment.title, "Custom");
    }
}
