use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Appointment, AppointmentStatus};

/// The demo calendar a fresh process starts with when seeding is enabled.
pub fn demo_appointments() -> Vec<Appointment> {
    vec![
        demo(1, (16, 9), (16, 10), "John Doe", "Consultation", "+1234567890", "Regular checkup", AppointmentStatus::Confirmed),
        demo(2, (16, 11), (16, 12), "Sarah Smith", "Follow-up", "+1234567891", "Post-surgery checkup", AppointmentStatus::Confirmed),
        demo(3, (17, 14), (17, 15), "Mike Johnson", "Emergency", "+1234567892", "Urgent care needed", AppointmentStatus::Pending),
        demo(4, (18, 10), (18, 11), "Emma Wilson", "Check-up", "+1234567893", "Annual physical", AppointmentStatus::Confirmed),
        demo(5, (19, 15), (19, 16), "David Brown", "Consultation", "+1234567894", "First visit consultation", AppointmentStatus::Pending),
    ]
}

#[allow(clippy::too_many_arguments)]
fn demo(
    id: u64,
    (start_day, start_hour): (u32, u32),
    (end_day, end_hour): (u32, u32),
    patient_name: &str,
    appointment_type: &str,
    phone: &str,
    notes: &str,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id,
        title: Appointment::display_title(patient_name, appointment_type),
        start_time: january_2024(start_day, start_hour),
        end_time: january_2024(end_day, end_hour),
        patient_name: patient_name.to_string(),
        appointment_type: appointment_type.to_string(),
        phone: phone.to_string(),
        notes: notes.to_string(),
        status,
    }
}

fn january_2024(day: u32, hour: u32) -> DateTime<Utc> {
    // Fixed calendar dates; `single` cannot be ambiguous in UTC.
    Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}
