use chrono::{DateTime, Utc};

use shared_utils::time::{start_of_day, week_bounds};

use crate::models::{Appointment, AppointmentStats, AppointmentStatus};

/// Status and calendar counts relative to `now` (UTC days, Sunday-based weeks).
pub fn compute_stats(appointments: &[Appointment], now: DateTime<Utc>) -> AppointmentStats {
    let today = start_of_day(now);
    let (week_start, week_end) = week_bounds(now);

    let count_status = |status: AppointmentStatus| {
        appointments.iter().filter(|apt| apt.status == status).count()
    };

    AppointmentStats {
        total: appointments.len(),
        confirmed: count_status(AppointmentStatus::Confirmed),
        pending: count_status(AppointmentStatus::Pending),
        cancelled: count_status(AppointmentStatus::Cancelled),
        today: appointments
            .iter()
            .filter(|apt| start_of_day(apt.start_time) == today)
            .count(),
        this_week: appointments
            .iter()
            .filter(|apt| apt.start_time >= week_start && apt.start_time < week_end)
            .count(),
    }
}
