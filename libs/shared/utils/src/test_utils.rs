use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

use shared_config::AppConfig;

pub struct TestConfig {
    pub seed_demo_data: bool,
    pub cancelled_blocks_slots: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: false,
            cancelled_blocks_slots: true,
        }
    }
}

impl TestConfig {
    pub fn seeded() -> Self {
        Self {
            seed_demo_data: true,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            seed_demo_data: self.seed_demo_data,
            cancelled_blocks_slots: self.cancelled_blocks_slots,
        }
    }
}

/// A fixed instant on 2024-01-`day` at `hour`:`minute` UTC.
pub fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, minute, 0)
        .single()
        .unwrap_or_else(|| panic!("invalid test instant 2024-01-{} {}:{}", day, hour, minute))
}

pub struct MockAppointmentPayloads;

impl MockAppointmentPayloads {
    pub fn create(patient_name: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> serde_json::Value {
        json!({
            "start_time": start.to_rfc3339(),
            "end_time": end.to_rfc3339(),
            "patient_name": patient_name,
            "appointment_type": "Consultation",
            "phone": "+1234567890",
            "notes": "Booked from test",
            "status": "confirmed"
        })
    }

    pub fn reschedule(start: DateTime<Utc>, end: DateTime<Utc>) -> serde_json::Value {
        json!({
            "start_time": start.to_rfc3339(),
            "end_time": end.to_rfc3339()
        })
    }
}
