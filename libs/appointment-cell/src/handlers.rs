// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_utils::extractor::{AppJson, AppPath, AppQuery};

use crate::models::{
    AppointmentError, AppointmentId, CreateAppointmentRequest, DateRangeQuery,
    UpdateAppointmentRequest,
};
use crate::services::booking::AppointmentBookingService;

impl From<AppointmentError> for AppError {
    fn from(e: AppointmentError) -> Self {
        match e {
            AppointmentError::NotFound(_) => AppError::NotFound(e.to_string()),
            AppointmentError::ConflictDetected => AppError::Conflict(e.to_string()),
            AppointmentError::InvalidTimeRange | AppointmentError::InvalidDateRange => {
                AppError::ValidationError(e.to_string())
            }
        }
    }
}

// ==============================================================================
// CALENDAR QUERIES
// ==============================================================================

pub async fn list_appointments(
    State(service): State<Arc<AppointmentBookingService>>,
) -> Json<Value> {
    let appointments = service.list_appointments().await;

    Json(json!({
        "success": true,
        "total": appointments.len(),
        "data": appointments
    }))
}

pub async fn get_appointment(
    State(service): State<Arc<AppointmentBookingService>>,
    AppPath(appointment_id): AppPath<AppointmentId>,
) -> Result<Json<Value>, AppError> {
    let appointment = service.get_appointment(appointment_id).await?;

    Ok(Json(json!({
        "success": true,
        "data": appointment
    })))
}

pub async fn get_appointments_in_range(
    State(service): State<Arc<AppointmentBookingService>>,
    AppQuery(range): AppQuery<DateRangeQuery>,
) -> Result<Json<Value>, AppError> {
    let appointments = service.appointments_in_range(range.from, range.to).await?;

    Ok(Json(json!({
        "success": true,
        "total": appointments.len(),
        "data": appointments
    })))
}

pub async fn get_appointment_stats(
    State(service): State<Arc<AppointmentBookingService>>,
) -> Json<Value> {
    let stats = service.appointment_stats(Utc::now()).await;

    Json(json!({
        "success": true,
        "data": stats
    }))
}

// ==============================================================================
// CALENDAR MUTATIONS
// ==============================================================================

#[axum::debug_handler]
pub async fn create_appointment(
    State(service): State<Arc<AppointmentBookingService>>,
    AppJson(request): AppJson<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let appointment = service.create_appointment(request).await?;

    Ok((StatusCode::CREATED, Json(json!({
        "success": true,
        "data": appointment
    }))))
}

/// Drag, resize and edit from the calendar all land here.
#[axum::debug_handler]
pub async fn update_appointment(
    State(service): State<Arc<AppointmentBookingService>>,
    AppPath(appointment_id): AppPath<AppointmentId>,
    AppJson(patch): AppJson<UpdateAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = service.update_appointment(appointment_id, patch).await?;

    Ok(Json(json!({
        "success": true,
        "data": appointment
    })))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(service): State<Arc<AppointmentBookingService>>,
    AppPath(appointment_id): AppPath<AppointmentId>,
) -> Result<Json<Value>, AppError> {
    service.cancel_appointment(appointment_id).await?;

    Ok(Json(json!({
        "success": true
    })))
}
