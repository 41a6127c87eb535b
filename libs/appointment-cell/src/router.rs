// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};

use crate::handlers;
use crate::services::booking::AppointmentBookingService;

pub fn appointment_routes(service: Arc<AppointmentBookingService>) -> Router {
    Router::new()
        .route("/", get(handlers::list_appointments).post(handlers::create_appointment))
        .route("/range", get(handlers::get_appointments_in_range))
        .route("/stats", get(handlers::get_appointment_stats))
        .route(
            "/{appointment_id}",
            get(handlers::get_appointment)
                .patch(handlers::update_appointment)
                .delete(handlers::cancel_appointment),
        )
        .with_state(service)
}
