pub mod booking;
pub mod conflict;
pub mod seed;
pub mod stats;

pub use booking::AppointmentBookingService;
pub use conflict::ConflictDetectionService;
