//! Wire models exchanged with the appointments backend.

pub mod appointment;
pub mod auth;
pub mod errors;

pub use appointment::{Appointment, AppointmentSchedule};
pub use auth::{LoginRequest, LoginResponse};
pub use errors::ApiErrorBody;
