pub(crate) mod appointments_table;
pub(crate) mod header_nav_item;
pub(crate) mod login_button;
pub(crate) mod login_modal;
pub(crate) mod search_appointments;

// Re-export components for convenience
pub use appointments_table::AppointmentsTable;
pub use login_button::LoginButton;
pub use search_appointments::SearchAppointments;
