//! Validation and list handling for the slot search/delete widget.

use crate::models::AppointmentSchedule;
use crate::models::appointment::DATE_FORMAT;
use chrono::NaiveDate;
use thiserror::Error;

/// Reasons a search date is refused before any request is made.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    /// No date was entered.
    #[error("Please select a date.")]
    Required,
    /// The date is not a `YYYY-MM-DD` calendar date.
    #[error("Please enter a valid date (YYYY-MM-DD).")]
    InvalidDate,
}

/// Validates the date entered in the search widget.
///
/// # Returns
/// The trimmed date ready to be sent as the `date` query parameter.
///
/// # Errors
/// [`ValidationError::Required`] for blank input and
/// [`ValidationError::InvalidDate`] when it is not a `YYYY-MM-DD` date.
pub fn validate_search_date(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate)?;
    Ok(trimmed.to_string())
}

/// Remove the slot with `id`, keeping every other entry in order.
///
/// Returns `true` when an entry was removed.
pub fn remove_slot(slots: &mut Vec<AppointmentSchedule>, id: i64) -> bool {
    let before = slots.len();
    slots.retain(|slot| slot.id != id);
    slots.len() != before
}
