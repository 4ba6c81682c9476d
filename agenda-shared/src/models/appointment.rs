//! Appointment and schedule slot records.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Format used by the backend for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A booked appointment as listed by `GET /api/appointmentstable`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    /// Unique identifier of the appointment.
    pub id: i64,

    /// Identifier of the schedule slot the appointment occupies.
    #[serde(deserialize_with = "string_or_number")]
    pub schedule_id: String,

    /// Name of the customer who booked.
    pub customer_name: String,

    /// Contact email of the customer.
    pub customer_email: String,

    /// Booked service.
    pub service: String,

    /// Free-form notes left by the customer.
    #[serde(default)]
    pub notes: Option<String>,

    /// ISO calendar date (`YYYY-MM-DD`), kept verbatim for filtering.
    pub date: String,

    /// Human readable time slot, e.g. `10:00 - 11:00`.
    pub time_slot: String,
}

impl Appointment {
    /// Parse the calendar date of this appointment.
    ///
    /// Only the leading `YYYY-MM-DD` portion is considered, so full ISO
    /// timestamps are accepted as well.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_leading_date(&self.date)
    }
}

/// A schedule slot as returned by `GET /api/searchbardelete`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppointmentSchedule {
    /// Identifier used when deleting the slot.
    pub id: i64,

    /// ISO calendar date of the slot.
    pub date: String,

    /// Human readable time slot.
    pub time_slot: String,
}

/// Parse the `YYYY-MM-DD` prefix of an ISO date or timestamp.
#[must_use]
pub fn parse_leading_date(value: &str) -> Option<NaiveDate> {
    let prefix = value.trim().get(..10)?;
    NaiveDate::parse_from_str(prefix, DATE_FORMAT).ok()
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Integer(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appointment_deserialization() {
        let json = r#"{
            "id": 7,
            "schedule_id": "42",
            "customer_name": "Ana Torres",
            "customer_email": "ana@example.com",
            "service": "Haircut",
            "notes": "Window seat",
            "date": "2024-05-14",
            "time_slot": "10:00 - 11:00"
        }"#;
        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appointment.id, 7);
        assert_eq!(appointment.schedule_id, "42");
        assert_eq!(appointment.notes.as_deref(), Some("Window seat"));
        assert_eq!(appointment.time_slot, "10:00 - 11:00");
    }

    #[test]
    fn test_numeric_schedule_id_is_normalized() {
        let json = r#"{
            "id": 1,
            "schedule_id": 42,
            "customer_name": "Luis",
            "customer_email": "luis@example.com",
            "service": "Massage",
            "date": "2024-05-14",
            "time_slot": "09:00"
        }"#;
        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appointment.schedule_id, "42");
    }

    #[test]
    fn test_missing_and_null_notes_are_absent() {
        let missing = r#"{"id":1,"schedule_id":"1","customer_name":"a","customer_email":"b","service":"c","date":"2024-01-01","time_slot":"t"}"#;
        let null = r#"{"id":1,"schedule_id":"1","customer_name":"a","customer_email":"b","service":"c","notes":null,"date":"2024-01-01","time_slot":"t"}"#;
        let from_missing: Appointment = serde_json::from_str(missing).unwrap();
        let from_null: Appointment = serde_json::from_str(null).unwrap();
        assert_eq!(from_missing.notes, None);
        assert_eq!(from_null.notes, None);
    }

    #[test]
    fn test_parse_leading_date() {
        assert_eq!(
            parse_leading_date("2024-05-14"),
            NaiveDate::from_ymd_opt(2024, 5, 14)
        );
        assert_eq!(
            parse_leading_date("2024-05-14T08:30:00.000Z"),
            NaiveDate::from_ymd_opt(2024, 5, 14)
        );
        assert_eq!(parse_leading_date("14/05/2024"), None);
        assert_eq!(parse_leading_date("2024-05"), None);
        assert_eq!(parse_leading_date(""), None);
    }

    #[test]
    fn test_schedule_deserialization() {
        let json = r#"[{"id":3,"date":"2024-06-01","time_slot":"12:00"}]"#;
        let slots: Vec<AppointmentSchedule> = serde_json::from_str(json).unwrap();
        assert_eq!(
            slots,
            vec![AppointmentSchedule {
                id: 3,
                date: "2024-06-01".to_string(),
                time_slot: "12:00".to_string(),
            }]
        );
    }
}
