//! Event validation rules
//!
//! The four date conditions are deliberately collapsed into a single
//! failure: callers never learn which ordering constraint was broken.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use super::entity::EventSchedule;

/// Errors that can occur while validating an event
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EventValidationError {
    #[error("There is an inconsistency in the event dates.")]
    InvalidDates,

    #[error("Capacity has an invalid value.")]
    InvalidCapacity,

    #[error("Event name cannot be empty or missing.")]
    InvalidName,
}

/// Parse one of the event's date fields
///
/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` calendar dates, which
/// are read as midnight UTC. Anything else is an invalid-dates failure.
pub fn parse_event_date(raw: &str) -> Result<DateTime<Utc>, EventValidationError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(EventValidationError::InvalidDates)
}

/// Validate the ordering of an event's dates
///
/// Required: registration_start <= registration_end, start <= end,
/// registration_start <= start, registration_end <= end.
pub fn validate_event_schedule(schedule: &EventSchedule) -> Result<(), EventValidationError> {
    let registration_out_of_order =
        schedule.registration_end_date < schedule.registration_start_date;
    let event_out_of_order = schedule.end_date < schedule.start_date;
    let registration_starts_too_late = schedule.registration_start_date > schedule.start_date;
    let registration_ends_too_late = schedule.registration_end_date > schedule.end_date;

    if registration_out_of_order
        || event_out_of_order
        || registration_starts_too_late
        || registration_ends_too_late
    {
        return Err(EventValidationError::InvalidDates);
    }

    Ok(())
}

/// Validate an event's capacity (must be positive)
pub fn validate_event_capacity(capacity: i64) -> Result<(), EventValidationError> {
    if capacity <= 0 {
        return Err(EventValidationError::InvalidCapacity);
    }

    Ok(())
}

/// Validate an event's name (must be non-empty after trimming)
pub fn validate_event_name(name: &str) -> Result<(), EventValidationError> {
    if name.trim().is_empty() {
        return Err(EventValidationError::InvalidName);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn valid_schedule() -> EventSchedule {
        EventSchedule {
            registration_start_date: date(2024, 1, 1),
            registration_end_date: date(2024, 1, 15),
            start_date: date(2024, 2, 1),
            end_date: date(2024, 2, 3),
        }
    }

    #[test]
    fn test_parse_rfc3339() {
        let parsed = parse_event_date("2024-02-01T09:30:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 2, 1, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_calendar_date() {
        let parsed = parse_event_date("2024-02-01").unwrap();
        assert_eq!(parsed, date(2024, 2, 1));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(
            parse_event_date("not a date"),
            Err(EventValidationError::InvalidDates)
        );
        assert_eq!(parse_event_date(""), Err(EventValidationError::InvalidDates));
    }

    #[test]
    fn test_valid_schedule_passes() {
        assert!(validate_event_schedule(&valid_schedule()).is_ok());
    }

    #[test]
    fn test_schedule_allows_equal_boundaries() {
        // Registration may open and close the same day, and may run right up
        // to the event's end.
        let schedule = EventSchedule {
            registration_start_date: date(2024, 2, 1),
            registration_end_date: date(2024, 2, 1),
            start_date: date(2024, 2, 1),
            end_date: date(2024, 2, 1),
        };
        assert!(validate_event_schedule(&schedule).is_ok());
    }

    #[test]
    fn test_registration_out_of_order() {
        let schedule = EventSchedule {
            registration_start_date: date(2025, 1, 1),
            registration_end_date: date(2024, 1, 31),
            ..valid_schedule()
        };
        assert_eq!(
            validate_event_schedule(&schedule),
            Err(EventValidationError::InvalidDates)
        );
    }

    #[test]
    fn test_event_ends_before_it_starts() {
        let schedule = EventSchedule {
            start_date: date(2025, 2, 15),
            end_date: date(2024, 2, 17),
            registration_start_date: date(2024, 1, 1),
            registration_end_date: date(2024, 1, 31),
        };
        assert_eq!(
            validate_event_schedule(&schedule),
            Err(EventValidationError::InvalidDates)
        );
    }

    #[test]
    fn test_registration_starts_after_event_start() {
        let schedule = EventSchedule {
            registration_start_date: date(2024, 2, 2),
            registration_end_date: date(2024, 2, 2),
            start_date: date(2024, 2, 1),
            end_date: date(2024, 2, 3),
        };
        assert_eq!(
            validate_event_schedule(&schedule),
            Err(EventValidationError::InvalidDates)
        );
    }

    #[test]
    fn test_registration_ends_after_event_end() {
        let schedule = EventSchedule {
            registration_start_date: date(2024, 1, 1),
            registration_end_date: date(2024, 2, 4),
            start_date: date(2024, 2, 1),
            end_date: date(2024, 2, 3),
        };
        assert_eq!(
            validate_event_schedule(&schedule),
            Err(EventValidationError::InvalidDates)
        );
    }

    #[test]
    fn test_capacity_must_be_positive() {
        assert!(validate_event_capacity(1).is_ok());
        assert!(validate_event_capacity(500).is_ok());
        assert_eq!(
            validate_event_capacity(0),
            Err(EventValidationError::InvalidCapacity)
        );
        assert_eq!(
            validate_event_capacity(-10),
            Err(EventValidationError::InvalidCapacity)
        );
    }

    #[test]
    fn test_name_must_not_be_blank() {
        assert!(validate_event_name("Conf").is_ok());
        assert_eq!(
            validate_event_name(""),
            Err(EventValidationError::InvalidName)
        );
        assert_eq!(
            validate_event_name("   "),
            Err(EventValidationError::InvalidName)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EventValidationError::InvalidDates.to_string(),
            "There is an inconsistency in the event dates."
        );
        assert_eq!(
            EventValidationError::InvalidCapacity.to_string(),
            "Capacity has an invalid value."
        );
        assert_eq!(
            EventValidationError::InvalidName.to_string(),
            "Event name cannot be empty or missing."
        );
    }
}
