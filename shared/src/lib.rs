use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Sentinel start time marking an event as all-day.
pub const ALL_DAY_START: &str = "00:00";
/// Sentinel end time marking an event as all-day.
pub const ALL_DAY_END: &str = "23:59";

/// Maximum accepted length for an event title, in characters.
pub const MAX_TITLE_LENGTH: usize = 64;

/// A calendar event. Times are "HH:MM" strings in 24-hour notation; an event
/// whose times equal the `ALL_DAY_START`/`ALL_DAY_END` pair is treated as
/// all-day by convention rather than via a separate flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Calendar date the event falls on (serialized as YYYY-MM-DD)
    pub date: NaiveDate,
    /// Start time, "HH:MM"
    pub start_time: String,
    /// End time, "HH:MM"
    pub end_time: String,
    pub description: Option<String>,
    /// Display color as a CSS value, picked in the event form
    pub color: Option<String>,
}

impl Event {
    /// Whether this event carries the all-day sentinel time pair.
    pub fn is_all_day(&self) -> bool {
        self.start_time == ALL_DAY_START && self.end_time == ALL_DAY_END
    }

    /// Start time as minutes since midnight.
    pub fn start_minutes(&self) -> Result<u32, TimeParseError> {
        minutes_since_midnight(&self.start_time)
    }

    /// End time as minutes since midnight.
    pub fn end_minutes(&self) -> Result<u32, TimeParseError> {
        minutes_since_midnight(&self.end_time)
    }
}

/// Errors from parsing an "HH:MM" time string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeParseError {
    #[error("expected HH:MM, got \"{0}\"")]
    Malformed(String),
    #[error("hour {0} out of range")]
    HourOutOfRange(u32),
    #[error("minute {0} out of range")]
    MinuteOutOfRange(u32),
}

/// Parse an "HH:MM" time string into (hour, minute).
pub fn parse_time(value: &str) -> Result<(u32, u32), TimeParseError> {
    let malformed = || TimeParseError::Malformed(value.to_string());
    let (hour_part, minute_part) = value.split_once(':').ok_or_else(malformed)?;
    if hour_part.is_empty() || minute_part.len() != 2 {
        return Err(malformed());
    }
    let hour: u32 = hour_part.parse().map_err(|_| malformed())?;
    let minute: u32 = minute_part.parse().map_err(|_| malformed())?;
    if hour > 23 {
        return Err(TimeParseError::HourOutOfRange(hour));
    }
    if minute > 59 {
        return Err(TimeParseError::MinuteOutOfRange(minute));
    }
    Ok((hour, minute))
}

/// Parse an "HH:MM" time string into minutes since midnight.
pub fn minutes_since_midnight(value: &str) -> Result<u32, TimeParseError> {
    let (hour, minute) = parse_time(value)?;
    Ok(hour * 60 + minute)
}

/// Validation result for the event form
#[derive(Debug, Clone, PartialEq)]
pub struct EventFormValidation {
    pub is_valid: bool,
    pub errors: Vec<EventValidationError>,
}

/// Specific event form validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum EventValidationError {
    EmptyTitle,
    TitleTooLong(usize),
    InvalidStartTime(String),
    InvalidEndTime(String),
    EndNotAfterStart,
}

impl fmt::Display for EventValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventValidationError::EmptyTitle => write!(f, "Please enter a title"),
            EventValidationError::TitleTooLong(len) => {
                write!(f, "Title is too long ({} of {} characters)", len, MAX_TITLE_LENGTH)
            }
            EventValidationError::InvalidStartTime(value) => {
                write!(f, "Start time \"{}\" is not a valid HH:MM time", value)
            }
            EventValidationError::InvalidEndTime(value) => {
                write!(f, "End time \"{}\" is not a valid HH:MM time", value)
            }
            EventValidationError::EndNotAfterStart => {
                write!(f, "End time must be after the start time")
            }
        }
    }
}

/// Validate the fields of the event form. The week view itself never
/// validates; this runs in the create/edit modal before save or update.
pub fn validate_event_form(title: &str, start_time: &str, end_time: &str) -> EventFormValidation {
    let mut errors = Vec::new();

    let trimmed = title.trim();
    if trimmed.is_empty() {
        errors.push(EventValidationError::EmptyTitle);
    } else if trimmed.chars().count() > MAX_TITLE_LENGTH {
        errors.push(EventValidationError::TitleTooLong(trimmed.chars().count()));
    }

    let start = match minutes_since_midnight(start_time) {
        Ok(minutes) => Some(minutes),
        Err(_) => {
            errors.push(EventValidationError::InvalidStartTime(start_time.to_string()));
            None
        }
    };
    let end = match minutes_since_midnight(end_time) {
        Ok(minutes) => Some(minutes),
        Err(_) => {
            errors.push(EventValidationError::InvalidEndTime(end_time.to_string()));
            None
        }
    };

    if let (Some(start), Some(end)) = (start, end) {
        if end <= start {
            errors.push(EventValidationError::EndNotAfterStart);
        }
    }

    EventFormValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}
