//! Date of birth validation functions

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FieldError;

// DD/MM/YYYY, ASCII digits only
static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").expect("date pattern compiles")
});

/// Day, month and year read positionally from a `DD/MM/YYYY` string
///
/// Values are not range-checked; `45/99/2000` parses to day 45, month 99.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl ParsedDate {
    /// Proleptic Gregorian date, when the triple names a real day
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day)?;
        let round_trips =
            date.year() == self.year && date.month() == self.month && date.day() == self.day;
        round_trips.then_some(date)
    }

    pub fn is_calendar_valid(self) -> bool {
        self.to_naive_date().is_some()
    }
}

/// Parses an exact `DD/MM/YYYY` string. Anything else yields `None`.
pub fn parse_date_of_birth(value: &str) -> Option<ParsedDate> {
    let caps = DATE_REGEX.captures(value)?;
    Some(ParsedDate {
        day: caps[1].parse().ok()?,
        month: caps[2].parse().ok()?,
        year: caps[3].parse().ok()?,
    })
}

/// Date of birth rules, in order:
/// required, format, month range, day range, February cap, calendar validity
///
/// The month check runs first, so `32/21/2000` reports the month.
pub fn validate_date_of_birth(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::DateOfBirthRequired);
    }

    let date = parse_date_of_birth(value).ok_or(FieldError::InvalidDateFormat)?;

    if !(1..=12).contains(&date.month) {
        return Err(FieldError::MonthOutOfRange);
    }
    if !(1..=31).contains(&date.day) {
        return Err(FieldError::DayOutOfRange);
    }
    if date.month == 2 && date.day > 29 {
        return Err(FieldError::FebruaryTooLong);
    }
    if !date.is_calendar_valid() {
        return Err(FieldError::InvalidDate);
    }

    Ok(())
}
