use crate::utils::error::{GardenError, Result};
use chrono::NaiveDate;
use regex::Regex;

const DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%m-%d-%Y"];

/// chrono's `%Y` takes any number of digits, so the four-digit year is
/// enforced here before parsing.
const DATE_SHAPE: &str = r"^\d{1,2}[/-]\d{1,2}[/-]\d{4}$";

/// Parses `MM/DD/YYYY` or `MM-DD-YYYY`.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    let shape = Regex::new(DATE_SHAPE).map_err(|e| GardenError::Config {
        message: format!("date pattern: {}", e),
    })?;
    if !shape.is_match(trimmed) {
        return Err(GardenError::DateParse {
            value: value.to_string(),
        });
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| GardenError::DateParse {
            value: value.to_string(),
        })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Anything the planner accepts where a date is expected: text in one of the
/// supported formats, or an already-parsed date.
pub trait IntoDate {
    fn into_date(self) -> Result<NaiveDate>;
}

impl IntoDate for NaiveDate {
    fn into_date(self) -> Result<NaiveDate> {
        Ok(self)
    }
}

impl IntoDate for &NaiveDate {
    fn into_date(self) -> Result<NaiveDate> {
        Ok(*self)
    }
}

impl IntoDate for &str {
    fn into_date(self) -> Result<NaiveDate> {
        parse_date(self)
    }
}

impl IntoDate for String {
    fn into_date(self) -> Result<NaiveDate> {
        parse_date(&self)
    }
}

impl IntoDate for &String {
    fn into_date(self) -> Result<NaiveDate> {
        parse_date(self)
    }
}
