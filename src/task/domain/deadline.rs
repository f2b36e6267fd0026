//! Calendar deadline attached to a task.

use super::TaskDomainError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const DEADLINE_FORMAT: &str = "%Y-%m-%d";
const DEADLINE_TEXT_LEN: usize = "YYYY-MM-DD".len();
const SEPARATOR_POSITIONS: [usize; 2] = [4, 7];

/// Optional due date of a task, stored without a time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deadline(NaiveDate);

impl Deadline {
    /// Parses a deadline in strict `YYYY-MM-DD` form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDeadline`] when the input is not a
    /// zero-padded ISO calendar date, names a day that does not exist, or
    /// falls before year 1.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        let trimmed = value.trim();
        let invalid = || TaskDomainError::InvalidDeadline(value.to_owned());
        if !has_date_shape(trimmed) {
            return Err(invalid());
        }
        let date = NaiveDate::parse_from_str(trimmed, DEADLINE_FORMAT).map_err(|_| invalid())?;
        if date.year() < 1 {
            return Err(invalid());
        }
        Ok(Self(date))
    }

    /// Wraps an already validated calendar date.
    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

/// Checks for four digits, dash, two digits, dash, two digits.
///
/// `%Y` alone accepts signed and short years.
fn has_date_shape(text: &str) -> bool {
    text.len() == DEADLINE_TEXT_LEN
        && text.bytes().enumerate().all(|(position, byte)| {
            if SEPARATOR_POSITIONS.contains(&position) {
                byte == b'-'
            } else {
                byte.is_ascii_digit()
            }
        })
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DEADLINE_FORMAT))
    }
}
