//! Birthday value.

use crate::error::{ModelError, Result};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Textual form of a birthday, e.g. `24-12-2001`.
pub const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

pub const BIRTHDAY_CONSTRAINTS: &str =
    "Birthdays should be a valid calendar date in the format DD-MM-YYYY";

/// A calendar date of birth.
///
/// Parsed from and rendered as `DD-MM-YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses a `DD-MM-YYYY` date.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidField`] for malformed text or impossible
    /// dates such as `31-02-2000`.
    pub fn parse(value: &str) -> Result<Self> {
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ModelError::invalid_field("birthday", BIRTHDAY_CONSTRAINTS))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}
