//! Course code value.

use crate::error::{ModelError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Two to four letters, four digits, and an optional suffix letter.
static COURSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,4}[0-9]{4}[A-Za-z]?$").unwrap());

pub const COURSE_CONSTRAINTS: &str = "Course codes should consist of 2 to 4 letters, \
followed by 4 digits and an optional letter suffix, e.g. CS2103 or CS2103T";

/// A course code a person is enrolled in.
///
/// Codes are stored upper-cased, so `cs2103t` and `CS2103T` are the same course.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Course(String);

impl Course {
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidField`] when `value` is not a course code.
    pub fn new(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        if !Self::is_valid(value) {
            return Err(ModelError::invalid_field("course", COURSE_CONSTRAINTS));
        }
        Ok(Self(value.to_ascii_uppercase()))
    }

    pub fn is_valid(value: &str) -> bool {
        COURSE_REGEX.is_match(value)
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Course {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
