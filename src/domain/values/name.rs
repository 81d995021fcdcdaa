//! Person name value.

use crate::error::{ModelError, Result};
use crate::utils::text::capitalize_words;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Names start with a letter and contain only letters and spaces.
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Alphabetic}[\p{Alphabetic} ]*$").unwrap());

pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphabetic characters and spaces, and it should not be blank";

/// A validated, auto-capitalized person name.
///
/// Every word is stored in capitalized form, so `"bob choo"` and `"Bob Choo"`
/// produce equal names. Whitespace is not trimmed: `"Bob Choo "` is a
/// different name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Validates and normalizes `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidField`] if the name is blank or contains
    /// anything other than letters and spaces.
    pub fn new(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        if !Self::is_valid(value) {
            return Err(ModelError::invalid_field("name", NAME_CONSTRAINTS));
        }
        Ok(Self(capitalize_words(value)))
    }

    pub fn is_valid(value: &str) -> bool {
        NAME_REGEX.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
