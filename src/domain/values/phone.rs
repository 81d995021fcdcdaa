use crate::error::{ModelError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{3,}$").unwrap());

pub const PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain numbers, and it should be at least 3 digits long";

/// A phone number of at least three digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        if !Self::is_valid(value) {
            return Err(ModelError::invalid_field("phone", PHONE_CONSTRAINTS));
        }
        Ok(Self(value.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        PHONE_REGEX.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
