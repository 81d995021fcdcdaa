use crate::error::{ModelError, Result};
use std::fmt;
use std::str::FromStr;

pub const ADDRESS_CONSTRAINTS: &str = "Addresses can take any values, and it should not be blank";

/// A free-form postal address. The first character must not be whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(String);

impl Address {
    pub fn new(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        if !Self::is_valid(value) {
            return Err(ModelError::invalid_field("address", ADDRESS_CONSTRAINTS));
        }
        Ok(Self(value.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        value.chars().next().is_some_and(|c| !c.is_whitespace())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
