//! Serialized form of a person record.

use crate::domain::entities::{Person, PersonBuilder};
use crate::error::ModelError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for the rough phone shape accepted before domain validation.
static PHONE_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// A person as exchanged in JSON.
///
/// Field values are raw text. [`Validate`] checks the record's shape only and
/// accepts everything the field types accept; the conversion into [`Person`]
/// then applies every field constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PersonRecord {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(length(min = 3))]
    #[validate(regex(path = "*PHONE_SHAPE_REGEX", message = "Phone must contain only digits"))]
    pub phone: String,

    #[validate(contains(pattern = "@", message = "Email must contain '@'"))]
    pub email: String,

    #[validate(length(min = 1))]
    pub address: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub courses: Vec<String>,

    /// `DD-MM-YYYY`, omitted when unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,

    #[serde(default)]
    pub favourite: bool,
}

impl PersonRecord {
    /// Parses and shape-validates a JSON record.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidRecord`] for malformed JSON or a record that
    /// fails validation.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let record: Self =
            serde_json::from_str(json).map_err(|e| ModelError::InvalidRecord(e.to_string()))?;
        record.validate()?;
        Ok(record)
    }

    pub fn to_json(&self) -> Result<String, ModelError> {
        serde_json::to_string(self).map_err(|e| ModelError::InvalidRecord(e.to_string()))
    }
}

impl TryFrom<PersonRecord> for Person {
    type Error = ModelError;

    fn try_from(record: PersonRecord) -> Result<Self, Self::Error> {
        let builder = PersonBuilder::new()
            .name(record.name)
            .phone(record.phone)
            .email(record.email)
            .address(record.address)
            .tags(record.tags)
            .courses(record.courses)
            .favourite(record.favourite);

        match record.birthday {
            Some(birthday) => builder.birthday(birthday).build(),
            None => builder.build(),
        }
    }
}

impl From<&Person> for PersonRecord {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name().to_string(),
            phone: person.phone().to_string(),
            email: person.email().to_string(),
            address: person.address().to_string(),
            tags: person.tags().iter().map(ToString::to_string).collect(),
            courses: person.courses().iter().map(ToString::to_string).collect(),
            birthday: person.birthday().map(ToString::to_string),
            favourite: person.is_favourite(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE_JSON: &str = r#"{
        "name": "alice pauline",
        "phone": "94351253",
        "email": "alice@example.com",
        "address": "123, Jurong West Ave 6, #08-111",
        "tags": ["friends"],
        "courses": ["cs2103t"]
    }"#;

    #[test]
    fn test_from_json_defaults() {
        let record = PersonRecord::from_json(ALICE_JSON).unwrap();

        assert_eq!(record.name, "alice pauline");
        assert!(record.birthday.is_none());
        assert!(!record.favourite);
    }

    #[test]
    fn test_record_into_person_normalizes() {
        let record = PersonRecord::from_json(ALICE_JSON).unwrap();
        let person = Person::try_from(record).unwrap();

        assert_eq!(person.name().as_str(), "Alice Pauline");
        assert_eq!(
            person.courses().iter().map(|c| c.code()).collect::<Vec<_>>(),
            vec!["CS2103T"]
        );
    }

    #[test]
    fn test_from_json_rejects_bad_email() {
        let json = r#"{"name": "Bob", "phone": "999", "email": "not-an-email", "address": "x"}"#;
        let err = PersonRecord::from_json(json).unwrap_err();

        match err {
            ModelError::InvalidRecord(message) => assert!(message.contains("email")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_json_rejects_missing_field() {
        let json = r#"{"name": "Bob", "phone": "999", "email": "bob@example.com"}"#;
        let err = PersonRecord::from_json(json).unwrap_err();

        match err {
            ModelError::InvalidRecord(message) => assert!(message.contains("address")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_json_rejects_non_digit_phone() {
        let json = r#"{"name": "Bob", "phone": "12-34", "email": "bob@example.com", "address": "x"}"#;
        assert!(PersonRecord::from_json(json).is_err());
    }

    #[test]
    fn test_domain_constraints_apply_after_shape_check() {
        let json = r#"{"name": "Bob 2", "phone": "999", "email": "bob@example.com", "address": "x"}"#;
        let record = PersonRecord::from_json(json).unwrap();

        let err = Person::try_from(record).unwrap_err();
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn test_valid_person_survives_json_round_trip() {
        let person = PersonBuilder::new()
            .name("Élodie ".repeat(30).trim_end())
            .phone("1234567890123456789012")
            .email("élodie@example.com")
            .address("1 Rue de Rivoli")
            .build()
            .unwrap();
        assert!(person.name().as_str().chars().count() > 100);

        let json = PersonRecord::from(&person).to_json().unwrap();
        let record = PersonRecord::from_json(&json).unwrap();

        assert_eq!(Person::try_from(record).unwrap(), person);
    }

    #[test]
    fn test_record_from_person_is_canonical() {
        let person = Person::try_from(PersonRecord::from_json(ALICE_JSON).unwrap()).unwrap();
        let record = PersonRecord::from(&person);

        assert_eq!(record.name, "Alice Pauline");
        assert_eq!(record.courses, vec!["CS2103T".to_string()]);

        let json = record.to_json().unwrap();
        assert!(!json.contains("birthday"));
        assert_eq!(Person::try_from(record).unwrap(), person);
    }
}
