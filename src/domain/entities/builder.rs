//! Builder for [`Person`] from raw field text.

use crate::domain::entities::Person;
use crate::domain::values::{Address, Birthday, Course, Email, Name, Phone, Tag};
use crate::error::{ModelError, Result};

/// Collects raw field values and validates them all at [`PersonBuilder::build`].
///
/// Name, phone, email and address are required. Tags and courses default to
/// empty, birthday to absent and favourite to `false`.
///
/// # Examples
///
/// ```
/// use coursebook::domain::entities::PersonBuilder;
///
/// let person = PersonBuilder::new()
///     .name("alice")
///     .phone("85355255")
///     .email("alice@example.com")
///     .address("123 Main St")
///     .courses(["CS2103"])
///     .build()
///     .unwrap();
///
/// assert_eq!(person.name().as_str(), "Alice");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PersonBuilder {
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    tags: Vec<String>,
    courses: Vec<String>,
    birthday: Option<String>,
    favourite: bool,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Replaces the tags with `tags`.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the courses with `courses`.
    pub fn courses<I, S>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.courses = courses.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the birthday in `DD-MM-YYYY` form.
    pub fn birthday(mut self, birthday: impl Into<String>) -> Self {
        self.birthday = Some(birthday.into());
        self
    }

    pub fn no_birthday(mut self) -> Self {
        self.birthday = None;
        self
    }

    pub fn favourite(mut self, favourite: bool) -> Self {
        self.favourite = favourite;
        self
    }

    /// Validates every field and builds the person.
    ///
    /// # Errors
    ///
    /// - [`ModelError::MissingField`] if name, phone, email or address was never set
    /// - [`ModelError::InvalidField`] from the first field constructor that rejects
    ///   its value
    pub fn build(self) -> Result<Person> {
        let name = Name::new(required("name", self.name)?)?;
        let phone = Phone::new(required("phone", self.phone)?)?;
        let email = Email::new(required("email", self.email)?)?;
        let address = Address::new(required("address", self.address)?)?;

        let tags = self
            .tags
            .iter()
            .map(Tag::new)
            .collect::<Result<Vec<_>>>()?;
        let courses = self
            .courses
            .iter()
            .map(Course::new)
            .collect::<Result<Vec<_>>>()?;
        let birthday = self.birthday.as_deref().map(Birthday::parse).transpose()?;

        Ok(Person::new(
            name,
            phone,
            email,
            address,
            tags,
            courses,
            birthday,
            self.favourite,
        ))
    }
}

impl From<&Person> for PersonBuilder {
    /// Seeds a builder with every field of `person`, for building an edited copy.
    fn from(person: &Person) -> Self {
        Self {
            name: Some(person.name().to_string()),
            phone: Some(person.phone().to_string()),
            email: Some(person.email().to_string()),
            address: Some(person.address().to_string()),
            tags: person.tags().iter().map(ToString::to_string).collect(),
            courses: person.courses().iter().map(ToString::to_string).collect(),
            birthday: person.birthday().map(ToString::to_string),
            favourite: person.is_favourite(),
        }
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| ModelError::missing_field(field))
}
