//! Contact data model and the field rules shared by every contact store.
//!
//! Values of [`ContactName`] and [`PhoneNumber`] can only be obtained through
//! their validating constructors, so a store that accepts a [`ContactDraft`]
//! never holds a contact that breaks the length or pattern rules.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum number of characters in a contact name.
pub const NAME_MIN: usize = 3;
/// Minimum number of characters in a phone number.
pub const NUMBER_MIN: usize = 8;

/// Validation failures for contact fields and identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    /// The name is absent or empty.
    MissingName,
    /// The number is absent or empty.
    MissingNumber,
    /// The name has fewer than `min` characters.
    NameTooShort {
        /// Required character count.
        min: usize,
    },
    /// The number has fewer than `min` characters.
    NumberTooShort {
        /// Required character count.
        min: usize,
    },
    /// The number is not 2 or 3 digits, a hyphen, then digits.
    NumberInvalidFormat,
    /// A path identifier does not have the active store's shape.
    MalformedId,
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "must contain name"),
            Self::MissingNumber => write!(f, "must contain number"),
            Self::NameTooShort { min } => {
                write!(f, "name must be at least {min} characters long")
            }
            Self::NumberTooShort { min } => {
                write!(f, "number must be at least {min} characters long")
            }
            Self::NumberInvalidFormat => write!(
                f,
                "A phone number should have the following form: 2 or 3 numbers followed by a hyphen followed by numbers.",
            ),
            Self::MalformedId => write!(f, "malformatted id"),
        }
    }
}

impl std::error::Error for ContactValidationError {}

/// Identifier assigned to a contact by its store.
///
/// The volatile store hands out sequence numbers; the database store hands
/// out UUIDs. Serialises as a JSON number or string respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactId {
    /// Counter value issued by the in-memory store.
    Sequence(u64),
    /// UUID issued by the database store.
    Document(Uuid),
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(value) => write!(f, "{value}"),
            Self::Document(value) => write!(f, "{value}"),
        }
    }
}

/// Shape of the identifiers a store issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdFormat {
    /// Unsigned decimal integers.
    Sequence,
    /// Hyphenated or simple UUIDs.
    Document,
}

impl IdFormat {
    /// Parse a raw path segment into an identifier of this format.
    ///
    /// # Examples
    /// ```
    /// use phonebook::domain::{ContactId, IdFormat};
    ///
    /// assert_eq!(IdFormat::Sequence.parse("42"), Ok(ContactId::Sequence(42)));
    /// assert!(IdFormat::Document.parse("42").is_err());
    /// ```
    pub fn parse(self, raw: &str) -> Result<ContactId, ContactValidationError> {
        match self {
            Self::Sequence => u64::from_str(raw)
                .map(ContactId::Sequence)
                .map_err(|_| ContactValidationError::MalformedId),
            Self::Document => Uuid::parse_str(raw)
                .map(ContactId::Document)
                .map_err(|_| ContactValidationError::MalformedId),
        }
    }
}

/// Contact name with at least [`NAME_MIN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactName(String);

impl ContactName {
    /// Validate and construct a [`ContactName`].
    pub fn new(name: impl Into<String>) -> Result<Self, ContactValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ContactValidationError::MissingName);
        }
        if name.chars().count() < NAME_MIN {
            return Err(ContactValidationError::NameTooShort { min: NAME_MIN });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ContactName> for String {
    fn from(value: ContactName) -> Self {
        value.0
    }
}

impl TryFrom<String> for ContactName {
    type Error = ContactValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

static NUMBER_RE: OnceLock<Regex> = OnceLock::new();

fn number_regex() -> &'static Regex {
    NUMBER_RE.get_or_init(|| {
        Regex::new(r"^[0-9]{2,3}-[0-9]+$")
            .unwrap_or_else(|error| panic!("phone number regex failed to compile: {error}"))
    })
}

/// Phone number such as `040-123456`: 2 or 3 ASCII digits, a hyphen, then
/// ASCII digits, at least [`NUMBER_MIN`] characters overall.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate and construct a [`PhoneNumber`].
    pub fn new(number: impl Into<String>) -> Result<Self, ContactValidationError> {
        let number = number.into();
        if number.is_empty() {
            return Err(ContactValidationError::MissingNumber);
        }
        if number.chars().count() < NUMBER_MIN {
            return Err(ContactValidationError::NumberTooShort { min: NUMBER_MIN });
        }
        if !number_regex().is_match(&number) {
            return Err(ContactValidationError::NumberInvalidFormat);
        }
        Ok(Self(number))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ContactValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated name and number awaiting an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    name: ContactName,
    number: PhoneNumber,
}

impl ContactDraft {
    /// Build a draft from validated parts.
    pub fn new(name: ContactName, number: PhoneNumber) -> Self {
        Self { name, number }
    }

    /// Validate raw, possibly absent, request fields.
    ///
    /// Presence of both fields is checked before either field's shape, so a
    /// request missing the number but carrying a short name reports the
    /// missing number. Only an absent or empty value counts as missing;
    /// whitespace is content and is length checked like anything else.
    pub fn try_from_parts(
        name: Option<&str>,
        number: Option<&str>,
    ) -> Result<Self, ContactValidationError> {
        let name = name
            .filter(|value| !value.is_empty())
            .ok_or(ContactValidationError::MissingName)?;
        let number = number
            .filter(|value| !value.is_empty())
            .ok_or(ContactValidationError::MissingNumber)?;

        Ok(Self::new(ContactName::new(name)?, PhoneNumber::new(number)?))
    }

    /// Validated name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Validated number.
    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }
}

/// A stored phonebook entry.
///
/// ## Invariants
/// - `id` is assigned by the store and never changes.
/// - `name` and `number` satisfy the shared field rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    id: ContactId,
    name: ContactName,
    number: PhoneNumber,
}

impl Contact {
    /// Attach a store-issued identifier to a draft.
    pub fn new(id: ContactId, draft: ContactDraft) -> Self {
        let ContactDraft { name, number } = draft;
        Self { id, name, number }
    }

    /// Store-issued identifier.
    pub fn id(&self) -> ContactId {
        self.id
    }

    /// Contact name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Contact phone number.
    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }

    /// Replace name and number while keeping the identifier.
    pub fn replace(&mut self, draft: ContactDraft) {
        let ContactDraft { name, number } = draft;
        self.name = name;
        self.number = number;
    }
}
