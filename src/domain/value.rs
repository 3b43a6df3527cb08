use crate::domain::limits::MAX_CHARS_REFERENCE;
use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS Broadcast account username.
///
/// Invariant: not blank. The value is sent exactly as provided.
pub struct Username(String);

impl Username {
    /// Form field name used by SMS Broadcast (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the username as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// SMS Broadcast account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Form field name used by SMS Broadcast (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
/// Sender id shown to the recipient (`from`).
///
/// Stored verbatim. Up to 11 letters or digits without punctuation or spaces;
/// the length is checked when a message is sent, not here. An empty value
/// makes the gateway use its shared 2-way number.
pub struct SenderId(String);

impl SenderId {
    /// Form field name used by SMS Broadcast (`from`).
    pub const FIELD: &'static str = "from";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number as sent to SMS Broadcast (`to`).
///
/// Accepted formats are `04xxxxxxxx`, `614xxxxxxxx` and `4xxxxxxxx`. No
/// normalization or format check is performed; parse into [`PhoneNumber`] and
/// convert if you want the international form.
pub struct Recipient(String);

impl Recipient {
    /// Form field name used by SMS Broadcast (`to`).
    pub const FIELD: &'static str = "to";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw value as sent to SMS Broadcast.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<String> for Recipient {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for Recipient {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<PhoneNumber> for Recipient {
    /// Use the international form without a leading `+` (`614xxxxxxxx`).
    fn from(value: PhoneNumber) -> Self {
        Self(value.international)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with its international representation.
///
/// Equality and hashing are based on the international form.
pub struct PhoneNumber {
    raw: String,
    international: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse a phone number, defaulting to Australia when the input has no
    /// country prefix.
    pub fn parse_au(input: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse(Some(country::Id::AU), input)
    }

    /// Parse and normalize a phone number.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: Recipient::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        let international = e164.trim_start_matches('+').to_owned();

        Ok(Self {
            raw,
            international,
            parsed,
        })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// International form without the leading `+`, as the gateway reports it.
    pub fn international(&self) -> &str {
        &self.international
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.international == other.international
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.international.hash(state);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
/// SMS message text (`message`).
///
/// Stored verbatim; its character count decides how many parts are billed.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by SMS Broadcast (`message`).
    pub const FIELD: &'static str = "message";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
/// Caller reference passed through to the gateway (`ref`).
///
/// Invariant: at most 20 characters.
pub struct Reference(String);

impl Reference {
    /// Form field name used by SMS Broadcast (`ref`).
    pub const FIELD: &'static str = "ref";

    /// Create a validated [`Reference`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let actual = value.chars().count();
        if actual > MAX_CHARS_REFERENCE {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: MAX_CHARS_REFERENCE,
                actual,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
